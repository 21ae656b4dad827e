// Application Layer - Use Cases and Business Logic

pub mod lifecycle;

// Re-exports
pub use lifecycle::{
    ApplicationLifecycleService, ApplyOutcome, ApplyRequest, UpdateStatusRequest,
};
