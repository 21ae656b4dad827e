// Port Layer - Interfaces for external dependencies

pub mod application_store;
pub mod faq_store;
pub mod feedback_store;
pub mod id_provider; // For deterministic testing
pub mod job_directory;
pub mod job_store;
pub mod job_view_store;
pub mod message_store;
pub mod time_provider;
pub mod transaction;
pub mod user_store;

// Re-exports
pub use application_store::{ApplicationFilter, ApplicationStore};
pub use faq_store::FaqStore;
pub use feedback_store::FeedbackStore;
pub use id_provider::IdProvider;
pub use job_directory::JobDirectory;
pub use job_store::JobStore;
pub use job_view_store::JobViewStore;
pub use message_store::MessageStore;
pub use time_provider::TimeProvider;
pub use transaction::{
    ApplicationStoreTransaction, Transaction, TransactionalApplicationStore,
};
pub use user_store::UserStore;
