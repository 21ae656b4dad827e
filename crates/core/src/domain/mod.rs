// Domain Layer - Pure business logic and entities

pub mod application;
pub mod error;
pub mod faq;
pub mod feedback;
pub mod job;
pub mod job_view;
pub mod message;
pub mod user;

// Re-exports
pub use application::{Application, ApplicationId, ApplicationStatus};
pub use error::DomainError;
pub use faq::{Faq, FaqId};
pub use feedback::{Feedback, FeedbackId};
pub use job::{JobId, JobPosting};
pub use job_view::JobView;
pub use message::{Message, MessageId};
pub use user::{User, UserId, UserRole};
