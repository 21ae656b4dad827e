// Job Board Infrastructure - SQLite Adapter
// Implements every persistence port from jobboard-core

mod application_store;
mod connection;
mod faq_store;
mod feedback_store;
mod job_store;
mod job_view_store;
mod message_store;
mod migration;
mod store_error;
mod transaction;
mod user_store;

pub use application_store::SqliteApplicationStore;
pub use connection::create_pool;
pub use faq_store::SqliteFaqStore;
pub use feedback_store::SqliteFeedbackStore;
pub use job_store::SqliteJobStore;
pub use job_view_store::SqliteJobViewStore;
pub use message_store::SqliteMessageStore;
pub use migration::run_migrations;
pub use transaction::SqliteApplicationTransaction;
pub use user_store::SqliteUserStore;

// Note: sqlx::Error conversion is handled by store_error::map_sqlx_error
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
