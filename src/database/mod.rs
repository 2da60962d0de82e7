pub mod memory;
pub mod pool;
pub mod scholarship_store;
pub mod user_store;

pub use memory::{MemoryScholarshipStore, MemoryUserStore};
pub use scholarship_store::{PgScholarshipStore, ScholarshipStore};
pub use user_store::{PgUserStore, UserStore};
