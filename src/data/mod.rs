pub mod cache;
pub mod loader;
pub mod types;

pub use cache::{load_cached, MemoryCache, NoCache, SharedTable, TableCache};
pub use loader::{load_records, parse_records, LoadError};
pub use types::EmployeeRecord;
