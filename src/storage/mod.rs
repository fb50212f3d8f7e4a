mod memory;
mod repository;
pub mod traits;

pub use memory::MemoryStorage;
pub use repository::{Repository, RepositoryInput};
pub use traits::{Storage, StorageError, StorageResult};
