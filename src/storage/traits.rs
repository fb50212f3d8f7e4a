use thiserror::Error;

use super::repository::{Repository, RepositoryInput};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("unknown repository id: {0}")]
    UnknownRepository(String),
    #[error("storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Repository collection used by the REST layer.
///
/// Every id-scoped mutation checks existence and mutates in one step, so a record
/// removed concurrently yields `UnknownRepository` instead of a lost update.
pub trait Storage {
    fn list_repositories(&self) -> StorageResult<Vec<Repository>>;
    fn count_repositories(&self) -> StorageResult<usize>;
    fn contains_repository(&self, id: &str) -> StorageResult<bool>;
    fn create_repository(&self, input: RepositoryInput) -> StorageResult<Repository>;
    fn update_repository(&self, id: &str, input: RepositoryInput) -> StorageResult<Repository>;
    fn delete_repository(&self, id: &str) -> StorageResult<Repository>;
    fn like_repository(&self, id: &str) -> StorageResult<Repository>;
}
