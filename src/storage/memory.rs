use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use super::{
    repository::{Repository, RepositoryInput},
    traits::{Storage, StorageError, StorageResult},
};

type Repositories = IndexMap<String, Repository>;

/// Process-local repository store. Clones share the same collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    repositories: Arc<RwLock<Repositories>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, Repositories>> {
        self.repositories.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, Repositories>> {
        self.repositories.write().map_err(|_| StorageError::Poisoned)
    }

    fn modify<F>(&self, id: &str, f: F) -> StorageResult<Repository>
    where
        F: FnOnce(&mut Repository),
    {
        let mut guard = self.write()?;
        let repository = guard
            .get_mut(id)
            .ok_or_else(|| StorageError::UnknownRepository(id.to_string()))?;
        f(repository);
        Ok(repository.clone())
    }
}

impl Storage for MemoryStorage {
    fn list_repositories(&self) -> StorageResult<Vec<Repository>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn count_repositories(&self) -> StorageResult<usize> {
        Ok(self.read()?.len())
    }

    fn contains_repository(&self, id: &str) -> StorageResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    fn create_repository(&self, input: RepositoryInput) -> StorageResult<Repository> {
        let repository = Repository::new(input);
        let mut guard = self.write()?;
        guard.insert(repository.id.clone(), repository.clone());
        log::debug!("Stored repository {}", repository.id);
        Ok(repository)
    }

    fn update_repository(&self, id: &str, input: RepositoryInput) -> StorageResult<Repository> {
        self.modify(id, |repository| repository.apply(input))
    }

    fn delete_repository(&self, id: &str) -> StorageResult<Repository> {
        let mut guard = self.write()?;
        // shift_remove keeps the remaining records in insertion order
        guard
            .shift_remove(id)
            .ok_or_else(|| StorageError::UnknownRepository(id.to_string()))
    }

    fn like_repository(&self, id: &str) -> StorageResult<Repository> {
        self.modify(id, Repository::like)
    }
}
