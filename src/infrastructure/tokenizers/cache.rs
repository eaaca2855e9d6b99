use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::errors::DomainError;
use crate::infrastructure::tokenizers::handle::TokenizerHandle;

type Slot = Arc<Mutex<Option<TokenizerHandle>>>;

/// Process-lifetime tokenizer cache keyed by the requested model id.
///
/// Each key owns a slot guarded by its own lock, so concurrent requests for the
/// same uncached id wait on a single load while other ids load in parallel.
/// A failed load leaves the slot empty and the next request retries it.
#[derive(Default)]
pub struct TokenizerCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl TokenizerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_try_load<F>(&self, model_id: &str, load: F) -> Result<TokenizerHandle, DomainError>
    where
        F: FnOnce() -> Result<TokenizerHandle, DomainError>,
    {
        let slot = self.slot(model_id)?;
        // A loader that panicked never stored a handle, so the slot is still empty.
        let mut entry = slot.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Recovering tokenizer cache entry for {} after a failed load", model_id);
            poisoned.into_inner()
        });

        if let Some(handle) = entry.as_ref() {
            tracing::debug!("Tokenizer cache hit for {}", model_id);
            return Ok(handle.clone());
        }

        let handle = load()?;
        *entry = Some(handle.clone());
        Ok(handle)
    }

    #[cfg(test)]
    pub fn contains(&self, model_id: &str) -> Result<bool, DomainError> {
        let slot = match self.lock_slots()?.get(model_id).cloned() {
            Some(slot) => slot,
            None => return Ok(false),
        };

        // A slot that is mid-load holds its lock; report it as not cached yet.
        let loaded = match slot.try_lock() {
            Ok(entry) => entry.is_some(),
            Err(std::sync::TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_some(),
            Err(std::sync::TryLockError::WouldBlock) => false,
        };
        Ok(loaded)
    }

    #[cfg(test)]
    pub fn entry_count(&self) -> Result<usize, DomainError> {
        let slots = self.lock_slots()?;
        Ok(slots
            .values()
            .filter(|slot| matches!(slot.try_lock(), Ok(entry) if entry.is_some()))
            .count())
    }

    fn slot(&self, model_id: &str) -> Result<Slot, DomainError> {
        let mut slots = self.lock_slots()?;
        Ok(Arc::clone(
            slots
                .entry(model_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(None))),
        ))
    }

    fn lock_slots(&self) -> Result<MutexGuard<'_, HashMap<String, Slot>>, DomainError> {
        self.slots.lock().map_err(|error| {
            DomainError::InternalError(format!("Tokenizer cache lock poisoned: {}", error))
        })
    }
}
