//! Ordered, id-keyed set of accepted dispatches.

use crate::models::Dispatch;
use crate::validator::DispatchValidator;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// An id collision is a producer bug; fail loudly instead of overwriting.
    #[error("dispatch id {0} already present in collection")]
    DuplicateId(u32),
}

/// Insertion-ordered dispatches, unique by id.
#[derive(Debug, Clone, Default)]
pub struct DispatchCollection {
    dispatches: Vec<Dispatch>,
}

impl DispatchCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-validated dispatch. Callers run the validator first;
    /// this only enforces id uniqueness.
    pub fn append(&mut self, dispatch: Dispatch) -> Result<(), CollectionError> {
        if self.dispatches.iter().any(|d| d.id == dispatch.id) {
            return Err(CollectionError::DuplicateId(dispatch.id));
        }
        self.dispatches.push(dispatch);
        Ok(())
    }

    /// Remove the dispatch with the given id. Absent ids are a no-op; returns
    /// whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.dispatches.len();
        self.dispatches.retain(|d| d.id != id);
        self.dispatches.len() != before
    }

    /// Atomically swap the entire contents. Scenario data is trusted
    /// pre-validated input here; use
    /// [`replace_all_validated`](Self::replace_all_validated) for a hardened
    /// rebuild.
    pub fn replace_all(&mut self, dispatches: Vec<Dispatch>) {
        self.dispatches = dispatches;
    }

    /// Replace the contents from scenario data, re-validating every record.
    /// Records that fail validation or collide on id are skipped; the returned
    /// warnings describe each skipped record.
    pub fn replace_all_validated(
        &mut self,
        validator: &DispatchValidator<'_>,
        dispatches: Vec<Dispatch>,
    ) -> Vec<String> {
        let mut accepted = DispatchCollection::new();
        let mut warnings = Vec::new();

        for dispatch in dispatches {
            let result = validator.validate_dispatch(&dispatch);
            if !result.is_valid() {
                let reasons: Vec<String> = result
                    .errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                warnings.push(format!(
                    "scenario dispatch {} skipped: {}",
                    dispatch.id,
                    reasons.join("; ")
                ));
                continue;
            }
            if let Err(err) = accepted.append(dispatch) {
                warnings.push(format!("scenario dispatch skipped: {err}"));
            }
        }

        self.dispatches = accepted.dispatches;
        warnings
    }

    /// Next free id for a producer that assigns ids monotonically.
    pub fn next_id(&self) -> u32 {
        self.dispatches.iter().map(|d| d.id).max().map_or(1, |m| m + 1)
    }

    pub fn len(&self) -> usize {
        self.dispatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatches.is_empty()
    }

    pub fn as_slice(&self) -> &[Dispatch] {
        &self.dispatches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dispatch> {
        self.dispatches.iter()
    }
}
