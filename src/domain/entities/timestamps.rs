//! Creation/update timestamp pair embedded in stored documents.

use bson::DateTime;
use serde::{Deserialize, Serialize};

/// Creation and last-modification times of a stored document.
///
/// A plain value object embedded in entities; no base-document inheritance.
/// [`Timestamps::stamp`] initializes both fields to the same instant at
/// creation, and [`Timestamps::touch`] refreshes `updated_at` on every later
/// save, so `created_at <= updated_at` holds for the document's whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Timestamps {
    /// Stamps a freshly created document: both fields set to now.
    pub fn stamp() -> Self {
        let now = DateTime::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at` to now. `created_at` is never changed.
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
