//! Base identity shared by every domain entity
//!
//! Every entity embeds a [`Base`], which carries a globally unique identifier
//! and the audit timestamps of the entity. The identifier is generated once at
//! construction and never changes afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Identity and audit timestamps of an entity
///
/// `updated_at` stays `None` until the owning entity is mutated for the
/// first time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Base {
    /// Globally unique identifier (UUID v4)
    pub id: Uuid,

    /// Moment the entity was created
    pub created_at: DateTime<Utc>,

    /// Moment of the last mutation, if any
    pub updated_at: Option<DateTime<Utc>>,
}

impl Base {
    /// Create a fresh identity stamped with the current time
    pub fn new() -> Self {
        Base {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Record a mutation of the owning entity
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::new()
    }
}
