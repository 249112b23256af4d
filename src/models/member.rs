//! Plan member roster record
//!
//! The settlement engine only ever sees member *ids*; the name exists for
//! display. The roster in a snapshot is authoritative for who appears in
//! the settlement output.

use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// One household member on a plan's roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: UserId,
    /// Display name
    #[serde(default)]
    pub name: String,
}

impl Member {
    /// Create a new member with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
        }
    }

    /// Create a member for an existing id
    pub fn with_id(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
