//! Roster entry data structure.

use serde::{Deserialize, Serialize};

/// A teacher allowed to log in, as listed on the roster sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Staff identifier used as the login credential (trimmed)
    pub masp: String,

    /// Display name (trimmed)
    pub name: String,
}

impl UserRecord {
    pub fn new(masp: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            masp: masp.into(),
            name: name.into(),
        }
    }
}
