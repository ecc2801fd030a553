//! Common types used throughout Stuff Manager
//!
//! This module contains the record type shared by the server and the client,
//! its insertion form, and the error body exchanged over HTTP.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Bounds
// ============================================================================

/// Maximum length of a stuff name, in characters
pub const NAME_MAX_LEN: usize = 200;

/// Maximum length of a stuff description, in characters
pub const DESCRIPTION_MAX_LEN: usize = 1000;

// ============================================================================
// Records
// ============================================================================

/// One inventory item as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stuff {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
}

impl Stuff {
    /// Description text, empty when absent
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// A stuff record before the store has assigned it an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStuff {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewStuff {
    /// Create a new record with a name and description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// Create a new record without a description
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// The demo record used for seeding: `Stuff Item {n}`
    pub fn demo(n: usize) -> Self {
        Self::new(
            format!("Stuff Item {n}"),
            format!("Description for stuff item {n}"),
        )
    }

    /// Check the field bounds
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("Name is required"));
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            return Err(Error::validation(format!(
                "Name must be at most {NAME_MAX_LEN} characters"
            )));
        }
        if let Some(ref description) = self.description {
            if description.chars().count() > DESCRIPTION_MAX_LEN {
                return Err(Error::validation(format!(
                    "Description must be at most {DESCRIPTION_MAX_LEN} characters"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Error body returned by the HTTP endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    /// Code for rejected page numbers
    pub const INVALID_PAGE: &'static str = "INVALID_PAGE";

    /// Code for unexpected server faults
    pub const INTERNAL_ERROR: &'static str = "INTERNAL_ERROR";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
