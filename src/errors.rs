//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Lexi.
//! The Lexi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Lexi Error Module
//!
//! This module defines the error types used throughout Lexi for consistent
//! error handling and reporting.
//!
//! ## Error Categories
//!
//! - **Validation**: A word root does not satisfy the precondition or the
//!   suffix its affix rule requires. Carries the root and the expected text.
//! - **Rule**: The affix rule string itself is malformed
//! - **UnsupportedSpeechPart**: No positional slot table exists for a tag
//! - **Lookup**: The grammatical dictionary has no row for a word id
//! - **Config**: Study configuration is missing or malformed
//! - **Io** / **Serde**: Filesystem and (de)serialization failures
//! - **Internal**: Unexpected internal failures
//!
//! Generation never returns partial results: either every derivative form is
//! produced or an error is returned.
//!
//! ## Usage
//!
//! ```rust
//! use lexi::errors::{LxError, Result};
//!
//! fn strip(root: &str, suffix: &str) -> Result<String> {
//!     root.strip_suffix(suffix)
//!         .map(str::to_string)
//!         .ok_or_else(|| LxError::validation(root, suffix, "root does not end with the suffix"))
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Lexi.
pub type Result<T> = std::result::Result<T, LxError>;

/// Canonical error enumeration for Lexi.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LxError {
    /// A root failed a precondition or suffix check of its affix rule.
    #[error("validation error: '{root}' does not satisfy '{condition}': {message}")]
    Validation {
        root: String,
        condition: String,
        message: String,
    },

    /// The affix rule string is structurally invalid.
    #[error("rule error: {message}")]
    Rule { message: String },

    /// A part-of-speech tag without a positional slot table.
    #[error("the speech part '{0}' isn't supported")]
    UnsupportedSpeechPart(String),

    /// The external dictionary returned no row for the request.
    #[error("lookup error: {message}")]
    Lookup { message: String },

    /// Study configuration is missing or malformed.
    #[error("config error: {message}")]
    Config { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for LxError {
    fn from(err: io::Error) -> Self {
        LxError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LxError {
    fn from(err: serde_json::Error) -> Self {
        LxError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for LxError {
    fn from(err: serde_yaml::Error) -> Self {
        LxError::Serde(err.to_string())
    }
}

impl LxError {
    /// Helper to construct validation errors for a failing root.
    pub fn validation(
        root: impl Into<String>,
        condition: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LxError::Validation {
            root: root.into(),
            condition: condition.into(),
            message: message.into(),
        }
    }

    /// Helper to construct rule string errors.
    pub fn rule<T: Into<String>>(message: T) -> Self {
        LxError::Rule {
            message: message.into(),
        }
    }

    /// Helper to construct lookup errors.
    pub fn lookup<T: Into<String>>(message: T) -> Self {
        LxError::Lookup {
            message: message.into(),
        }
    }

    /// Helper to construct configuration errors.
    pub fn config<T: Into<String>>(message: T) -> Self {
        LxError::Config {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        LxError::Internal(message.into())
    }

    /// True for errors caused by a word that does not fit its rule set.
    pub fn is_validation(&self) -> bool {
        matches!(self, LxError::Validation { .. })
    }
}
