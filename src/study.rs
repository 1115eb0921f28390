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
//! # Study Configuration Module
//!
//! Which derivative forms are worth putting on a flashcard is a policy of the
//! caller, not of the engine. The policy is an ordered list of slot names per
//! speech-part tag and word type, so irregular word types can keep a
//! different selection than the regular ones of the same speech part:
//!
//! ```yaml
//! noun_female:
//!   '75':
//!     - singular_definite
//!     - plural_indefinite
//! noun_male:
//!   '1':
//!     - singular_definite
//!     - plural_indefinite
//!     - contable
//!   '28':
//!     - plural_indefinite
//! ```
//!
//! Word type ids are map keys, so they are kept as text. JSON with the same
//! shape is accepted as well.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LxError, Result};
use crate::slot::LxSlotMapping;

/// Ordered slot names to keep for the words of one speech part, keyed by word type id.
pub type LxWordTypeSlots = BTreeMap<String, Vec<String>>;

/// Ordered slot names to keep, keyed by speech-part tag and word type id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LxStudyConfig {
    slots: BTreeMap<String, LxWordTypeSlots>,
}

impl LxStudyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots<I, S>(
        mut self,
        speech_part: impl Into<String>,
        type_id: u64,
        slots: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots
            .entry(speech_part.into())
            .or_default()
            .insert(type_id.to_string(), slots.into_iter().map(Into::into).collect());
        self
    }

    /// Parses YAML or JSON, picking JSON when the text starts with `{`.
    pub fn parse(source: &str) -> Result<Self> {
        if source.trim_start().starts_with('{') {
            Self::from_json_str(source)
        } else {
            Self::from_yaml_str(source)
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_yaml::from_str(source)
            .map_err(|e| LxError::config(format!("invalid YAML study configuration: {e}")))
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source)
            .map_err(|e| LxError::config(format!("invalid JSON study configuration: {e}")))
    }

    /// Loads a configuration file, choosing the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let config = match extension.as_str() {
            "json" => Self::from_json_str(&content)?,
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            _ => Self::parse(&content)?,
        };
        log::info!(
            "Loaded study configuration for {} speech parts from {}",
            config.slots.len(),
            path.display()
        );
        Ok(config)
    }

    /// Configured speech-part tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Configured word type ids of `speech_part`, as written in the configuration.
    pub fn word_types(&self, speech_part: &str) -> impl Iterator<Item = &str> {
        self.slots
            .get(speech_part)
            .into_iter()
            .flat_map(|types| types.keys().map(String::as_str))
    }

    /// Slot names to keep for words of `type_id` under `speech_part`.
    pub fn slots_for(&self, speech_part: &str, type_id: u64) -> Result<&[String]> {
        self.slots
            .get(speech_part)
            .and_then(|types| types.get(&type_id.to_string()))
            .map(Vec::as_slice)
            .ok_or_else(|| {
                LxError::config(format!(
                    "no slots to study configured for word type {type_id} in '{speech_part}'"
                ))
            })
    }

    /// Configured slots present in `mapping`, in configured order.
    pub fn select(
        &self,
        speech_part: &str,
        type_id: u64,
        mapping: &LxSlotMapping,
    ) -> Result<Vec<(String, String)>> {
        let selected: Vec<(String, String)> = self
            .slots_for(speech_part, type_id)?
            .iter()
            .filter_map(|slot| mapping.get(slot).map(|form| (slot.clone(), form.clone())))
            .collect();

        log::debug!(
            "Derivative forms to study for word type {} of '{}': {:?}",
            type_id,
            speech_part,
            selected
        );
        Ok(selected)
    }
}
