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

//! # Lexi Slot Module
//!
//! Semantic grammatical slots a derivative form can be classified into, and
//! the mapping type returned by every classifier.
//!
//! Slot names are the field names used by the flashcard records, so the
//! serialized spelling (including `contable` and `femenineForm`) is fixed.
//! Verb forms are not part of this vocabulary: they are kept under their
//! Bulgarian description, which is why [`LxSlotMapping`] is keyed by string.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LxError;

/// Slot name to derivative form.
pub type LxSlotMapping = BTreeMap<String, String>;

/// Closed vocabulary of noun and adjective slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LxSlot {
    #[serde(rename = "singular_indefinite")]
    SingularIndefinite,
    #[serde(rename = "singular_definite")]
    SingularDefinite,
    #[serde(rename = "plural_indefinite")]
    PluralIndefinite,
    #[serde(rename = "plural_definite")]
    PluralDefinite,
    /// Count form used after numerals.
    #[serde(rename = "contable")]
    Contable,
    #[serde(rename = "masculineForm")]
    MasculineForm,
    #[serde(rename = "femenineForm")]
    FemenineForm,
    #[serde(rename = "neutralForm")]
    NeutralForm,
    #[serde(rename = "pluralForm")]
    PluralForm,
}

impl LxSlot {
    pub const ALL: [LxSlot; 9] = [
        LxSlot::SingularIndefinite,
        LxSlot::SingularDefinite,
        LxSlot::PluralIndefinite,
        LxSlot::PluralDefinite,
        LxSlot::Contable,
        LxSlot::MasculineForm,
        LxSlot::FemenineForm,
        LxSlot::NeutralForm,
        LxSlot::PluralForm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LxSlot::SingularIndefinite => "singular_indefinite",
            LxSlot::SingularDefinite => "singular_definite",
            LxSlot::PluralIndefinite => "plural_indefinite",
            LxSlot::PluralDefinite => "plural_definite",
            LxSlot::Contable => "contable",
            LxSlot::MasculineForm => "masculineForm",
            LxSlot::FemenineForm => "femenineForm",
            LxSlot::NeutralForm => "neutralForm",
            LxSlot::PluralForm => "pluralForm",
        }
    }
}

impl fmt::Display for LxSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LxSlot {
    type Err = LxError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        LxSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == name)
            .ok_or_else(|| LxError::config(format!("unknown slot name '{name}'")))
    }
}
