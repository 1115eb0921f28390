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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::affix::LxDerivativeFormSet;
use crate::errors::LxError;
use crate::slot::{LxSlot, LxSlotMapping};

/// Feminine and neuter nouns: singular/plural × indefinite/definite.
pub const NOUN_SLOT_TABLE: &[(LxSlot, usize)] = &[
    (LxSlot::SingularIndefinite, 0),
    (LxSlot::SingularDefinite, 1),
    (LxSlot::PluralIndefinite, 2),
    (LxSlot::PluralDefinite, 3),
];

/// Masculine nouns carry a short and a full definite article (positions 1
/// and 2; the full one is kept), which moves the plurals one position on,
/// followed by the count form.
pub const MASCULINE_NOUN_SLOT_TABLE: &[(LxSlot, usize)] = &[
    (LxSlot::SingularIndefinite, 0),
    (LxSlot::SingularDefinite, 2),
    (LxSlot::PluralIndefinite, 3),
    (LxSlot::PluralDefinite, 4),
    (LxSlot::Contable, 5),
];

/// Parts of speech with a positional slot table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LxPartOfSpeech {
    Noun,
    MasculineNoun,
}

impl LxPartOfSpeech {
    pub const ALL: [LxPartOfSpeech; 2] = [LxPartOfSpeech::Noun, LxPartOfSpeech::MasculineNoun];

    /// Maps a dictionary speech-part tag such as `noun_male` to its table.
    pub fn from_tag(tag: &str) -> Result<Self, LxError> {
        match tag {
            "noun_male" => Ok(LxPartOfSpeech::MasculineNoun),
            "noun_female" | "noun_neutral" => Ok(LxPartOfSpeech::Noun),
            other => Err(LxError::UnsupportedSpeechPart(other.to_string())),
        }
    }

    pub fn slot_table(&self) -> &'static [(LxSlot, usize)] {
        match self {
            LxPartOfSpeech::Noun => NOUN_SLOT_TABLE,
            LxPartOfSpeech::MasculineNoun => MASCULINE_NOUN_SLOT_TABLE,
        }
    }

    /// Position of `slot` in this part of speech's table.
    pub fn position_of(&self, slot: LxSlot) -> Option<usize> {
        self.slot_table()
            .iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, position)| *position)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LxPartOfSpeech::Noun => "noun",
            LxPartOfSpeech::MasculineNoun => "masculine_noun",
        }
    }
}

impl fmt::Display for LxPartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LxPartOfSpeech {
    type Err = LxError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        LxPartOfSpeech::from_tag(tag)
    }
}

/// Labels generated forms using the positional table of `part_of_speech`.
///
/// Positions beyond the generated forms, or holding an absent form, are left
/// out of the mapping.
pub fn classify_forms(
    forms: &LxDerivativeFormSet,
    part_of_speech: LxPartOfSpeech,
) -> LxSlotMapping {
    let mapping: LxSlotMapping = part_of_speech
        .slot_table()
        .iter()
        .filter_map(|(slot, position)| {
            forms
                .get(*position)
                .map(|form| (slot.as_str().to_string(), form.to_string()))
        })
        .collect();

    log::debug!(
        "Derivative forms of the {} '{}': {:?}",
        part_of_speech,
        forms.root,
        mapping
    );
    mapping
}
