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

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::slot::{LxSlot, LxSlotMapping};

/// A derivative form stored with its Bulgarian grammatical description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LxTaggedForm {
    #[serde(rename = "name")]
    pub form: String,
    pub description: String,
}

impl LxTaggedForm {
    pub fn new(form: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            description: description.into(),
        }
    }
}

/// Noun and adjective descriptions in definition order. `мн.ч.` is defined
/// twice; the later definition wins.
pub const DESCRIPTION_SLOT_DEFINITIONS: &[(&str, LxSlot)] = &[
    ("ед.ч.", LxSlot::SingularIndefinite),
    ("ед.ч. пълен член", LxSlot::SingularDefinite),
    ("ед.ч. членувано", LxSlot::SingularDefinite),
    ("мн.ч.", LxSlot::PluralIndefinite),
    ("мн.ч. членувано", LxSlot::PluralDefinite),
    ("бройна форма", LxSlot::Contable),
    ("м.р.", LxSlot::MasculineForm),
    ("ж.р.", LxSlot::FemenineForm),
    ("ср.р.", LxSlot::NeutralForm),
    ("мн.ч.", LxSlot::PluralForm),
];

/// Participles (verbal adjectives) whose forms might be irregular.
pub const IRREGULAR_PARTICIPLES: &[&str] = &[
    "мин.деят.св.прич. м.р.",
    "мин.деят.св.прич. ж.р.",
    "мин.деят.св.прич. ср.р.",
    "мин.деят.св.прич. мн.ч.",
    "мин.деят.св.прич. м.р. пълен член",
    "мин.деят.несв.прич. м.р.",
    "мин.деят.несв.прич. мн.ч.",
    "мин.страд.прич. ср.р.",
    "сег.деят.прич. м.р.",
    "деепричастие",
];

/// Conjugated verb forms that might be irregular.
pub const IRREGULAR_VERB_FORMS: &[&str] = &[
    // present tense; some я mutate to е or а (ям)
    "сег.вр., 1л., ед.ч.",
    "сег.вр., 2л., ед.ч.",
    "сег.вр., 3л., мн.ч.",
    // aorist
    "мин.св.вр., 1л., ед.ч.",
    "мин.св.вр., 2л., ед.ч.",
    // imperfect
    "мин.несв.вр., 1л., ед.ч.",
    "мин.несв.вр., 2л., ед.ч.",
    // imperative
    "повелително наклонение, ед.ч.",
    "повелително наклонение, мн.ч.",
];

static DESCRIPTION_SLOTS: OnceLock<HashMap<&'static str, LxSlot>> = OnceLock::new();

/// Resolved description table, built once from [`DESCRIPTION_SLOT_DEFINITIONS`].
pub fn description_slots() -> &'static HashMap<&'static str, LxSlot> {
    DESCRIPTION_SLOTS.get_or_init(|| DESCRIPTION_SLOT_DEFINITIONS.iter().copied().collect())
}

pub fn slot_for_description(description: &str) -> Option<LxSlot> {
    description_slots().get(description).copied()
}

pub fn is_participle(description: &str) -> bool {
    IRREGULAR_PARTICIPLES.contains(&description)
}

/// True for verb descriptions worth keeping verbatim.
pub fn might_be_irregular(description: &str) -> bool {
    IRREGULAR_VERB_FORMS.contains(&description) || is_participle(description)
}

/// Relabels noun and adjective forms by their description. When two forms
/// land on the same slot, the later one is kept.
pub fn classify_descriptions(pairs: &[LxTaggedForm]) -> LxSlotMapping {
    let mapping: LxSlotMapping = pairs
        .iter()
        .filter_map(|pair| {
            slot_for_description(&pair.description)
                .map(|slot| (slot.as_str().to_string(), pair.form.clone()))
        })
        .collect();

    log::debug!("Derivative forms of the word {:?}", mapping);
    mapping
}

/// Keeps possibly irregular verb forms under their Bulgarian description.
pub fn classify_verb_descriptions(pairs: &[LxTaggedForm]) -> LxSlotMapping {
    let mapping: LxSlotMapping = pairs
        .iter()
        .filter(|pair| might_be_irregular(&pair.description))
        .map(|pair| (pair.description.clone(), pair.form.clone()))
        .collect();

    log::debug!("Derivative forms of the verb {:?}", mapping);
    mapping
}

/// Narrows a verb mapping to its participles.
pub fn filter_participles(mapping: &LxSlotMapping) -> LxSlotMapping {
    mapping
        .iter()
        .filter(|(description, _)| is_participle(description))
        .map(|(description, form)| (description.clone(), form.clone()))
        .collect()
}
