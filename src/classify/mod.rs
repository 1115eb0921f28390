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

//! # Slot Classifier Module
//!
//! Maps derivative forms onto named grammatical slots.
//!
//! Two sources are supported:
//! - **Positional** ([positional.rs](positional/index.html)): forms generated
//!   from an affix rule are labelled by their index, using a fixed table per
//!   part of speech
//! - **Tagged** ([tagged.rs](tagged/index.html)): forms stored with a
//!   Bulgarian grammatical description are relabelled by name
//!
//! Missing optional slots are never an error; they are simply absent from the
//! resulting [`LxSlotMapping`].

pub mod positional;
pub mod tagged;

pub use positional::{classify_forms, LxPartOfSpeech, MASCULINE_NOUN_SLOT_TABLE, NOUN_SLOT_TABLE};
pub use tagged::{
    classify_descriptions, classify_verb_descriptions, filter_participles, LxTaggedForm,
    IRREGULAR_PARTICIPLES, IRREGULAR_VERB_FORMS,
};

use crate::affix::LxDerivativeFormSet;
use crate::slot::LxSlotMapping;

/// Input of [`classify`].
#[derive(Clone, Copy, Debug)]
pub enum LxFormSource<'a> {
    /// Rule-generated forms and the part of speech selecting the table.
    Generated(&'a LxDerivativeFormSet, LxPartOfSpeech),
    /// Stored noun or adjective forms with their descriptions.
    Tagged(&'a [LxTaggedForm]),
    /// Stored verb forms; only possibly irregular ones are kept.
    Verb(&'a [LxTaggedForm]),
    /// Stored verb forms narrowed to participles.
    Participles(&'a [LxTaggedForm]),
}

/// Builds the slot mapping for any supported source.
pub fn classify(source: LxFormSource<'_>) -> LxSlotMapping {
    match source {
        LxFormSource::Generated(forms, part_of_speech) => classify_forms(forms, part_of_speech),
        LxFormSource::Tagged(pairs) => classify_descriptions(pairs),
        LxFormSource::Verb(pairs) => classify_verb_descriptions(pairs),
        LxFormSource::Participles(pairs) => filter_participles(&classify_verb_descriptions(pairs)),
    }
}
