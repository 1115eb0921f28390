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

//! # Lexi Core Library
//!
//! Lexi generates the inflected ("derivative") forms of Bulgarian words from
//! the affix rules of the bgoffice grammatical dictionary and labels them with
//! the grammatical slots a vocabulary flashcard needs.
//!
//! ## Module Overview
//!
//! - **affix**: Affix rule parser and derivative form generator
//! - **slot**: Slot vocabulary and the slot mapping type
//! - **classify**: Positional and description-based slot classifiers
//! - **lexicon**: Read-only dictionary lookups and an in-memory implementation
//! - **deriver**: Per-word workflow combining lookups and the engine
//! - **study**: Configuration of which slots to put on a flashcard
//!
//! ## Feature Flags
//!
//! - `parallel`: Batch derivation with Rayon (enabled by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use lexi::{classify, generate, LxFormSource, LxPartOfSpeech};
//!
//! let forms = generate("гол", "0, [^аъиеоуяю]\n0\nа\nът\nове\nовете\nа\n-\n")?;
//! let slots = classify(LxFormSource::Generated(&forms, LxPartOfSpeech::MasculineNoun));
//! assert_eq!(slots["plural_indefinite"], "голове");
//! ```
//!
//! ## Architecture
//!
//! 1. **Rule Parser**: rule string → [`LxRuleSet`]
//! 2. **Form Generator**: root + rule set → [`LxDerivativeFormSet`]
//! 3. **Slot Classifier**: forms + part of speech → [`LxSlotMapping`]
//!
//! A parallel path relabels forms already stored with their Bulgarian
//! description, bypassing the first two steps.
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, LxError>`. Generation only fails
//! with [`LxError::Validation`] once a rule string has parsed.

pub mod errors;
pub mod affix;
pub mod slot;
pub mod classify;
pub mod lexicon;
pub mod deriver;
pub mod study;

pub use errors::{LxError, Result};
pub use affix::{
    generate, parse_rule_string, LxDerivativeFormSet, LxPrecondition, LxReplacement, LxRuleSet,
    LxStripRule,
};
pub use slot::{LxSlot, LxSlotMapping};
pub use classify::{classify, LxFormSource, LxPartOfSpeech, LxTaggedForm};
pub use lexicon::{LxDerivativeFormLookup, LxMemoryLexicon, LxWordEntry, LxWordLookup};
pub use deriver::{LxDerivation, LxDeriver};
pub use study::{LxStudyConfig, LxWordTypeSlots};
