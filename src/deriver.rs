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

//! # Deriver Module
//!
//! Glue between the dictionary lookups and the engine. A [`LxDeriver`] owns a
//! lexicon and answers per-word requests:
//!
//! - [`LxDeriver::derive`]: parse the word's affix rule, generate its forms,
//!   label them with the positional table of its speech part
//! - [`LxDeriver::tagged_slots`]: relabel stored noun/adjective forms
//! - [`LxDeriver::irregular_verb_forms`] and
//!   [`LxDeriver::irregular_participles`]: keep stored verb forms that might
//!   be irregular
//!
//! Every request is independent, so [`LxDeriver::derive_many`] fans out over
//! Rayon when the `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::affix::LxDerivativeFormSet;
use crate::classify::{
    classify, classify_descriptions, classify_verb_descriptions, filter_participles,
    LxFormSource, LxPartOfSpeech,
};
use crate::errors::{LxError, Result};
use crate::lexicon::{LxDerivativeFormLookup, LxWordEntry, LxWordLookup};
use crate::slot::LxSlotMapping;

/// Result of deriving one word from its affix rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LxDerivation {
    pub entry: LxWordEntry,
    pub part_of_speech: LxPartOfSpeech,
    pub forms: LxDerivativeFormSet,
    pub slots: LxSlotMapping,
}

/// Per-word derivation over a dictionary.
#[derive(Clone, Debug)]
pub struct LxDeriver<L> {
    lexicon: L,
}

impl<L> LxDeriver<L>
where
    L: LxWordLookup + LxDerivativeFormLookup,
{
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    fn entry(&self, word_id: u64) -> Result<LxWordEntry> {
        self.lexicon
            .word(word_id)?
            .ok_or_else(|| LxError::lookup(format!("the word {word_id} is unknown")))
    }

    /// Generates and labels the forms of `word_id` from its affix rule.
    pub fn derive(&self, word_id: u64) -> Result<LxDerivation> {
        let entry = self.entry(word_id)?;
        let part_of_speech = entry.part_of_speech()?;
        let forms = entry.rule_set()?.generate(&entry.root)?;
        let slots = classify(LxFormSource::Generated(&forms, part_of_speech));

        Ok(LxDerivation {
            entry,
            part_of_speech,
            forms,
            slots,
        })
    }

    /// Labels the stored noun or adjective forms of `word_id`.
    pub fn tagged_slots(&self, word_id: u64) -> Result<LxSlotMapping> {
        let pairs = self.lexicon.derivative_forms(word_id)?;
        Ok(classify_descriptions(&pairs))
    }

    /// Stored verb forms of `word_id` that might be irregular.
    pub fn irregular_verb_forms(&self, word_id: u64) -> Result<LxSlotMapping> {
        let pairs = self.lexicon.derivative_forms(word_id)?;
        Ok(classify_verb_descriptions(&pairs))
    }

    /// Stored participles of `word_id` that might be irregular.
    pub fn irregular_participles(&self, word_id: u64) -> Result<LxSlotMapping> {
        Ok(filter_participles(&self.irregular_verb_forms(word_id)?))
    }
}

#[cfg(not(feature = "parallel"))]
impl<L> LxDeriver<L>
where
    L: LxWordLookup + LxDerivativeFormLookup,
{
    /// Derives every id, one result per id in input order.
    pub fn derive_many(&self, word_ids: &[u64]) -> Vec<Result<LxDerivation>> {
        word_ids
            .iter()
            .map(|word_id| self.derive_logged(*word_id))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<L> LxDeriver<L>
where
    L: LxWordLookup + LxDerivativeFormLookup + Sync,
{
    /// Derives every id, one result per id in input order.
    pub fn derive_many(&self, word_ids: &[u64]) -> Vec<Result<LxDerivation>> {
        word_ids
            .par_iter()
            .map(|word_id| self.derive_logged(*word_id))
            .collect()
    }
}

impl<L> LxDeriver<L>
where
    L: LxWordLookup + LxDerivativeFormLookup,
{
    fn derive_logged(&self, word_id: u64) -> Result<LxDerivation> {
        let result = self.derive(word_id);
        if let Err(e) = &result {
            log::warn!("Skipping word {}: {}", word_id, e);
        }
        result
    }
}
