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

//! # Lexicon Module
//!
//! Read-only lookups into the grammatical reference dictionary. The engine
//! only consumes two capabilities:
//!
//! - [`LxWordLookup`]: root, affix rule string and speech part of a word id
//! - [`LxDerivativeFormLookup`]: stored (form, description) pairs of a word id
//!
//! [`LxMemoryLexicon`] implements both in memory and loads JSONL dumps where
//! every line is one tagged object:
//!
//! ```text
//! {"kind": "word", "id": 17599, "name": "маса", "type_id": 75, "speech_part": "noun_female", "rules": "а, [^аъиеоуяю]а\nа\nата\nи\nите\n-\n"}
//! {"kind": "form", "base_word_id": 17599, "name": "маси", "description": "мн.ч."}
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::affix::{parse_rule_string, LxRuleSet};
use crate::classify::{LxPartOfSpeech, LxTaggedForm};
use crate::errors::{LxError, Result};

/// A classified word of the reference dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LxWordEntry {
    pub id: u64,
    #[serde(rename = "name")]
    pub root: String,
    /// Word type of the dictionary; shares the affix rule and speech part.
    pub type_id: u64,
    pub speech_part: String,
    pub rules: String,
}

impl LxWordEntry {
    pub fn part_of_speech(&self) -> Result<LxPartOfSpeech> {
        LxPartOfSpeech::from_tag(&self.speech_part)
    }

    pub fn rule_set(&self) -> Result<LxRuleSet> {
        parse_rule_string(&self.rules)
    }
}

/// Looks up the root, word type, rule string and speech part of a word.
pub trait LxWordLookup {
    fn word(&self, word_id: u64) -> Result<Option<LxWordEntry>>;
}

/// Looks up the stored derivative forms of a word, in storage order.
pub trait LxDerivativeFormLookup {
    fn derivative_forms(&self, word_id: u64) -> Result<Vec<LxTaggedForm>>;
}

impl<T: LxWordLookup + ?Sized> LxWordLookup for &T {
    fn word(&self, word_id: u64) -> Result<Option<LxWordEntry>> {
        (**self).word(word_id)
    }
}

impl<T: LxDerivativeFormLookup + ?Sized> LxDerivativeFormLookup for &T {
    fn derivative_forms(&self, word_id: u64) -> Result<Vec<LxTaggedForm>> {
        (**self).derivative_forms(word_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum LxLexiconLine {
    Word(LxWordEntry),
    Form {
        base_word_id: u64,
        name: String,
        description: String,
    },
}

/// In-memory dictionary implementing both lookups.
#[derive(Clone, Debug, Default)]
pub struct LxMemoryLexicon {
    words: HashMap<u64, LxWordEntry>,
    forms: HashMap<u64, Vec<LxTaggedForm>>,
}

impl LxMemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a word.
    pub fn insert_word(&mut self, entry: LxWordEntry) {
        self.words.insert(entry.id, entry);
    }

    /// Appends a stored derivative form of `base_word_id`.
    pub fn insert_form(&mut self, base_word_id: u64, form: LxTaggedForm) {
        self.forms.entry(base_word_id).or_default().push(form);
    }

    pub fn with_word(mut self, entry: LxWordEntry) -> Self {
        self.insert_word(entry);
        self
    }

    pub fn with_form(mut self, base_word_id: u64, form: LxTaggedForm) -> Self {
        self.insert_form(base_word_id, form);
        self
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn form_count(&self) -> usize {
        self.forms.values().map(Vec::len).sum()
    }

    /// Loads a JSONL dump from disk.
    pub fn load_jsonl(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::load_jsonl_reader(BufReader::new(file))
    }

    /// Loads a JSONL dump from any buffered reader. Blank lines are ignored.
    pub fn load_jsonl_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lexicon = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let content = line?;
            if content.trim().is_empty() {
                continue;
            }
            match parse_line(&content, idx + 1)? {
                LxLexiconLine::Word(entry) => lexicon.insert_word(entry),
                LxLexiconLine::Form {
                    base_word_id,
                    name,
                    description,
                } => lexicon.insert_form(base_word_id, LxTaggedForm::new(name, description)),
            }
        }
        log::debug!(
            "Loaded {} words and {} derivative forms",
            lexicon.word_count(),
            lexicon.form_count()
        );
        Ok(lexicon)
    }
}

fn parse_line(content: &str, line_no: usize) -> Result<LxLexiconLine> {
    serde_json::from_str(content)
        .map_err(|e| LxError::Serde(format!("invalid lexicon line {line_no}: {e}")))
}

impl LxWordLookup for LxMemoryLexicon {
    fn word(&self, word_id: u64) -> Result<Option<LxWordEntry>> {
        Ok(self.words.get(&word_id).cloned())
    }
}

impl LxDerivativeFormLookup for LxMemoryLexicon {
    fn derivative_forms(&self, word_id: u64) -> Result<Vec<LxTaggedForm>> {
        Ok(self.forms.get(&word_id).cloned().unwrap_or_default())
    }
}
