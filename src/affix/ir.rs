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

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One replacement entry of an affix rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LxReplacement {
    /// Text appended to the stem. In the pattern dialect `?` marks a back-reference.
    Literal(String),
    /// `0` in the rule string: the stem itself is the form.
    Empty,
    /// `\-` in the rule string: the slot has no form.
    Absent,
}

impl LxReplacement {
    /// Number of `?` back-reference markers in the entry.
    pub fn back_references(&self) -> usize {
        match self {
            LxReplacement::Literal(text) => text.matches(super::BACK_REFERENCE).count(),
            LxReplacement::Empty | LxReplacement::Absent => 0,
        }
    }
}

/// Tail pattern a root must end with before any rule applies.
#[derive(Clone, Debug)]
pub struct LxPrecondition {
    pub(crate) source: String,
    pub(crate) regex: Regex,
}

impl LxPrecondition {
    /// The precondition as written in the rule string.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_satisfied_by(&self, root: &str) -> bool {
        self.regex.is_match(root)
    }
}

impl PartialEq for LxPrecondition {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for LxPrecondition {}

/// How the declared suffix is removed from the root.
///
/// The variant is fixed when the rule string is parsed: a declaration with a
/// bracketed character class selects [`LxStripRule::Pattern`], anything else
/// [`LxStripRule::Concatenation`].
#[derive(Clone, Debug)]
pub enum LxStripRule {
    /// Strip a literal suffix and append each replacement.
    Concatenation { suffix: String },
    /// Replace the matched tail, resolving back-references to captured characters.
    Pattern {
        source: String,
        regex: Regex,
        captures: usize,
    },
}

impl LxStripRule {
    /// The declared suffix (or pattern) text, empty when nothing is stripped.
    pub fn source(&self) -> &str {
        match self {
            LxStripRule::Concatenation { suffix } => suffix,
            LxStripRule::Pattern { source, .. } => source,
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, LxStripRule::Pattern { .. })
    }
}

impl PartialEq for LxStripRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                LxStripRule::Concatenation { suffix: left },
                LxStripRule::Concatenation { suffix: right },
            ) => left == right,
            (
                LxStripRule::Pattern { source: left, .. },
                LxStripRule::Pattern { source: right, .. },
            ) => left == right,
            _ => false,
        }
    }
}

impl Eq for LxStripRule {}

/// Parsed form of one affix rule string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LxRuleSet {
    pub precondition: Option<LxPrecondition>,
    pub strip: LxStripRule,
    /// Never empty.
    pub replacements: Vec<LxReplacement>,
}

impl LxRuleSet {
    pub fn suffix_to_strip(&self) -> &str {
        self.strip.source()
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Ordered derivative forms of one root, aligned with the rule set's replacements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LxDerivativeFormSet {
    pub root: String,
    pub forms: Vec<Option<String>>,
}

impl LxDerivativeFormSet {
    pub fn new(root: impl Into<String>, forms: Vec<Option<String>>) -> Self {
        Self {
            root: root.into(),
            forms,
        }
    }

    /// Form at `position`, `None` when out of range or absent.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.forms.get(position).and_then(|form| form.as_deref())
    }

    /// Realized forms in order, skipping absent slots.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().filter_map(|form| form.as_deref())
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
