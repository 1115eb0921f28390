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

use regex::{Captures, Regex};

use crate::affix::ir::{LxDerivativeFormSet, LxReplacement, LxRuleSet, LxStripRule};
use crate::affix::BACK_REFERENCE;
use crate::errors::{LxError, Result};

impl LxRuleSet {
    /// Generates the derivative forms of `root`, one per replacement, in order.
    ///
    /// The precondition is checked first, then the declared suffix or pattern.
    /// Both are "ends with" checks, so any stem length before them is accepted.
    pub fn generate(&self, root: &str) -> Result<LxDerivativeFormSet> {
        if let Some(precondition) = &self.precondition {
            if !precondition.is_satisfied_by(root) {
                return Err(LxError::validation(
                    root,
                    precondition.source(),
                    "root does not end with the required precondition",
                ));
            }
        }

        let replacements = &self.replacements;
        let forms = match &self.strip {
            LxStripRule::Concatenation { suffix } => concatenate(root, suffix, replacements)?,
            LxStripRule::Pattern { source, regex, .. } => {
                substitute(root, source, regex, replacements)?
            }
        };

        log::debug!("Derivative forms of '{}': {:?}", root, forms);
        Ok(LxDerivativeFormSet::new(root, forms))
    }
}

/// Strips the literal `suffix` from `root` and appends each replacement.
pub fn concatenate(
    root: &str,
    suffix: &str,
    replacements: &[LxReplacement],
) -> Result<Vec<Option<String>>> {
    let stem = root.strip_suffix(suffix).ok_or_else(|| {
        LxError::validation(root, suffix, "root does not end with the suffix to strip")
    })?;

    Ok(replacements
        .iter()
        .map(|replacement| match replacement {
            LxReplacement::Literal(text) => Some(format!("{stem}{text}")),
            LxReplacement::Empty => Some(stem.to_string()),
            LxReplacement::Absent => None,
        })
        .collect())
}

/// Replaces the tail of `root` matched by `regex` with each replacement,
/// resolving `?` markers to the captured characters.
pub fn substitute(
    root: &str,
    source: &str,
    regex: &Regex,
    replacements: &[LxReplacement],
) -> Result<Vec<Option<String>>> {
    let captures = regex.captures(root).ok_or_else(|| {
        LxError::validation(root, source, "root does not end with the pattern to replace")
    })?;
    let matched = captures
        .get(0)
        .ok_or_else(|| LxError::internal("pattern matched without a whole-match group"))?;

    let head = &root[..matched.start()];
    let tail = &root[matched.end()..];

    Ok(replacements
        .iter()
        .map(|replacement| match replacement {
            LxReplacement::Literal(text) => Some(format!(
                "{head}{}{tail}",
                resolve_back_references(text, &captures)
            )),
            LxReplacement::Empty => Some(format!("{head}{tail}")),
            LxReplacement::Absent => None,
        })
        .collect())
}

fn resolve_back_references(template: &str, captures: &Captures<'_>) -> String {
    let mut resolved = String::with_capacity(template.len());
    let mut group = 1;
    for c in template.chars() {
        if c == BACK_REFERENCE {
            if let Some(capture) = captures.get(group) {
                resolved.push_str(capture.as_str());
            }
            group += 1;
        } else {
            resolved.push(c);
        }
    }
    resolved
}
