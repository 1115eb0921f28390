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

use std::str::FromStr;

use regex::Regex;

use crate::affix::ir::{LxPrecondition, LxReplacement, LxRuleSet, LxStripRule};
use crate::affix::{ABSENT_TOKEN, DECLARATION_SEPARATOR, EMPTY_TOKEN, SKIP_TOKEN};
use crate::errors::{LxError, Result};

/// Raw lines of a rule string, before any token is interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LxRuleTokens<'a> {
    pub suffix: &'a str,
    pub precondition: Option<&'a str>,
    /// Replacement lines with blank and `-` entries already dropped.
    pub entries: Vec<&'a str>,
}

/// First stage: splits a rule string into its declaration and replacement lines.
pub fn tokenize(source: &str) -> Result<LxRuleTokens<'_>> {
    let mut lines = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let declaration = lines
        .next()
        .filter(|line| !line.is_empty())
        .ok_or_else(|| LxError::rule("rule string has no declaration line"))?;

    let (suffix, precondition) = match declaration.split_once(DECLARATION_SEPARATOR) {
        Some((suffix, precondition)) => (suffix, Some(precondition)),
        None => (declaration, None),
    };

    let entries = lines
        .filter(|line| !line.is_empty() && *line != SKIP_TOKEN)
        .collect();

    Ok(LxRuleTokens {
        suffix,
        precondition,
        entries,
    })
}

/// Second stage: interprets tokens into a rule set and fixes the strategy.
pub fn interpret(tokens: &LxRuleTokens<'_>) -> Result<LxRuleSet> {
    if tokens.entries.is_empty() {
        return Err(LxError::rule(format!(
            "rule '{}' declares no replacement entries",
            tokens.suffix
        )));
    }

    let precondition = tokens
        .precondition
        .map(compile_precondition)
        .transpose()?;
    let strip = compile_strip(tokens.suffix)?;
    let replacements: Vec<LxReplacement> = tokens
        .entries
        .iter()
        .map(|entry| interpret_entry(entry))
        .collect();

    if let LxStripRule::Pattern {
        source, captures, ..
    } = &strip
    {
        for (position, replacement) in replacements.iter().enumerate() {
            let references = replacement.back_references();
            if references > *captures {
                return Err(LxError::rule(format!(
                    "replacement {} uses {} back-references but pattern '{}' captures {}",
                    position, references, source, captures
                )));
            }
        }
    }

    Ok(LxRuleSet {
        precondition,
        strip,
        replacements,
    })
}

/// Parses a complete rule string.
pub fn parse_rule_string(source: &str) -> Result<LxRuleSet> {
    interpret(&tokenize(source)?)
}

impl FromStr for LxRuleSet {
    type Err = LxError;

    fn from_str(source: &str) -> Result<Self> {
        parse_rule_string(source)
    }
}

fn interpret_entry(entry: &str) -> LxReplacement {
    match entry {
        EMPTY_TOKEN => LxReplacement::Empty,
        ABSENT_TOKEN => LxReplacement::Absent,
        text => LxReplacement::Literal(text.to_string()),
    }
}

fn compile_precondition(source: &str) -> Result<LxPrecondition> {
    let regex = Regex::new(&format!("^.*(?:{source})$"))
        .map_err(|e| LxError::rule(format!("invalid precondition '{source}': {e}")))?;
    Ok(LxPrecondition {
        source: source.to_string(),
        regex,
    })
}

fn compile_strip(suffix: &str) -> Result<LxStripRule> {
    if suffix == EMPTY_TOKEN {
        return Ok(LxStripRule::Concatenation {
            suffix: String::new(),
        });
    }
    if !suffix.contains('[') {
        return Ok(LxStripRule::Concatenation {
            suffix: suffix.to_string(),
        });
    }

    let mut pattern = String::new();
    let mut captures = 0;
    let mut chars = suffix.chars();
    let mut buf = [0u8; 4];

    while let Some(c) = chars.next() {
        if c != '[' {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            continue;
        }

        let mut class = String::new();
        loop {
            match chars.next() {
                Some(']') => break,
                Some(inner) => class.push(inner),
                None => {
                    return Err(LxError::rule(format!(
                        "unterminated character class in '{suffix}'"
                    )))
                }
            }
        }
        if class.is_empty() {
            return Err(LxError::rule(format!("empty character class in '{suffix}'")));
        }

        // one captured character per class
        pattern.push_str("([");
        pattern.push_str(&class);
        pattern.push_str("])");
        captures += 1;
    }
    pattern.push('$');

    let regex = Regex::new(&pattern)
        .map_err(|e| LxError::rule(format!("invalid pattern '{suffix}': {e}")))?;

    Ok(LxStripRule::Pattern {
        source: suffix.to_string(),
        regex,
        captures,
    })
}
