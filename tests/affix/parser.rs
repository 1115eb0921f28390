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

use lexi::affix::{parse_rule_string, tokenize, LxReplacement, LxRuleSet, LxStripRule};
use lexi::errors::LxError;

#[test]
fn declaration_without_separator_has_no_precondition() {
    let rules = parse_rule_string("е[ц]\nе?\nе?а\n").unwrap();
    assert!(rules.precondition.is_none());
    assert_eq!(rules.suffix_to_strip(), "е[ц]");
    assert!(rules.strip.is_pattern());
}

#[test]
fn declaration_with_separator_keeps_precondition_text() {
    let rules = parse_rule_string("а, [^аъиеоуяю]а\nа\nата\nи\nите\n-\n").unwrap();
    let precondition = rules.precondition.as_ref().unwrap();
    assert_eq!(precondition.source(), "[^аъиеоуяю]а");
    assert!(precondition.is_satisfied_by("маса"));
    assert!(!precondition.is_satisfied_by("мая"));
    assert_eq!(
        rules.strip,
        LxStripRule::Concatenation {
            suffix: "а".into()
        }
    );
}

#[test]
fn zero_suffix_strips_nothing() {
    let rules = parse_rule_string("0, [^аъиеоуяю]\n0\nа\n").unwrap();
    assert_eq!(rules.suffix_to_strip(), "");
    assert!(!rules.strip.is_pattern());
}

#[test]
fn declaration_line_never_becomes_a_replacement() {
    let rules = parse_rule_string("а\nи\n").unwrap();
    assert_eq!(rules.replacements, vec![LxReplacement::Literal("и".into())]);
}

#[test]
fn skip_entries_are_dropped_not_kept_as_absent() {
    let rules = parse_rule_string("0\n0\n-\nа\n-\n\\-\n").unwrap();
    assert_eq!(
        rules.replacements,
        vec![
            LxReplacement::Empty,
            LxReplacement::Literal("а".into()),
            LxReplacement::Absent,
        ]
    );
}

#[test]
fn replacements_keep_original_order() {
    let tokens = tokenize("0\nове\nовете\nа\n").unwrap();
    assert_eq!(tokens.entries, vec!["ове", "овете", "а"]);
}

#[test]
fn rule_without_replacements_is_rejected() {
    let err = parse_rule_string("а, [^аъиеоуяю]а\n-\n\n").unwrap_err();
    assert!(matches!(err, LxError::Rule { .. }));
}

#[test]
fn empty_rule_string_is_rejected() {
    assert!(matches!(parse_rule_string(""), Err(LxError::Rule { .. })));
}

#[test]
fn unterminated_class_is_rejected() {
    let err = parse_rule_string("е[ц\nе?\n").unwrap_err();
    match err {
        LxError::Rule { message } => assert!(message.contains("unterminated")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn back_reference_without_capture_is_rejected() {
    let err = parse_rule_string("е[ц]\n??и\n").unwrap_err();
    assert!(matches!(err, LxError::Rule { .. }));
}

#[test]
fn invalid_precondition_is_a_rule_error() {
    let err = parse_rule_string("а, [а\nи\n").unwrap_err();
    assert!(matches!(err, LxError::Rule { .. }));
}

#[test]
fn question_mark_is_literal_in_concatenation_rules() {
    let rules = parse_rule_string("а\n?и\n").unwrap();
    assert_eq!(rules.replacements, vec![LxReplacement::Literal("?и".into())]);
}

#[test]
fn from_str_matches_parse_rule_string() {
    let source = "0, [^аъиеоуяю]\n0\nа\nът\nове\nовете\nа\n-\n";
    let parsed: LxRuleSet = source.parse().unwrap();
    assert_eq!(parsed, parse_rule_string(source).unwrap());
    assert_eq!(parsed.len(), 6);
}
