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

use lexi::affix::{generate, parse_rule_string};
use lexi::errors::LxError;

fn present(forms: &lexi::LxDerivativeFormSet) -> Vec<&str> {
    forms.present().collect()
}

#[test]
fn regular_feminine_noun() {
    let forms = generate("маса", "а, [^аъиеоуяю]а\nа\nата\nи\nите\n-\n").unwrap();
    assert_eq!(forms.root, "маса");
    assert_eq!(present(&forms), vec!["маса", "масата", "маси", "масите"]);
}

#[test]
fn masculine_noun_with_appended_endings() {
    let forms = generate("гол", "0, [^аъиеоуяю]\n0\nа\nът\nове\nовете\nа\n-\n").unwrap();
    assert_eq!(
        present(&forms),
        vec!["гол", "гола", "голът", "голове", "головете", "гола"]
    );
    assert_eq!(forms.len(), 6);
}

#[test]
fn pattern_substitution_drops_the_fleeting_vowel() {
    let forms = generate("певец", "е[ц]\nе?\nе?а\nе?ът\n?и\n?ите\nе?а\nо\n").unwrap();
    assert_eq!(forms.len(), 7);
    assert_eq!(forms.get(0), Some("певец"));
    assert_eq!(forms.get(2), Some("певецът"));
    assert_eq!(forms.get(3), Some("певци"));
    assert_eq!(forms.get(4), Some("певците"));
}

#[test]
fn pattern_substitution_keeps_longer_stems() {
    let forms = generate("продавец", "е[ц]\nе?\n?и\n").unwrap();
    assert_eq!(present(&forms), vec!["продавец", "продавци"]);
}

#[test]
fn absent_entries_stay_aligned() {
    let forms = generate("маса", "а\nа\n\\-\nи\n").unwrap();
    assert_eq!(
        forms.forms,
        vec![Some("маса".to_string()), None, Some("маси".to_string())]
    );
    assert_eq!(forms.get(1), None);
    assert_eq!(forms.get(2), Some("маси"));
}

#[test]
fn unmet_precondition_carries_root_and_condition() {
    let err = generate("вода", "0, [^аъиеоуяю]\n0\nа\n").unwrap_err();
    match err {
        LxError::Validation {
            root, condition, ..
        } => {
            assert_eq!(root, "вода");
            assert_eq!(condition, "[^аъиеоуяю]");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_suffix_carries_root_and_suffix() {
    let err = generate("стол", "а\nи\n").unwrap_err();
    assert_eq!(
        err,
        LxError::validation("стол", "а", "root does not end with the suffix to strip")
    );
}

#[test]
fn pattern_that_does_not_match_tail_fails() {
    let err = generate("маса", "е[ц]\n?и\n").unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn precondition_may_sit_after_longer_stem() {
    let rules = parse_rule_string("я, [^аъиеоуяю]я\nя\nи\n").unwrap();
    let forms = rules.generate("земя").unwrap();
    assert_eq!(present(&forms), vec!["земя", "земи"]);
}

#[test]
fn rule_set_is_reusable_across_roots() {
    let rules = parse_rule_string("а, [^аъиеоуяю]а\nа\nата\nи\nите\n").unwrap();
    let first = rules.generate("маса").unwrap();
    let second = rules.generate("книга").unwrap();
    assert_eq!(first.get(3), Some("масите"));
    assert_eq!(second.get(1), Some("книгата"));
}
