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

use std::io::Write;

use tempfile::{Builder, NamedTempFile};

use lexi::errors::LxError;
use lexi::{LxSlotMapping, LxStudyConfig};

const YAML: &str = "\
noun_female:
  '75':
    - singular_definite
    - plural_indefinite
noun_male:
  '1':
    - plural_indefinite
    - contable
  '28':
    - singular_definite
    - plural_definite
";

fn write_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn masculine_slots() -> LxSlotMapping {
    let mut mapping = LxSlotMapping::new();
    mapping.insert("singular_indefinite".into(), "гол".into());
    mapping.insert("singular_definite".into(), "голът".into());
    mapping.insert("plural_indefinite".into(), "голове".into());
    mapping.insert("contable".into(), "гола".into());
    mapping
}

#[test]
fn loads_yaml_file_by_extension() {
    let file = write_config(".yaml", YAML);
    let config = LxStudyConfig::from_path(file.path()).unwrap();

    assert_eq!(config.tags().collect::<Vec<_>>(), vec!["noun_female", "noun_male"]);
    assert_eq!(config.word_types("noun_male").collect::<Vec<_>>(), vec!["1", "28"]);
    assert_eq!(
        config.slots_for("noun_female", 75).unwrap(),
        ["singular_definite", "plural_indefinite"]
    );
}

#[test]
fn loads_json_file_by_extension() {
    let file = write_config(
        ".json",
        r#"{"noun_male": {"241": ["contable", "plural_indefinite"]}}"#,
    );
    let config = LxStudyConfig::from_path(file.path()).unwrap();
    let expected =
        LxStudyConfig::new().with_slots("noun_male", 241, ["contable", "plural_indefinite"]);
    assert_eq!(config, expected);
}

#[test]
fn quoted_word_type_keys_parse_from_yaml() {
    let config =
        LxStudyConfig::from_yaml_str("noun_male:\n  '241': [contable, plural_indefinite]\n")
            .unwrap();
    assert_eq!(
        config.slots_for("noun_male", 241).unwrap(),
        ["contable", "plural_indefinite"]
    );
}

#[test]
fn unknown_extension_falls_back_to_content_sniffing() {
    let file = write_config(".cfg", YAML);
    let config = LxStudyConfig::from_path(file.path()).unwrap();
    assert_eq!(config, LxStudyConfig::from_yaml_str(YAML).unwrap());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = LxStudyConfig::from_path("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, LxError::Io(_)));
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let file = write_config(".yml", "noun_male: [plural_indefinite\n");
    let err = LxStudyConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, LxError::Config { .. }));
}

#[test]
fn flat_slot_list_without_word_types_is_a_config_error() {
    let err = LxStudyConfig::from_yaml_str("noun_male:\n  - contable\n").unwrap_err();
    assert!(matches!(err, LxError::Config { .. }));
}

#[test]
fn missing_speech_part_names_both_keys() {
    let config = LxStudyConfig::from_yaml_str(YAML).unwrap();
    let err = config.select("verb_tr", 186, &masculine_slots()).unwrap_err();
    assert_eq!(
        err,
        LxError::config("no slots to study configured for word type 186 in 'verb_tr'")
    );
}

#[test]
fn missing_word_type_names_both_keys() {
    let config = LxStudyConfig::from_yaml_str(YAML).unwrap();
    let err = config.slots_for("noun_male", 75).unwrap_err();
    match err {
        LxError::Config { message } => {
            assert!(message.contains("75"));
            assert!(message.contains("noun_male"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn word_types_of_one_speech_part_select_different_slots() {
    let config = LxStudyConfig::from_yaml_str(YAML).unwrap();
    let mapping = masculine_slots();

    let regular = config.select("noun_male", 1, &mapping).unwrap();
    let irregular = config.select("noun_male", 28, &mapping).unwrap();

    assert_eq!(
        regular,
        vec![
            ("plural_indefinite".to_string(), "голове".to_string()),
            ("contable".to_string(), "гола".to_string()),
        ]
    );
    assert_eq!(
        irregular,
        vec![("singular_definite".to_string(), "голът".to_string())]
    );
}

#[test]
fn select_keeps_configured_order_and_skips_missing_slots() {
    let config = LxStudyConfig::new().with_slots(
        "noun_male",
        1,
        ["contable", "plural_definite", "plural_indefinite"],
    );
    let selected = config.select("noun_male", 1, &masculine_slots()).unwrap();

    assert_eq!(
        selected,
        vec![
            ("contable".to_string(), "гола".to_string()),
            ("plural_indefinite".to_string(), "голове".to_string()),
        ]
    );
}
