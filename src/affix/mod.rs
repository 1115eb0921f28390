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

//! # Affix Rule Module
//!
//! This module interprets the compact affix notation of the bgoffice/ispell
//! Bulgarian dictionaries. A rule string describes how to strip the ending of
//! a word root and which endings to attach to obtain every inflected form.
//!
//! ## Architecture
//!
//! - **Parser** ([parser.rs](parser/index.html)): Splits the rule string into
//!   a declaration and replacement tokens, then interprets them into a
//!   [`LxRuleSet`]
//! - **IR** ([ir.rs](ir/index.html)): The parsed rule set and the generated
//!   [`LxDerivativeFormSet`]
//! - **Generator** ([generator.rs](generator/index.html)): Applies a rule set
//!   to a root using the strategy chosen at parse time
//!
//! ## Rule String Format
//!
//! ```text
//! <suffix-or-0>[, <precondition>]
//! <replacement>
//! <replacement>
//! ...
//! ```
//!
//! Replacement tokens:
//! - `0`: the stem itself, nothing appended
//! - `\-`: the form does not exist
//! - `-`: no replacement at this position, dropped entirely
//! - `[ц]` (declaration only): captures exactly one character of the root
//! - `?`: back-reference to the next captured character, left to right
//!
//! ## Usage Example
//!
//! ```rust
//! let forms = lexi::affix::generate("маса", "а, [^аъиеоуяю]а\nа\nата\nи\nите\n-\n")?;
//! assert_eq!(forms.get(3), Some("масите"));
//! ```

pub mod generator;
pub mod ir;
pub mod parser;

pub use generator::{concatenate, substitute};
pub use ir::{LxDerivativeFormSet, LxPrecondition, LxReplacement, LxRuleSet, LxStripRule};
pub use parser::{interpret, parse_rule_string, tokenize, LxRuleTokens};

use crate::errors::Result;

/// Separates the suffix to strip from the precondition on the declaration line.
pub const DECLARATION_SEPARATOR: &str = ", ";
/// Declared suffix or replacement meaning "nothing".
pub const EMPTY_TOKEN: &str = "0";
/// Replacement meaning "this form does not exist".
pub const ABSENT_TOKEN: &str = "\\-";
/// Placeholder entry dropped while parsing.
pub const SKIP_TOKEN: &str = "-";
/// Back-reference marker in pattern replacements.
pub const BACK_REFERENCE: char = '?';

/// Parses `rule_string` and generates every derivative form of `root`.
pub fn generate(root: &str, rule_string: &str) -> Result<LxDerivativeFormSet> {
    parse_rule_string(rule_string)?.generate(root)
}
