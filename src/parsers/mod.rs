//! Source analysis for CommonJS and JSON modules
//!
//! The OXC-backed scanner finds what a module assigns onto its exports object
//! and which modules it re-exports; the JSON extractor and the identifier
//! rules cover the remaining inputs to export discovery.

pub mod ast_parser;
pub mod cjs_lexer;
pub mod identifier;
pub mod json_keys;

pub use ast_parser::{ExportScanner, OxcScanner};
pub use cjs_lexer::CjsLexer;
pub use identifier::{is_identifier, is_reserved_word, is_valid_export_name};
pub use json_keys::{is_json_path, JsonKeyExtractor};
