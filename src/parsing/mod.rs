//! Parsing of the local identifier document

pub mod identifier_parser;

pub use identifier_parser::{parse_identifier_bytes, parse_identifiers, read_identifiers};
