//! Error types for the scanner's surroundings.
//!
//! The lexical level itself has no error state: unclassifiable text is
//! tagged `Unknown` and malformed literals are accepted as-is. The only
//! fatal condition in the whole system is failing to obtain the program
//! text, defined here.

pub mod errors;
