//! Human-readable rendering of a token stream.
//!
//! One line per token, in the fixed format
//! `Line no: <line>, Token: <text>, Type: <kind>`.

pub mod report;
