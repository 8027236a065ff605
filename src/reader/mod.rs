//! Source provider for the scanner.
//!
//! Resolves a bare program name against the fixed programs directory and
//! file extension, and loads the complete text in one blocking read. The
//! scanner has no notion of partial or streamed input; if the text cannot
//! be obtained the caller must abort before any scan is attempted.

pub mod reader;
