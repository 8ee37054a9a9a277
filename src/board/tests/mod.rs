//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `slides.rs` - Direction handling and whole-board slides
//! - `terminal.rs` - Game-over detection
//! - `notation.rs` - Board and direction parsing
//! - `proptest.rs` - Property-based tests
