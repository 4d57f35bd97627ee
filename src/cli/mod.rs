//! Command-line interface module
//!
//! Wires the release pipeline together: load config, fetch the release,
//! render the changelog entry and write it out.
pub mod release;
