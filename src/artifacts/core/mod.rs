//! Shared configuration types
//!
//! `options` holds the run configuration assembled by the command line layer.

pub mod options;
