//! # nft-dist
//!
//! A command line tool that packages native-file-tests build outputs into a
//! versioned, checksummed zip archive for distribution.
//!
//! ## Overview
//!
//! `nft-dist` collects the files produced by a prior build step (laid out as
//! `build/<config>/<file>`), computes a SHA256 content hash for each, copies
//! them into a freshly created staging directory with the hash appended to
//! the filename, and compresses the staging directory into a zip archive.
//! Downstream consumers verify integrity by recomputing the hash embedded in
//! each filename.
//!
//! ## Usage
//!
//! ```bash
//! # Package the linux build outputs as version 1.2.3
//! nft-dist linux 1.2.3
//!
//! # Package outputs from a non-default location
//! nft-dist darwin 0.4.0 --build-root out/native --output-root dist
//! ```
//!
//! A successful run produces `native-file-tests-<platform>-<version>/`
//! (the staged artifacts, kept for inspection) and
//! `native-file-tests-<platform>-<version>.zip` under the output root.
//!
//! ## Configuration
//!
//! Defaults for the build and output roots can be specified in
//! `.config/nft-dist.toml` in your project directory. Command line flags take
//! precedence over configuration values.

/// Core archiver that orchestrates staging and compression
pub mod archiver;

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration file handling and default settings management
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// Staging-copy and zip archive creation utilities
pub mod packager;

/// Utility functions for file hashing
pub mod utils;
