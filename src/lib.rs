//! # btranslate - Round-Trip Translation CLI
//!
//! `btranslate` is a command-line client for the Microsoft Translator HTTP
//! API. It authenticates via the OAuth2 client-credentials grant, translates
//! text between two languages, and can round-trip the result back to the
//! source language to gauge translation fidelity.
//!
//! ## Quick Start
//!
//! ```bash
//! export BTRANSLATE_CLIENT_ID=...
//! export BTRANSLATE_CLIENT_SECRET=...
//!
//! # Translate a phrase
//! btranslate --from en --to fr --text "Hello"
//!
//! # Translate from stdin
//! cat notes.txt | btranslate --from ja --to en
//!
//! # Round-trip and inspect the result as JSON
//! btranslate --from en --to fr --text "Hello" --json
//! ```
//!
//! ## Configuration
//!
//! Credentials come from `BTRANSLATE_CLIENT_ID` and
//! `BTRANSLATE_CLIENT_SECRET`. The service endpoints are fixed;
//! `BTRANSLATE_TOKEN_URL` and `BTRANSLATE_TRANSLATE_URL` override them for
//! testing.

/// OAuth2 client-credentials authentication.
pub mod auth;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Service constants and environment-backed configuration.
pub mod config;

/// Input reading from stdin.
pub mod input;

/// Structured round-trip output.
pub mod report;

/// Translation endpoint client.
pub mod translation;

/// Terminal UI components (spinner).
pub mod ui;
