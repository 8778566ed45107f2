//! Command implementations.

/// Translation command handler (the only command).
pub mod translate;
