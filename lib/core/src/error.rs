//! Error handling foundation for amber-relay.
//!
//! Only the shared `Result` alias lives here. Each crate keeps its own
//! plain error enums in its own error module and attaches context with
//! rootcause's `.context()` as failures cross layer boundaries.

use rootcause::Report;

/// Result alias over rootcause's `Report`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
