//! Run reports.
//!
//! - [`terminal`] — colored summary box of ranks and resolution strategies, full
//!   result table with `--verbose`, one line with `--quiet`.
//! - JSON output is a plain `serde_json` dump of the results (see `main`).

pub mod terminal;
