//! Report renderers for detection and evaluation results.
//!
//! - [`terminal`] — colored, tabular output with summary box; respects `--verbose` / `--quiet`.
//! - [`csv`] — flat export with a fixed column header.
//! - [`spdx`] — SPDX-2.3 tag:value document grouping results by license.

pub mod csv;
pub mod spdx;
pub mod terminal;
