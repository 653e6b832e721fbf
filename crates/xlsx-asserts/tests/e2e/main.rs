//! End-to-end tests for xlsx-asserts.
//!
//! Each test builds the workbook it needs as a real XLSX package in a
//! temporary directory, loads the active sheet with `load_active_sheet` and
//! runs the assertions against it. No external tools are required.

mod assertions;
mod fixtures;
mod loading;
mod scenario;

// Re-export common utilities for submodules
pub use common::*;
