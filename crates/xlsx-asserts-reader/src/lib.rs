//! # xlsx-asserts-reader
//!
//! Loads XLSX (Office Open XML) packages into the read-only model of
//! `xlsx-asserts-core`: cell values (including rich text runs), resolved cell
//! styles, column widths and merged regions.

pub mod error;
pub mod reader;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
