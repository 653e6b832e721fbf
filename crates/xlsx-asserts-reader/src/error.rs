//! Why a package could not be loaded

use thiserror::Error;

pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// A failure to load an XLSX package. Each variant is produced by the loader;
/// nothing here is recoverable by retrying.
#[derive(Debug, Error)]
pub enum XlsxError {
    #[error("could not read the file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not open the archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The archive opened but is not a spreadsheet package, or its workbook
    /// points at parts that do not fit together
    #[error("not a valid XLSX package: {0}")]
    InvalidFormat(String),

    /// A part the workbook needs is absent from the archive
    #[error("package has no '{0}' part")]
    MissingPart(String),

    /// A cell refers to a shared string, style or address that does not exist
    #[error("bad cell data: {0}")]
    BadCell(String),

    /// The loaded sheets do not form a valid workbook (e.g. duplicate names)
    #[error(transparent)]
    Model(#[from] xlsx_asserts_core::Error),
}
