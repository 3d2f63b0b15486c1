use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;

/// Fatal failures raised while loading an input document.
#[derive(Debug)]
pub enum LoadError {
    SourceNotFound(PathBuf),
    Unreadable(PathBuf, io::Error),
    MalformedDocument(PathBuf, serde_json::Error),
}

/// Failures raised while persisting a rendered report.
#[derive(Debug)]
pub enum ReportError {
    WriteFailed(PathBuf, io::Error),
}

/// Fatal failures that abort a run before a report is produced.
#[derive(Debug)]
pub enum RunError {
    Load(LoadError),
    InvalidCatalogueShape,
    InvalidRecordShape,
    Report(ReportError),
}

/// Advisory problems found while costing a sale. These are collected into the
/// report and never stop processing.
#[derive(Clone, Debug, PartialEq)]
pub enum CostingError {
    InvalidItem { sale: String },
    ProductNotFound { product: String },
    InvalidPrice { product: String },
    InvalidQuantity { product: String, sale: String },
    InvalidSale { position: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::SourceNotFound(path) => write!(f, "File '{}' not found", path.display()),
            LoadError::Unreadable(path, err) => {
                write!(f, "Unable to read file '{}': {}", path.display(), err)
            }
            LoadError::MalformedDocument(path, err) => {
                write!(f, "Invalid JSON in file '{}': {}", path.display(), err)
            }
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::WriteFailed(path, err) => {
                write!(f, "Unable to write report to '{}': {}", path.display(), err)
            }
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Load(err) => write!(f, "{}", err),
            RunError::InvalidCatalogueShape => write!(
                f,
                "Price catalogue must be a mapping of product names to prices"
            ),
            RunError::InvalidRecordShape => write!(f, "Sales record must be a list of sales"),
            RunError::Report(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for CostingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CostingError::InvalidItem { sale } => write!(
                f,
                "Invalid item in sale {}: Missing product name or quantity",
                sale
            ),
            CostingError::ProductNotFound { product } => {
                write!(f, "Product '{}' not found in price catalogue", product)
            }
            CostingError::InvalidPrice { product } => write!(
                f,
                "Invalid price for product '{}' in price catalogue",
                product
            ),
            CostingError::InvalidQuantity { product, sale } => write!(
                f,
                "Invalid quantity for product '{}' in sale {}",
                product, sale
            ),
            CostingError::InvalidSale { position } => write!(
                f,
                "Invalid sale at position {}: expected an object with an items list",
                position
            ),
        }
    }
}

impl From<LoadError> for RunError {
    fn from(err: LoadError) -> Self {
        RunError::Load(err)
    }
}

impl From<ReportError> for RunError {
    fn from(err: ReportError) -> Self {
        RunError::Report(err)
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::SourceNotFound(_) => None,
            LoadError::Unreadable(_, err) => Some(err),
            LoadError::MalformedDocument(_, err) => Some(err),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::WriteFailed(_, err) => Some(err),
        }
    }
}

impl Error for RunError {}
impl Error for CostingError {}
