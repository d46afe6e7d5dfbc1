//! Pascal VOC to Create ML annotation converter
//!
//! This library reads a directory of per-image VOC XML annotations and writes
//! them as one JSON document listing every image with its labeled boxes.

pub mod config;
pub mod conversion;
pub mod corpus;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;
pub mod voc;

// Re-export commonly used types and functions
pub use config::{Args, CenterY};
pub use conversion::convert_directory;
pub use corpus::build_corpus;
pub use error::{ConvertError, ErrorKind, Result};
pub use io::write_annotations;
pub use types::{AnnotationRecord, ConversionSummary, ConvertOptions, Corpus, ImageEntry, Region};
pub use voc::parse_record;
