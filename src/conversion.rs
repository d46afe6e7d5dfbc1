use log::info;
use std::path::Path;

use crate::corpus::build_corpus;
use crate::error::Result;
use crate::io::write_annotations;
use crate::types::{ConversionSummary, ConvertOptions};

/// Convert every annotation in `input_dir` into a single JSON document at `output_path`.
///
/// The output file is only created once the whole corpus has been parsed and
/// its label universe checked.
pub fn convert_directory(
    input_dir: &Path,
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    info!("Reading annotations from {}...", input_dir.display());
    let corpus = build_corpus(input_dir, options.expected_classes)?;

    info!("Writing {}...", output_path.display());
    write_annotations(&corpus.records, options.center_y, output_path)?;

    Ok(ConversionSummary::from_corpus(&corpus))
}
