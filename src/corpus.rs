use log::info;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::io::list_annotation_files;
use crate::types::Corpus;
use crate::utils::create_progress_bar;
use crate::voc::parse_record;

/// Parse every annotation file in `dirname` and check the label universe.
///
/// Records come back in file-name order. The run fails unless exactly
/// `expected_classes` distinct labels were seen across all records.
pub fn build_corpus(dirname: &Path, expected_classes: usize) -> Result<Corpus> {
    let files = list_annotation_files(dirname)?;
    info!(
        "Found {} annotation file(s) in {}",
        files.len(),
        dirname.display()
    );

    let pb = create_progress_bar(files.len() as u64, "Parse");
    let mut corpus = Corpus::default();
    for path in &files {
        let record = match parse_record(path) {
            Ok(record) => record,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        corpus
            .labels
            .extend(record.regions.iter().map(|region| region.label.clone()));
        corpus.records.push(record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    check_label_universe(&corpus, expected_classes)?;
    Ok(corpus)
}

pub fn check_label_universe(corpus: &Corpus, expected_classes: usize) -> Result<()> {
    if corpus.labels.len() != expected_classes {
        return Err(ConvertError::ClassCount {
            expected: expected_classes,
            found: corpus.labels.clone(),
        });
    }
    Ok(())
}
