use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::types::ANNOTATION_EXTENSION;

/// Whether `path` names an annotation file (exact, case-sensitive extension match)
pub fn is_annotation_file(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext == ANNOTATION_EXTENSION)
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
