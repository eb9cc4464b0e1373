/*! Epoch schedule generation

Turns a ranked bitext into one materialized training subset per epoch,
under one of two policies:

- [gft::GradualFineTuning]: a monotonically shrinking, domain-biased
  prefix window,
- [sampling::WeightedSampler]: an independent CED-weighted draw without
  replacement per epoch.

Epoch files are the input files suffixed with the 1-indexed epoch number
(`train.src.1 .. train.src.K`). Regenerating an epoch with identical
inputs and seed reproduces byte-identical output.
!*/
pub mod curve;
pub mod gft;
pub mod sampling;

pub use curve::{PowerLaw, ShrinkCurve};
pub use gft::GradualFineTuning;
pub use sampling::WeightedSampler;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::read_lines;

/// Per-run bookkeeping written next to the epoch files as
/// `dds-summary.json`, for downstream trainer scripts.
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub method: String,
    pub total_epochs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub corpus_size: usize,
    pub epoch_sizes: Vec<usize>,
}

impl SelectionSummary {
    /// Writes the summary in the directory holding `alongside`.
    pub fn write(&self, alongside: &Path) -> Result<(), Error> {
        let dst = alongside.with_file_name("dds-summary.json");
        let mut out = BufWriter::new(File::create(dst)?);
        serde_json::to_writer_pretty(&mut out, self)?;
        out.flush()?;
        Ok(())
    }
}

pub(crate) fn validate_epochs(total_epochs: usize) -> Result<(), Error> {
    if total_epochs < 1 {
        return Err(Error::InvalidParameter(
            "total_epochs must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Reads every aligned file, failing with [Error::AlignmentError] on the
/// first length disagreement. Nothing is written on failure.
pub(crate) fn read_aligned(files: &[PathBuf]) -> Result<Vec<(PathBuf, Vec<String>)>, Error> {
    let contents = files
        .iter()
        .map(|path| read_lines(path).map(|lines| (path.clone(), lines)))
        .collect::<Result<Vec<_>, Error>>()?;

    let nb_sentences = contents[0].1.len();
    for (path, lines) in &contents {
        if lines.len() != nb_sentences {
            return Err(Error::AlignmentError {
                path: path.clone(),
                expected: nb_sentences,
                found: lines.len(),
            });
        }
    }
    Ok(contents)
}

pub(crate) fn epoch_path(path: &Path, epoch: usize) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}", epoch));
    path.with_file_name(name)
}

/// Materializes one epoch: for each aligned file, write the selected
/// line numbers (in selection order) to `<file>.<epoch>`.
pub(crate) fn write_epoch(
    contents: &[(PathBuf, Vec<String>)],
    selection: &[usize],
    epoch: usize,
) -> Result<(), Error> {
    for (path, lines) in contents {
        let mut out = BufWriter::new(File::create(epoch_path(path, epoch))?);
        for &sent_nr in selection {
            writeln!(out, "{}", lines[sent_nr])?;
        }
        out.flush()?;
    }
    Ok(())
}
