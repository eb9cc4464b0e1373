/*! Bitext ranking

Sorts every aligned corpus file by ascending bilingual cross-entropy
difference, most domain-relevant sentence pairs first, and writes the CED
scores in that same order to a weights file.

The sort order is computed once as an explicit index permutation and then
applied to every file, which keeps all outputs mutually aligned. Ties are
broken by original index so reruns are byte-identical.
!*/
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use rayon::prelude::*;

use crate::error::Error;
use crate::io::read_lines;
use crate::scoring::ScoreSource;

/// Ascending sort order over CED scores, ties broken by original index.
pub fn rank_order(ced: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ced.len()).collect();
    order.sort_by(|&a, &b| ced[a].total_cmp(&ced[b]).then(a.cmp(&b)));
    order
}

/// Ranks a set of aligned corpus files by CED.
pub struct BitextRanker {
    files: Vec<PathBuf>,
    weights_out: PathBuf,
}

impl BitextRanker {
    /// `files` holds the aligned corpus files, source and target first,
    /// then any auxiliary files sharing the same line indexing.
    pub fn new(files: Vec<PathBuf>, weights_out: PathBuf) -> Result<Self, Error> {
        if files.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "at least two aligned bitext files are required, got {}",
                files.len()
            )));
        }
        Ok(Self { files, weights_out })
    }

    /// Runs the ranking stage end to end.
    ///
    /// Every aligned file and the score files are validated before any
    /// output is created, so a failure leaves no partial files behind.
    pub fn run(&self, scores: &impl ScoreSource) -> Result<(), Error> {
        let contents = self
            .files
            .iter()
            .map(|path| read_lines(path).map(|lines| (path.as_path(), lines)))
            .collect::<Result<Vec<_>, Error>>()?;

        let nb_sentences = contents[0].1.len();
        for (path, lines) in &contents {
            if lines.len() != nb_sentences {
                return Err(Error::AlignmentError {
                    path: path.to_path_buf(),
                    expected: nb_sentences,
                    found: lines.len(),
                });
            }
        }

        let ced: Vec<f64> = scores
            .load(nb_sentences)?
            .iter()
            .map(|row| row.ced())
            .collect();
        let order = rank_order(&ced);

        info!(
            "ranking {} sentence pairs across {} aligned files",
            nb_sentences,
            contents.len()
        );

        // each rewrite only reads the shared permutation
        contents
            .par_iter()
            .try_for_each(|(path, lines)| write_ranked(path, lines, &order))?;

        let mut weights = BufWriter::new(File::create(&self.weights_out)?);
        for &sent_nr in &order {
            writeln!(weights, "{}", ced[sent_nr])?;
        }
        weights.flush()?;

        Ok(())
    }
}

/// Applies the permutation to one file, writing a `.ranked` sibling.
fn write_ranked(path: &Path, lines: &[String], order: &[usize]) -> Result<(), Error> {
    let dst = ranked_path(path);
    info!("writing {:?}", dst);
    let mut out = BufWriter::new(File::create(dst)?);
    for &sent_nr in order {
        writeln!(out, "{}", lines[sent_nr])?;
    }
    out.flush()?;
    Ok(())
}

fn ranked_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".ranked");
    path.with_file_name(name)
}
