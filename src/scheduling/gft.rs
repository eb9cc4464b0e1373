//! Gradual fine-tuning: per-epoch shrinking prefix of the ranked bitext.
use std::path::PathBuf;

use log::{info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::scheduling::{
    read_aligned, validate_epochs, write_epoch, SelectionSummary, ShrinkCurve,
};

/// Curriculum generator: epoch 1 trains on the full ranked corpus, later
/// epochs on shrinking top-ranked prefixes, down to the curve's floor at
/// the final epoch. Subset order is ranked order, not shuffled.
pub struct GradualFineTuning<C> {
    files: Vec<PathBuf>,
    curve: C,
    total_epochs: usize,
}

impl<C> GradualFineTuning<C>
where
    C: ShrinkCurve + Sync,
{
    pub fn new(files: Vec<PathBuf>, curve: C, total_epochs: usize) -> Result<Self, Error> {
        validate_epochs(total_epochs)?;
        if files.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "at least two aligned bitext files are required, got {}",
                files.len()
            )));
        }
        Ok(Self {
            files,
            curve,
            total_epochs,
        })
    }

    pub fn run(&self) -> Result<SelectionSummary, Error> {
        let contents = read_aligned(&self.files)?;
        let nb_sentences = contents[0].1.len();

        // f(total, total) is the curve's floor; probing it with a
        // two-epoch schedule tells us whether shrinkage was requested
        if self.total_epochs == 1 && self.curve.fraction(2, 2) < 1.0 {
            warn!("total_epochs = 1: no shrinkage possible, the final retained fraction is unreachable and epoch 1 uses the full corpus");
        }

        let epoch_sizes: Vec<usize> = (1..=self.total_epochs)
            .map(|e| {
                let fraction = self.curve.fraction(e, self.total_epochs);
                (fraction * nb_sentences as f64).round() as usize
            })
            .collect();

        info!(
            "applying gradual fine-tuning for {} epochs ({} -> {} sentence pairs)",
            self.total_epochs,
            epoch_sizes.first().unwrap_or(&0),
            epoch_sizes.last().unwrap_or(&0)
        );

        // epochs share nothing but the read-only ranked corpus
        epoch_sizes
            .par_iter()
            .enumerate()
            .try_for_each(|(nb, &keep)| {
                let selection: Vec<usize> = (0..keep).collect();
                write_epoch(&contents, &selection, nb + 1)
            })?;

        Ok(SelectionSummary {
            method: "gft".to_string(),
            total_epochs: self.total_epochs,
            seed: None,
            corpus_size: nb_sentences,
            epoch_sizes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::PowerLaw;

    fn write_bitext(dir: &std::path::Path, nb: usize) -> (PathBuf, PathBuf) {
        let src = dir.join("train.src");
        let trg = dir.join("train.trg");
        let src_lines: Vec<String> = (0..nb).map(|i| format!("src sentence {}", i)).collect();
        let trg_lines: Vec<String> = (0..nb).map(|i| format!("trg sentence {}", i)).collect();
        std::fs::write(&src, src_lines.join("\n") + "\n").unwrap();
        std::fs::write(&trg, trg_lines.join("\n") + "\n").unwrap();
        (src, trg)
    }

    #[test]
    fn test_prefix_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let (src, trg) = write_bitext(dir.path(), 10);
        let curve = PowerLaw::new(1.0, 0.5, 1.0).unwrap();
        let gft = GradualFineTuning::new(vec![src.clone(), trg], curve, 3).unwrap();
        let summary = gft.run().unwrap();

        assert_eq!(summary.epoch_sizes, vec![10, 8, 5]);
        for (e, &size) in summary.epoch_sizes.iter().enumerate() {
            let lines = std::fs::read_to_string(dir.path().join(format!("train.src.{}", e + 1)))
                .unwrap()
                .lines()
                .count();
            assert_eq!(lines, size);
        }
    }

    #[test]
    fn test_subsets_are_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let (src, trg) = write_bitext(dir.path(), 8);
        let curve = PowerLaw::new(2.0, 0.25, 1.0).unwrap();
        let gft = GradualFineTuning::new(vec![src, trg], curve, 4).unwrap();
        gft.run().unwrap();

        let full = std::fs::read_to_string(dir.path().join("train.trg.1")).unwrap();
        for e in 2..=4 {
            let subset =
                std::fs::read_to_string(dir.path().join(format!("train.trg.{}", e))).unwrap();
            assert!(full.starts_with(&subset));
        }
    }

    #[test]
    fn test_zero_epochs_rejected() {
        let curve = PowerLaw::new(1.0, 0.5, 1.0).unwrap();
        let res = GradualFineTuning::new(
            vec![PathBuf::from("a.src"), PathBuf::from("a.trg")],
            curve,
            0,
        );
        assert!(matches!(res, Err(Error::InvalidParameter(_))));
    }

    #[test_log::test]
    fn test_single_epoch_warns_and_runs() {
        let dir = tempfile::tempdir().unwrap();
        let (src, trg) = write_bitext(dir.path(), 4);
        let curve = PowerLaw::new(1.0, 0.5, 1.0).unwrap();
        let gft = GradualFineTuning::new(vec![src, trg], curve, 1).unwrap();
        let summary = gft.run().unwrap();
        assert_eq!(summary.epoch_sizes, vec![4]);
    }
}
