//! CED-weighted sampling: one independent draw per epoch.
//!
//! CED scores from the weights file are inverted and min-max normalized
//! so that the most domain-relevant pairs get the largest weights, then
//! sharpened by `alpha`. Each epoch draws without replacement from the
//! whole ranked corpus; epochs are not disjoint, a pair may appear in
//! several epochs or in none. Drawn indices are re-sorted by rank before
//! writing, so every epoch file is in ranked order.
use std::path::PathBuf;

use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::error::{Error, SchemaMismatch};
use crate::io::read_floats;
use crate::scheduling::{read_aligned, validate_epochs, write_epoch, SelectionSummary};

pub struct WeightedSampler {
    files: Vec<PathBuf>,
    ced_weights: PathBuf,
    alpha: f64,
    sampling_fraction: f64,
    total_epochs: usize,
    seed: u64,
}

impl WeightedSampler {
    pub fn new(
        files: Vec<PathBuf>,
        ced_weights: PathBuf,
        alpha: f64,
        sampling_fraction: f64,
        total_epochs: usize,
        seed: u64,
    ) -> Result<Self, Error> {
        validate_epochs(total_epochs)?;
        if files.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "at least two aligned bitext files are required, got {}",
                files.len()
            )));
        }
        if !(sampling_fraction > 0.0 && sampling_fraction <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "sampling_fraction must be in (0, 1], got {}",
                sampling_fraction
            )));
        }
        if !(alpha.is_finite() && alpha >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "alpha must be a non-negative finite number, got {}",
                alpha
            )));
        }
        Ok(Self {
            files,
            ced_weights,
            alpha,
            sampling_fraction,
            total_epochs,
            seed,
        })
    }

    pub fn run(&self) -> Result<SelectionSummary, Error> {
        let contents = read_aligned(&self.files)?;
        let nb_sentences = contents[0].1.len();

        // a weights/corpus length disagreement is an alignment problem,
        // not a schema one
        let ced = read_floats(&self.ced_weights, nb_sentences).map_err(|e| match e {
            Error::SchemaMismatch(SchemaMismatch::LineCount {
                path,
                expected,
                found,
            }) => Error::AlignmentError {
                path,
                expected,
                found,
            },
            other => other,
        })?;

        let weights = sampling_weights(&ced, self.alpha)?;
        let amount = (self.sampling_fraction * nb_sentences as f64).round() as usize;

        let nb_positive = weights.iter().filter(|&&w| w > 0.0).count();
        if nb_positive < amount {
            return Err(Error::DegenerateDistribution(format!(
                "only {} sentence pairs have a positive sampling weight, cannot draw {} without replacement",
                nb_positive, amount
            )));
        }

        info!(
            "sampling {:.1}% of the training data ({} of {} sentence pairs) for {} epochs",
            100.0 * self.sampling_fraction,
            amount,
            nb_sentences,
            self.total_epochs
        );

        let mut epoch_sizes = Vec::with_capacity(self.total_epochs);
        for epoch in 1..=self.total_epochs {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(epoch as u64));
            let mut selection =
                rand::seq::index::sample_weighted(&mut rng, nb_sentences, |i| weights[i], amount)
                    .map_err(|e| Error::DegenerateDistribution(e.to_string()))?
                    .into_vec();
            selection.sort_unstable();
            write_epoch(&contents, &selection, epoch)?;
            epoch_sizes.push(selection.len());
        }

        Ok(SelectionSummary {
            method: "sampling".to_string(),
            total_epochs: self.total_epochs,
            seed: Some(self.seed),
            corpus_size: nb_sentences,
            epoch_sizes,
        })
    }
}

/// Turns ascending CED scores into non-negative sampling weights:
/// invert + min-max normalize, then sharpen by `alpha`. A corpus where
/// every CED is identical degenerates to uniform weights.
pub fn sampling_weights(ced: &[f64], alpha: f64) -> Result<Vec<f64>, Error> {
    if ced.is_empty() {
        return Err(Error::DegenerateDistribution(
            "empty weights file".to_string(),
        ));
    }

    let min = ced.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = ced.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let weights: Vec<f64> = if max == min {
        vec![1.0; ced.len()]
    } else {
        ced.iter()
            .map(|c| (1.0 - (c - min) / (max - min)).powf(alpha))
            .collect()
    };

    let sum: f64 = weights.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        return Err(Error::DegenerateDistribution(format!(
            "sampling weights sum to {}",
            sum
        )));
    }
    Ok(weights)
}
