/*! Bilingual cross-entropy difference scoring.

Follows the Axelrod et al. (EMNLP 2011) convention: each sentence pair
carries four per-sentence cross-entropy scores (in-domain/general-domain
crossed with source/target), and its relevance is the sum of the
in-domain minus general-domain differences on both sides. Lower scores
mean the in-domain models fit better, so lower = more domain-relevant.
!*/
pub mod source;

pub use source::{LmScoreFiles, ScoreSource};

/// Four per-sentence cross-entropy scores attached to one bitext index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRow {
    pub dom_src: f64,
    pub dom_trg: f64,
    pub gen_src: f64,
    pub gen_trg: f64,
}

impl ScoreRow {
    /// Bilingual cross-entropy difference.
    #[inline]
    pub fn ced(&self) -> f64 {
        (self.dom_src - self.gen_src) + (self.dom_trg - self.gen_trg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ced_formula() {
        let row = ScoreRow {
            dom_src: 1.0,
            dom_trg: 2.0,
            gen_src: 3.0,
            gen_trg: 5.0,
        };
        assert_eq!(row.ced(), (1.0 - 3.0) + (2.0 - 5.0));
    }

    #[test]
    fn test_ced_zero_when_domains_agree() {
        let row = ScoreRow {
            dom_src: 4.2,
            dom_trg: 1.3,
            gen_src: 4.2,
            gen_trg: 1.3,
        };
        assert_eq!(row.ced(), 0.0);
    }
}
