//! Score providers.
//!
//! Ranking consumes scores through the [ScoreSource] trait rather than
//! hard-coded paths, so tests can substitute in-memory scores.
use std::path::PathBuf;

use itertools::izip;
use log::debug;

use crate::error::Error;
use crate::io::read_floats;
use crate::scoring::ScoreRow;

/// Provides one [ScoreRow] per bitext index.
///
/// `expected` is the bitext line count; implementations must fail when
/// they cannot produce exactly that many rows.
pub trait ScoreSource {
    fn load(&self, expected: usize) -> Result<Vec<ScoreRow>, Error>;
}

/// File-backed scores: four float-per-line files, one value per sentence,
/// as produced by querying the four language models on the bitext.
#[derive(Debug)]
pub struct LmScoreFiles {
    pub dom_src: PathBuf,
    pub dom_trg: PathBuf,
    pub gen_src: PathBuf,
    pub gen_trg: PathBuf,
}

impl ScoreSource for LmScoreFiles {
    fn load(&self, expected: usize) -> Result<Vec<ScoreRow>, Error> {
        debug!("loading cross-entropy scores ({} sentences)", expected);
        let dom_src = read_floats(&self.dom_src, expected)?;
        let dom_trg = read_floats(&self.dom_trg, expected)?;
        let gen_src = read_floats(&self.gen_src, expected)?;
        let gen_trg = read_floats(&self.gen_trg, expected)?;

        Ok(izip!(dom_src, dom_trg, gen_src, gen_trg)
            .map(|(dom_src, dom_trg, gen_src, gen_trg)| ScoreRow {
                dom_src,
                dom_trg,
                gen_src,
                gen_trg,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn score_file(values: &[f64]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        for v in values {
            writeln!(f, "{}", v).unwrap();
        }
        f
    }

    #[test]
    fn test_load_from_files() {
        let dom_src = score_file(&[1.0, 2.0]);
        let dom_trg = score_file(&[3.0, 4.0]);
        let gen_src = score_file(&[5.0, 6.0]);
        let gen_trg = score_file(&[7.0, 8.0]);

        let source = LmScoreFiles {
            dom_src: dom_src.path().to_path_buf(),
            dom_trg: dom_trg.path().to_path_buf(),
            gen_src: gen_src.path().to_path_buf(),
            gen_trg: gen_trg.path().to_path_buf(),
        };

        let rows = source.load(2).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ced(), (1.0 - 5.0) + (3.0 - 7.0));
        assert_eq!(rows[1].ced(), (2.0 - 6.0) + (4.0 - 8.0));
    }

    #[test]
    fn test_load_rejects_short_file() {
        let dom_src = score_file(&[1.0]);
        let dom_trg = score_file(&[3.0, 4.0]);
        let gen_src = score_file(&[5.0, 6.0]);
        let gen_trg = score_file(&[7.0, 8.0]);

        let source = LmScoreFiles {
            dom_src: dom_src.path().to_path_buf(),
            dom_trg: dom_trg.path().to_path_buf(),
            gen_src: gen_src.path().to_path_buf(),
            gen_trg: gen_trg.path().to_path_buf(),
        };

        assert!(matches!(source.load(2), Err(Error::SchemaMismatch(_))));
    }
}
