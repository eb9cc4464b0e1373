/*! Reading facilities

Corpus and score files are plain UTF-8 text, one record per line.
Readers here load whole files: ranking and selection need random access
through the permutation, so streaming buys nothing.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{Error, SchemaMismatch};

/// Read every line of a file, trailing newline stripped.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let br = BufReader::new(File::open(path)?);
    br.lines().map(|l| l.map_err(Error::Io)).collect()
}

/// Read a float-per-line score file, checking its length against the bitext.
///
/// Fails with [Error::SchemaMismatch]: [SchemaMismatch::LineCount] on a
/// line count disagreement, [SchemaMismatch::Value] on a line that is
/// not a finite float.
pub fn read_floats(path: &Path, expected: usize) -> Result<Vec<f64>, Error> {
    let br = BufReader::new(File::open(path)?);
    let mut values = Vec::with_capacity(expected);
    for (nb, line) in br.lines().enumerate() {
        let line = line?;
        match line.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => {
                return Err(SchemaMismatch::Value {
                    path: path.to_path_buf(),
                    line: nb + 1,
                    value: line,
                }
                .into())
            }
        }
    }

    if values.len() != expected {
        return Err(SchemaMismatch::LineCount {
            path: path.to_path_buf(),
            expected,
            found: values.len(),
        }
        .into());
    }
    Ok(values)
}
