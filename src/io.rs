/*!
# IO

Reading degree sequences and writing samples.

## Input

A degree file holds one integer per whitespace-delimited token; line breaks
carry no meaning. Negative entries are parsed here and rejected later by the
samplers, so the caller sees a domain error rather than a parse error.

## Output

A sample is written as one line holding the log-probability, one `u\tv`
line per edge with 1-based endpoints, and a blank separator line. The
log-probability uses Rust's shortest round-trip notation for `f64`, i.e.
the printed decimal parses back to the identical bits.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Result, Write},
    path::Path,
};

use crate::{edge::Edge, sample::Sample};

/// Reads a whitespace-delimited degree sequence from the given reader.
///
/// # Errors
/// Returns an error if reading fails or a token is not an integer.
pub fn read_degrees<R>(mut reader: R) -> Result<Vec<i64>>
where
    R: BufRead,
{
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    content
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| {
                std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("invalid degree token: {token}"),
                )
            })
        })
        .collect()
}

/// Reads a whitespace-delimited degree sequence from a file.
///
/// # Errors
/// Returns an error if the file cannot be opened or a token is not an
/// integer.
pub fn read_degree_file<P>(path: P) -> Result<Vec<i64>>
where
    P: AsRef<Path>,
{
    read_degrees(BufReader::new(File::open(path)?))
}

/// Writes one sample: log-probability, tab-separated 1-based edges, blank
/// separator line.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_sample<W>(mut writer: W, sample: &Sample) -> Result<()>
where
    W: Write,
{
    writeln!(writer, "{}", sample.log_prob)?;
    for &Edge(u, v) in &sample.edges {
        writeln!(writer, "{}\t{}", u + 1, v + 1)?;
    }
    writeln!(writer)
}
