//! Reads catalogs stored as plain text.
//!
//! The format is a stream of whitespace-separated numbers that are consumed
//! two at a time as `(ra, dec)` pairs (in degrees). Line breaks carry no
//! meaning, so a file may hold one pair per line or several. A dangling
//! value without a partner is dropped.
//!
//! Reading stops at the end of the input or at the first token that doesn't
//! start with a finite number. When a token starts with a number but holds
//! trailing junk (e.g. `4abc`), the leading number is kept and reading stops
//! right after it. Bytes that aren't valid UTF-8 are treated like any other
//! junk, so only genuine I/O failures produce an `Err`.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ndarray::Array2;
use tracing::{debug, warn};

use crate::{Error, points::pack_pairs};

/// parse a catalog from `reader`. The result has shape `(2, n_points)` and
/// can be viewed with [`crate::SkyPoints::new`].
pub fn read_catalog<R: BufRead>(reader: R) -> Result<Array2<f64>, Error> {
    read_catalog_impl(reader, None)
}

/// open `path` and parse the catalog that it holds
pub fn read_catalog_file(path: impl AsRef<Path>) -> Result<Array2<f64>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(Some(path.to_path_buf()), e))?;
    read_catalog_impl(BufReader::new(file), Some(path))
}

/// the length of the longest prefix of `token` that spells out a decimal
/// number: an optional sign, digits with an optional fraction, then an
/// optional exponent (only consumed when at least one digit follows it)
fn numeric_prefix_len(token: &[u8]) -> usize {
    let count_digits = |from: usize| {
        token[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = 0;
    if matches!(token.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let int_digits = count_digits(pos);
    pos += int_digits;
    let mut frac_digits = 0;
    if token.get(pos) == Some(&b'.') {
        frac_digits = count_digits(pos + 1);
        if int_digits + frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(token.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(token.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(exp_pos);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }
    pos
}

/// parse the number at the start of `token`. Returns the value and whether
/// it spanned the whole token
fn parse_leading_number(token: &[u8]) -> Option<(f64, bool)> {
    let len = numeric_prefix_len(token);
    // the prefix is pure ASCII, so it is always valid UTF-8
    let text = std::str::from_utf8(&token[..len]).ok()?;
    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some((value, len == token.len()))
}

fn read_catalog_impl<R: BufRead>(reader: R, path: Option<&Path>) -> Result<Array2<f64>, Error> {
    let mut pairs: Vec<(f64, f64)> = Vec::new();
    let mut pending: Option<f64> = None;

    'lines: for (line_idx, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| Error::io(path.map(Path::to_path_buf), e))?;
        let tokens = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|t| !t.is_empty());
        for token in tokens {
            let Some((value, whole_token)) = parse_leading_number(token) else {
                warn!(
                    line = line_idx + 1,
                    token = %String::from_utf8_lossy(token),
                    "stopped reading catalog at a non-numeric token"
                );
                break 'lines;
            };
            match pending.take() {
                Some(ra) => pairs.push((ra, value)),
                None => pending = Some(value),
            }
            if !whole_token {
                warn!(
                    line = line_idx + 1,
                    token = %String::from_utf8_lossy(token),
                    "stopped reading catalog after the number leading a token"
                );
                break 'lines;
            }
        }
    }

    if pending.is_some() {
        warn!("dropped a trailing right ascension without a declination");
    }
    debug!(n_points = pairs.len(), "read catalog");
    Ok(pack_pairs(&pairs))
}
