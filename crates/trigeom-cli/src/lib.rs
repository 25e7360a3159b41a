//! Plain-text front end for the `trigeom` broad phase.
//!
//! Input is a triangle count `N` followed by `N * 9` whitespace-separated
//! coordinates (`x y z` for each of the three vertices). Output is the
//! ascending list of indices of the triangles that intersect at least one
//! other triangle, one per line.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;
use trigeom::{Index, Triangle, Vec3};

/// Malformed triangle input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty, expected a triangle count")]
    MissingCount,
    #[error("invalid triangle count `{0}`, expected a non-negative integer")]
    InvalidCount(String),
    #[error("triangle {triangle}: expected 9 coordinates, found {found}")]
    MissingNumber { triangle: usize, found: usize },
    #[error("triangle {triangle}: `{token}` is not a finite number")]
    InvalidNumber { triangle: usize, token: String },
}

/// Parses the whole input text into triangles.
///
/// Tokens after the last announced triangle are ignored.
pub fn parse_triangles(text: &str) -> Result<Vec<Triangle<f64>>, InputError> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(InputError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| InputError::InvalidCount(count_token.to_owned()))?;

    // The count is untrusted; the vector grows with the coordinates read.
    let mut triangles = Vec::new();
    for triangle in 0..count {
        let mut coords = [0.0f64; 9];
        for (found, slot) in coords.iter_mut().enumerate() {
            let token = tokens
                .next()
                .ok_or(InputError::MissingNumber { triangle, found })?;
            *slot = token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| InputError::InvalidNumber {
                    triangle,
                    token: token.to_owned(),
                })?;
        }
        triangles.push(Triangle::new(
            Vec3::new(coords[0], coords[1], coords[2]),
            Vec3::new(coords[3], coords[4], coords[5]),
            Vec3::new(coords[6], coords[7], coords[8]),
        ));
    }
    Ok(triangles)
}

/// Reads `path`, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Installs `env_logger`. `RUST_LOG` wins; otherwise each `-v` raises the
/// level from `warn`.
pub fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Writes `indices` one per line and flushes.
pub fn write_indices<W: Write>(out: &mut W, indices: &[Index]) -> io::Result<()> {
    for index in indices {
        writeln!(out, "{index}")?;
    }
    out.flush()
}
