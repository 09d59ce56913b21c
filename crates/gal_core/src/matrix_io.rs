//! Whitespace-delimited text format for distance matrices.
//!
//! One row per line, values written with two decimals and `inf` for missing
//! edges. Writing is lossy below a hundredth of a unit.

use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    distance_matrix::DistanceMatrix,
    error::{GalError, Result},
    timer_debug,
};

fn parse_token(token: &str, line: usize) -> Result<f64> {
    let value: f64 = token.parse().map_err(|_| GalError::Parse {
        line,
        token: token.to_string(),
    })?;

    // f64::from_str also accepts "NaN"
    if value.is_nan() {
        return Err(GalError::Parse {
            line,
            token: token.to_string(),
        });
    }

    Ok(value)
}

pub fn parse_matrix(text: &str) -> Result<DistanceMatrix> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| parse_token(token, index + 1))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    DistanceMatrix::from_rows(rows)
}

pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<DistanceMatrix> {
    let path = path.as_ref();
    let text = timer_debug!(
        format!("Reading {}", path.display()),
        std::fs::read_to_string(path)
    )
    .map_err(|source| GalError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_matrix(&text)
}

pub fn format_matrix(matrix: &DistanceMatrix) -> String {
    let mut output = String::with_capacity(matrix.num_nodes() * matrix.num_nodes() * 8);

    for row in matrix.rows() {
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                output.push(' ');
            }
            // Writing into a String cannot fail
            let _ = write!(output, "{value:.2}");
        }
        output.push('\n');
    }

    output
}

pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &DistanceMatrix) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| GalError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    timer_debug!(format!("Writing {}", path.display()), {
        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        writer
            .write_all(format_matrix(matrix).as_bytes())
            .map_err(io_error)?;
        writer.flush().map_err(io_error)
    })
}
