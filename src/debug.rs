use std::io;
use std::io::Write;

use crate::alg;
use crate::config;

/// Prints the matrix to stdout as four `| a b c d |` rows
pub fn print(mat: &alg::Mat) {
    print_with(mat, &config::Settings::default());
}

pub fn print_with(mat: &alg::Mat, settings: &config::Settings) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Nothing useful to do if stdout is gone
    if let Err(e) = write_mat(&mut out, mat, settings.precision) {
        warn!("Failed to print matrix: {}", e);
    }
}

/// Precision is capped at `config::MAX_PRECISION`
pub fn write_mat<W: Write>(
    out: &mut W,
    mat: &alg::Mat,
    precision: usize,
) -> io::Result<()> {
    let precision = precision.min(config::MAX_PRECISION);
    writeln!(out, "{:.*}", precision, mat)
}

pub fn write_vec3<W: Write>(
    out: &mut W,
    vec: alg::Vec3,
    precision: usize,
) -> io::Result<()> {
    let precision = precision.min(config::MAX_PRECISION);

    writeln!(
        out,
        "( {:.*} {:.*} {:.*} )",
        precision, vec.x,
        precision, vec.y,
        precision, vec.z,
    )
}
