use clap::Parser;
use std::path::PathBuf;

use super::errors::AppError;

/// Parses a projection shape given as `SEQ,ROWS,COLS`.
pub fn parse_shape(s: &str) -> Result<[usize; 3], AppError> {
    let invalid = || AppError::InvalidShape {
        shape: s.to_string(),
    };
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    match parts.as_slice() {
        &[seq, rows, cols] => Ok([seq, rows, cols]),
        _ => Err(invalid()),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "tomopad",
    version,
    about = "Plan padded reconstruction geometry for a projection stack"
)]
pub struct CliArgs {
    /// Projection stack shape as SEQ,ROWS,COLS (e.g. 180,512,640)
    #[arg(short, long, value_parser = parse_shape)]
    pub shape: [usize; 3],

    /// JSON file with reconstruction parameters; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Padding added to both ends of the detector column axis
    #[arg(long, allow_negative_numbers = true)]
    pub pad_x: Option<i64>,

    /// Padding added to both ends of the detector row axis
    #[arg(long, allow_negative_numbers = true)]
    pub pad_y: Option<i64>,

    /// Center of rotation in unpadded detector columns
    #[arg(long, allow_negative_numbers = true)]
    pub center: Option<f64>,

    /// Iteration count for iterative engines
    #[arg(long)]
    pub num_iter: Option<usize>,

    /// Emit the plan as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging (RUST_LOG overrides the default debug level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
