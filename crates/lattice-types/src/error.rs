// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LatticeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index out of range: {index} not below {len} ({context})")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        context: &'static str,
    },

    #[error("Power iteration failed to converge after {iterations} iterations: residual = {residual}")]
    ConvergenceFailure { iterations: usize, residual: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
