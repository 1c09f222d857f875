// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Lattice Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense matrix algebra over complex scalars.

pub mod dense;
pub mod determinant;
pub mod eigen;
pub mod elimination;
pub mod norms;

pub use dense::Matrix;
pub use eigen::PowerIterationConfig;
