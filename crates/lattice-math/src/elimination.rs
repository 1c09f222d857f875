// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Elimination
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gaussian elimination over an augmented system.
//!
//! ```text
//! [A | b]  →  to_upper_triangular  →  back substitution  →  x
//! ```
//!
//! Pivoting is partial: for each pivot column the row at or below the
//! diagonal with the largest-magnitude entry is swapped into position
//! before elimination. Row elimination itself goes through the generic
//! elementary-row-operation primitive [`Matrix::row_axpy`].
//!
//! Each solved unknown is rounded to 2 decimal places, matching the
//! presentation contract of the solver.

use lattice_types::error::{LatticeError, LatticeResult};
use ndarray::Array1;
use num_complex::Complex64;

use crate::dense::Matrix;

/// Round both components to 2 decimal places.
fn round2(v: Complex64) -> Complex64 {
    Complex64::new((v.re * 100.0).round() / 100.0, (v.im * 100.0).round() / 100.0)
}

impl Matrix {
    /// Elementary row operation: `row[dst] += scalar * row[src]`, in
    /// place. Internal building block of the elimination sweep;
    /// indices are trusted.
    pub fn row_axpy(&mut self, scalar: Complex64, src: usize, dst: usize) {
        debug_assert!(src < self.rows() && dst < self.rows());
        for j in 0..self.cols() {
            let add = self.get(src, j) * scalar;
            let v = self.get(dst, j) + add;
            self.set(dst, j, v);
        }
    }

    /// Upper-triangular reduction with partial pivoting. Returns a new
    /// matrix; the receiver is untouched. Works on any shape — the
    /// sweep runs over `min(rows, cols)` pivot columns, so an
    /// augmented `n × (n+1)` system reduces in one pass.
    pub fn to_upper_triangular(&self) -> Matrix {
        let mut work = self.clone();
        let pivots = work.rows().min(work.cols());

        for p in 0..pivots {
            // Select the largest-magnitude entry at or below the pivot
            let mut best = p;
            let mut best_mag = work.get(p, p).norm();
            for r in (p + 1)..work.rows() {
                let mag = work.get(r, p).norm();
                if mag > best_mag {
                    best = r;
                    best_mag = mag;
                }
            }
            if best != p {
                // Indices are in range by construction
                let _ = work.swap_rows(p, best);
            }

            let pivot = work.get(p, p);
            if pivot.norm() == 0.0 {
                continue; // Column already clear (singular system)
            }
            for r in (p + 1)..work.rows() {
                let factor = -(work.get(r, p) / pivot);
                work.row_axpy(factor, p, r);
                // Clear the eliminated entry exactly
                work.set(r, p, Complex64::new(0.0, 0.0));
            }
        }
        work
    }

    /// Solve the augmented system `[A | b]` (shape `n × (n+1)`) by
    /// upper-triangular reduction and back substitution. Each solved
    /// unknown is rounded to 2 decimal places.
    pub fn gaussian_elimination(&self) -> LatticeResult<Array1<Complex64>> {
        let n = self.rows();
        if self.cols() != n + 1 {
            return Err(LatticeError::InvalidArgument(format!(
                "gaussian_elimination expects an augmented n x (n+1) system, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }

        let upper = self.to_upper_triangular();
        let mut solution = Array1::zeros(n);

        for i in (0..n).rev() {
            let mut sum = upper.get(i, n);
            for j in (i + 1)..n {
                sum -= upper.get(i, j) * solution[j];
            }
            solution[i] = round2(sum / upper.get(i, i));
        }
        Ok(solution)
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════
