// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Determinant
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cofactor-expansion determinant with bounded parallel fan-out, plus
//! the adjugate and the unguarded inverse built on it.
//!
//! For order n > 2 the expansion along row 0 fans out one unit of work
//! per column index onto the rayon pool; each unit computes
//! `a[0][i] * cofactor(0, i)` independently. The fan-out is bounded to
//! this single level — the minor recursion underneath is strictly
//! serial, so parallelism never multiplies with matrix order.
//!
//! Partial terms are merged into one shared accumulator with a
//! compare-and-swap retry loop over the bit patterns of the real and
//! imaginary components: floating-point addition is not natively
//! atomic, so each add reads the current bits, computes the candidate
//! sum, and retries until the exchange lands. No lock is taken.
//! Summation order is therefore nondeterministic across runs, within
//! the usual floating-point reassociation error.

use num_complex::Complex64;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::dense::Matrix;

// ──────────────────────── lock-free accumulator ──────────────────────

/// Shared complex accumulator. Each component lives in an `AtomicU64`
/// holding the `f64` bit pattern.
struct CasAccumulator {
    re: AtomicU64,
    im: AtomicU64,
}

impl CasAccumulator {
    fn new() -> Self {
        CasAccumulator {
            re: AtomicU64::new(0f64.to_bits()),
            im: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// CAS retry loop: read current bits, compute the candidate sum,
    /// attempt to swap, retry on contention.
    fn add_component(cell: &AtomicU64, delta: f64) {
        let mut current = cell.load(Ordering::Acquire);
        loop {
            let next = (f64::from_bits(current) + delta).to_bits();
            match cell.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
    }

    fn add(&self, term: Complex64) {
        Self::add_component(&self.re, term.re);
        Self::add_component(&self.im, term.im);
    }

    fn value(&self) -> Complex64 {
        Complex64::new(
            f64::from_bits(self.re.load(Ordering::Acquire)),
            f64::from_bits(self.im.load(Ordering::Acquire)),
        )
    }
}

// ───────────────────────────── determinant ───────────────────────────

impl Matrix {
    /// Determinant by cofactor expansion along row 0. Orders 1 and 2
    /// are closed-form; above that the per-column terms run in
    /// parallel (one level only) and merge lock-free.
    ///
    /// The receiver must be square; shape is the caller's
    /// responsibility, as with [`Matrix::dot`].
    pub fn det(&self) -> Complex64 {
        debug_assert!(self.is_square(), "determinant requires a square matrix");
        let n = self.rows();
        match n {
            0 => Complex64::new(1.0, 0.0),
            1 | 2 => self.det_serial(),
            _ => {
                let acc = CasAccumulator::new();
                (0..n).into_par_iter().for_each(|col| {
                    acc.add(self.get(0, col) * self.cofactor(0, col));
                });
                acc.value()
            }
        }
    }

    /// Fully serial determinant, used beneath the parallel level.
    fn det_serial(&self) -> Complex64 {
        let n = self.rows();
        match n {
            0 => Complex64::new(1.0, 0.0),
            1 => self.get(0, 0),
            2 => self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0),
            _ => (0..n)
                .map(|col| self.get(0, col) * self.cofactor(0, col))
                .sum(),
        }
    }

    /// Minor with row `row` and column `col` struck out. Internal:
    /// indices are trusted.
    fn minor(&self, row: usize, col: usize) -> Matrix {
        let n = self.rows();
        let mut out = Matrix::with_shape(n - 1, n - 1);
        for i in 0..n {
            if i == row {
                continue;
            }
            let di = if i < row { i } else { i - 1 };
            for j in 0..n {
                if j == col {
                    continue;
                }
                let dj = if j < col { j } else { j - 1 };
                out.set(di, dj, self.get(i, j));
            }
        }
        out
    }

    /// `(-1)^(i+j) * det(minor(i, j))`. Serial, so the determinant's
    /// fan-out stays bounded to one level.
    pub fn cofactor(&self, row: usize, col: usize) -> Complex64 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        self.minor(row, col).det_serial() * sign
    }

    /// Adjugate: transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Matrix {
        let n = self.rows();
        let mut cof = Matrix::new(n);
        for i in 0..n {
            for j in 0..n {
                cof.set(i, j, self.cofactor(i, j));
            }
        }
        cof.transpose()
    }

    /// `adjugate / det`. Deliberately unguarded: a zero determinant
    /// yields infinite/NaN entries rather than an error, keeping the
    /// operation total.
    pub fn inverse(&self) -> Matrix {
        let det = self.det();
        self.adjugate().scaled(Complex64::new(1.0, 0.0) / det)
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════
