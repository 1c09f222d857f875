// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Dense Matrix
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense rectangular matrix of complex scalars.
//!
//! The matrix is a value type for the purposes of algebra: nearly every
//! operation returns a new [`Matrix`] instead of mutating the receiver.
//! The exceptions are the row-rewriting helpers ([`Matrix::set_rows`],
//! [`Matrix::swap_rows`], [`Matrix::row_axpy`]) and the in-place
//! [`Matrix::chop`].
//!
//! Shape-dependent arithmetic (`add`, `dot`) treats matching shapes as
//! the caller's responsibility and only `debug_assert`s them; the
//! structural edits, which take user-supplied indices, validate and
//! return [`LatticeError::IndexOutOfRange`] instead.

use lattice_types::error::{LatticeError, LatticeResult};
use ndarray::Array2;
use num_complex::Complex64;

/// Tolerance used by the structural predicates (`is_diagonal`,
/// `is_symmetric`, ...) when comparing entries.
pub const PREDICATE_TOL: f64 = 1e-9;

/// Dense `rows × cols` matrix of `Complex64` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<Complex64>,
}

// ───────────────────────────── construction ──────────────────────────

impl Matrix {
    /// Square `n × n` matrix, all cells zero.
    pub fn new(n: usize) -> Self {
        Matrix {
            data: Array2::zeros((n, n)),
        }
    }

    /// Rectangular `rows × cols` matrix, all cells zero.
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        Matrix {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// The `n × n` identity.
    pub fn identity(n: usize) -> Self {
        Matrix {
            data: Array2::eye(n),
        }
    }

    /// Wrap an existing array.
    pub fn from_array(data: Array2<Complex64>) -> Self {
        Matrix { data }
    }

    /// Build from real-valued rows. Every row must have the same width
    /// as the first; shorter rows are zero-padded, longer rows
    /// truncated (mirrors [`Matrix::set_rows`]).
    pub fn from_real(rows: &[Vec<f64>]) -> Self {
        let r = rows.len();
        let c = rows.first().map_or(0, |row| row.len());
        let mut m = Matrix::with_shape(r, c);
        for (i, row) in rows.iter().enumerate() {
            for j in 0..c.min(row.len()) {
                m.data[[i, j]] = Complex64::new(row[j], 0.0);
            }
        }
        m
    }

    /// Build from complex-valued rows, same padding rules as
    /// [`Matrix::from_real`].
    pub fn from_complex(rows: &[Vec<Complex64>]) -> Self {
        let r = rows.len();
        let c = rows.first().map_or(0, |row| row.len());
        let mut m = Matrix::with_shape(r, c);
        for (i, row) in rows.iter().enumerate() {
            for j in 0..c.min(row.len()) {
                m.data[[i, j]] = row[j];
            }
        }
        m
    }
}

// ───────────────────────────── accessors ─────────────────────────────

impl Matrix {
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[[row, col]]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.data[[row, col]] = value;
    }

    /// Read-only view of the backing array.
    pub fn array(&self) -> &Array2<Complex64> {
        &self.data
    }

    /// Entry-wise comparison within `tol` (magnitude of the difference).
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).norm() <= tol)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        &self.data[[row, col]]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Complex64 {
        &mut self.data[[row, col]]
    }
}

// ───────────────────────────── arithmetic ────────────────────────────

impl Matrix {
    /// Element-wise sum. Shapes must match.
    pub fn add(&self, rhs: &Matrix) -> Matrix {
        debug_assert_eq!(self.shape(), rhs.shape(), "add requires matching shapes");
        Matrix {
            data: &self.data + &rhs.data,
        }
    }

    /// Element-wise sum over any number of operands, all sharing the
    /// shape of the first. An empty slice yields the empty matrix.
    pub fn sum(operands: &[Matrix]) -> Matrix {
        let Some((first, rest)) = operands.split_first() else {
            return Matrix::with_shape(0, 0);
        };
        let mut total = first.clone();
        for m in rest {
            debug_assert_eq!(total.shape(), m.shape(), "sum requires matching shapes");
            total.data += &m.data;
        }
        total
    }

    /// Element-wise scalar multiple.
    pub fn scaled<S: Into<Complex64>>(&self, scalar: S) -> Matrix {
        let k: Complex64 = scalar.into();
        Matrix {
            data: self.data.mapv(|v| v * k),
        }
    }

    /// Matrix product: `result[i][j] = Σ_k self[i][k] * rhs[k][j]`.
    ///
    /// Standard (non-conjugating) multiplication; use
    /// [`Matrix::conjugate_transpose`] explicitly when a Hermitian
    /// product is wanted.
    pub fn dot(&self, rhs: &Matrix) -> Matrix {
        debug_assert_eq!(
            self.cols(),
            rhs.rows(),
            "dot requires inner dimensions to agree"
        );
        let (m, k, n) = (self.rows(), self.cols(), rhs.cols());
        let mut out = Matrix::with_shape(m, n);
        for i in 0..m {
            for j in 0..n {
                let mut acc = Complex64::new(0.0, 0.0);
                for p in 0..k {
                    acc += self.data[[i, p]] * rhs.data[[p, j]];
                }
                out.data[[i, j]] = acc;
            }
        }
        out
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            data: self.data.t().to_owned(),
        }
    }

    pub fn conjugate_transpose(&self) -> Matrix {
        Matrix {
            data: self.data.t().mapv(|v| v.conj()),
        }
    }

    /// `self` raised to a non-negative integer power by repeated
    /// multiplication. Exponent 0 yields the identity.
    pub fn pow(&self, exponent: u32) -> LatticeResult<Matrix> {
        if !self.is_square() {
            return Err(LatticeError::InvalidArgument(format!(
                "pow requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }
        let mut result = Matrix::identity(self.rows());
        for _ in 0..exponent {
            result = result.dot(self);
        }
        Ok(result)
    }

    /// Sum of the `min(rows, cols)` diagonal entries.
    pub fn trace(&self) -> Complex64 {
        let k = self.rows().min(self.cols());
        (0..k).map(|i| self.data[[i, i]]).sum()
    }
}

// ───────────────────────────── predicates ────────────────────────────

impl Matrix {
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// All off-diagonal entries zero (within [`PREDICATE_TOL`]).
    pub fn is_diagonal(&self) -> bool {
        self.data
            .indexed_iter()
            .all(|((i, j), v)| i == j || v.norm() <= PREDICATE_TOL)
    }

    /// `A == Aᵗ`; false for non-square matrices.
    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.approx_eq(&self.transpose(), PREDICATE_TOL)
    }

    /// `A[i][j] == conj(A[j][i])`.
    pub fn is_hermitian(&self) -> bool {
        self.is_square() && self.approx_eq(&self.conjugate_transpose(), PREDICATE_TOL)
    }

    /// `Aᵗ A == I`.
    pub fn is_orthogonal(&self) -> bool {
        self.is_square()
            && self
                .transpose()
                .dot(self)
                .approx_eq(&Matrix::identity(self.rows()), PREDICATE_TOL)
    }

    /// `Aᴴ A == I`.
    pub fn is_unitary(&self) -> bool {
        self.is_square()
            && self
                .conjugate_transpose()
                .dot(self)
                .approx_eq(&Matrix::identity(self.rows()), PREDICATE_TOL)
    }
}

// ─────────────────────────── structural edits ────────────────────────

impl Matrix {
    fn check_index(&self, index: usize, len: usize, context: &'static str) -> LatticeResult<()> {
        if index >= len {
            return Err(LatticeError::IndexOutOfRange {
                index,
                len,
                context,
            });
        }
        Ok(())
    }

    /// New matrix with `row` inserted before position `index`
    /// (`index == rows` appends). The row must be `cols` wide.
    pub fn insert_row(&self, index: usize, row: &[Complex64]) -> LatticeResult<Matrix> {
        self.check_index(index, self.rows() + 1, "insert_row")?;
        if row.len() != self.cols() {
            return Err(LatticeError::InvalidArgument(format!(
                "insert_row expects a row of width {}, got {}",
                self.cols(),
                row.len()
            )));
        }
        let mut out = Matrix::with_shape(self.rows() + 1, self.cols());
        for i in 0..index {
            for j in 0..self.cols() {
                out.data[[i, j]] = self.data[[i, j]];
            }
        }
        for (j, &v) in row.iter().enumerate() {
            out.data[[index, j]] = v;
        }
        for i in index..self.rows() {
            for j in 0..self.cols() {
                out.data[[i + 1, j]] = self.data[[i, j]];
            }
        }
        Ok(out)
    }

    /// New matrix with `col` inserted before position `index`.
    pub fn insert_column(&self, index: usize, col: &[Complex64]) -> LatticeResult<Matrix> {
        self.check_index(index, self.cols() + 1, "insert_column")?;
        if col.len() != self.rows() {
            return Err(LatticeError::InvalidArgument(format!(
                "insert_column expects a column of height {}, got {}",
                self.rows(),
                col.len()
            )));
        }
        Ok(self.transpose().insert_row(index, col)?.transpose())
    }

    /// New matrix with row `index` removed.
    pub fn remove_row(&self, index: usize) -> LatticeResult<Matrix> {
        self.check_index(index, self.rows(), "remove_row")?;
        let mut out = Matrix::with_shape(self.rows() - 1, self.cols());
        for i in 0..self.rows() {
            if i == index {
                continue;
            }
            let dst = if i < index { i } else { i - 1 };
            for j in 0..self.cols() {
                out.data[[dst, j]] = self.data[[i, j]];
            }
        }
        Ok(out)
    }

    /// New matrix with column `index` removed.
    pub fn remove_column(&self, index: usize) -> LatticeResult<Matrix> {
        self.check_index(index, self.cols(), "remove_column")?;
        Ok(self.transpose().remove_row(index)?.transpose())
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> LatticeResult<()> {
        self.check_index(a, self.rows(), "swap_rows")?;
        self.check_index(b, self.rows(), "swap_rows")?;
        if a == b {
            return Ok(());
        }
        for j in 0..self.cols() {
            self.data.swap([a, j], [b, j]);
        }
        Ok(())
    }

    /// Horizontal concatenation `[self | rhs]`. Row counts must agree.
    pub fn augment(&self, rhs: &Matrix) -> LatticeResult<Matrix> {
        if self.rows() != rhs.rows() {
            return Err(LatticeError::InvalidArgument(format!(
                "augment requires equal row counts: {} vs {}",
                self.rows(),
                rhs.rows()
            )));
        }
        let mut out = Matrix::with_shape(self.rows(), self.cols() + rhs.cols());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                out.data[[i, j]] = self.data[[i, j]];
            }
            for j in 0..rhs.cols() {
                out.data[[i, self.cols() + j]] = rhs.data[[i, j]];
            }
        }
        Ok(out)
    }

    /// Whole-row-set reassignment. When the source has more rows than
    /// the receiver, values are consumed row-major into the existing
    /// shape and the overflow is dropped; otherwise each supplied row
    /// is truncated or zero-padded to `cols` width and any remaining
    /// rows are zeroed.
    pub fn set_rows(&mut self, source: &[Vec<Complex64>]) {
        let (rows, cols) = self.shape();
        if source.len() > rows {
            let mut flat = source.iter().flatten().copied();
            for i in 0..rows {
                for j in 0..cols {
                    self.data[[i, j]] = flat.next().unwrap_or_else(|| Complex64::new(0.0, 0.0));
                }
            }
        } else {
            for i in 0..rows {
                for j in 0..cols {
                    self.data[[i, j]] = source
                        .get(i)
                        .and_then(|row| row.get(j))
                        .copied()
                        .unwrap_or_else(|| Complex64::new(0.0, 0.0));
                }
            }
        }
    }

    /// Coerce components with magnitude below `eps` to exact zero, in
    /// place. Useful after elimination or inversion to clear floating
    /// residue.
    pub fn chop(&mut self, eps: f64) {
        for v in self.data.iter_mut() {
            if v.re.abs() < eps {
                v.re = 0.0;
            }
            if v.im.abs() < eps {
                v.im = 0.0;
            }
        }
    }
}

// ───────────────────────────── rendering ─────────────────────────────

impl std::fmt::Display for Matrix {
    /// Each row rendered as comma-separated `(real, imag)` cells, rows
    /// separated by a line break.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.rows() {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                let v = self.data[[i, j]];
                write!(f, "({}, {})", v.re, v.im)?;
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════
