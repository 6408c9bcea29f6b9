// src/matrix.rs
//! The Path Matrix
//!
//! Both simulators produce the same output shape: a `(paths × steps+1)` grid
//! of simulated prices, row-major by path, with column 0 equal to the initial
//! price for every path. The construction pipeline is shared too: generate a
//! grid of per-step multiplicative factors, prepend a column of `s0`, then
//! take the running product left-to-right along each row.
//!
//! Every factor is strictly positive in both models, so every entry of the
//! matrix is a strictly positive price.

use ndarray::{s, Array2, ArrayView1, ArrayView2, Axis};

/// Immutable grid of simulated prices, one row per path
///
/// Column `j` of row `i` is the price of path `i` at time step `j`
/// (step 0 = initial price). Ownership transfers entirely to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatrix {
    prices: Array2<f64>,
}

impl PathMatrix {
    /// Build the matrix from an initial price and a `(paths × steps)` grid of
    /// multiplicative step factors.
    ///
    /// Prepends a column of `s0` and accumulates the running product along
    /// each row, so entry `(i, j)` is `s0 · f_{i,1} · … · f_{i,j}`.
    pub fn from_step_factors(s0: f64, factors: &Array2<f64>) -> Self {
        let (paths, steps) = factors.dim();
        let mut prices = Array2::from_elem((paths, steps + 1), s0);
        prices.slice_mut(s![.., 1..]).assign(factors);
        prices.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr *= prev);
        PathMatrix { prices }
    }

    /// Number of simulated paths (rows)
    pub fn num_paths(&self) -> usize {
        self.prices.nrows()
    }

    /// Number of time steps; the matrix has `num_steps() + 1` columns
    pub fn num_steps(&self) -> usize {
        self.prices.ncols() - 1
    }

    /// Price of path `i` at time step `j`
    pub fn price(&self, path: usize, step: usize) -> f64 {
        self.prices[[path, step]]
    }

    /// One full trajectory
    pub fn path(&self, i: usize) -> ArrayView1<'_, f64> {
        self.prices.row(i)
    }

    /// Final column: the price of every path at the last time step
    pub fn terminal_prices(&self) -> ArrayView1<'_, f64> {
        self.prices.column(self.prices.ncols() - 1)
    }

    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.prices.view()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.prices
    }
}
