use thiserror::Error;

/// Errors raised when building or filling a [`Heatmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeatmapError {
    #[error("heatmap axes must not be empty")]
    EmptyAxis,

    #[error("cell index {index} is outside a heatmap of {len} cells")]
    OutOfBounds { index: usize, len: usize },
}

/// A scalar field sampled on a rectangular grid.
///
/// Values are stored row-major: row `j` holds every `x` at `ys[j]`, which is
/// the order produced by `aerosim_sweep::samples::grid`. A sweep event's
/// index can therefore be recorded directly with [`Heatmap::record`].
///
/// Unrecorded cells hold `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    xs: Vec<f64>,
    ys: Vec<f64>,
    values: Vec<f64>,
}

/// One rectangular cell of a [`Heatmap`], bounded halfway to its neighbors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub value: f64,
}

impl Heatmap {
    /// Creates an empty heatmap over the given axes.
    ///
    /// # Errors
    ///
    /// Returns [`HeatmapError::EmptyAxis`] if either axis has no values.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, HeatmapError> {
        if xs.is_empty() || ys.is_empty() {
            return Err(HeatmapError::EmptyAxis);
        }
        let values = vec![f64::NAN; xs.len() * ys.len()];
        Ok(Self { xs, ys, values })
    }

    /// Stores a value at a row-major cell index.
    ///
    /// # Errors
    ///
    /// Returns [`HeatmapError::OutOfBounds`] if the index is past the last cell.
    pub fn record(&mut self, index: usize, value: f64) -> Result<(), HeatmapError> {
        let len = self.values.len();
        let cell = self
            .values
            .get_mut(index)
            .ok_or(HeatmapError::OutOfBounds { index, len })?;
        *cell = value;
        Ok(())
    }

    /// Returns the value at column `col` (x index) and row `row` (y index).
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col < self.cols() && row < self.rows() {
            Some(self.values[row * self.cols() + col])
        } else {
            None
        }
    }

    /// Returns every value of one row, or `None` past the last row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let cols = self.cols();
        self.values.get(row * cols..(row + 1) * cols)
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.ys.len()
    }

    /// Returns the smallest and largest finite values, if any.
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Returns the `[x, y]` location and value of the largest finite value.
    ///
    /// Ties resolve to the first cell in row-major order.
    #[must_use]
    pub fn max(&self) -> Option<([f64; 2], f64)> {
        let (index, value) = self
            .values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
                Some((_, best_v)) if best_v >= v => best,
                _ => Some((i, v)),
            })?;

        let cols = self.cols();
        Some(([self.xs[index % cols], self.ys[index / cols]], value))
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let x_edges = edges(&self.xs);
        let y_edges = edges(&self.ys);

        self.values.iter().enumerate().map(move |(i, &value)| {
            let (col, row) = (i % self.xs.len(), i / self.xs.len());
            Cell {
                x: [x_edges[col], x_edges[col + 1]],
                y: [y_edges[row], y_edges[row + 1]],
                value,
            }
        })
    }
}

/// Cell boundaries halfway between neighboring axis values.
///
/// The outer edges extend by half the adjacent spacing, or by 0.5 for a
/// single-value axis.
fn edges(axis: &[f64]) -> Vec<f64> {
    let n = axis.len();
    match n {
        0 => Vec::new(),
        1 => vec![axis[0] - 0.5, axis[0] + 0.5],
        _ => {
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(axis[0] - 0.5 * (axis[1] - axis[0]));
            edges.extend(axis.windows(2).map(|pair| 0.5 * (pair[0] + pair[1])));
            edges.push(axis[n - 1] + 0.5 * (axis[n - 1] - axis[n - 2]));
            edges
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn filled() -> Heatmap {
        let mut map = Heatmap::new(vec![0.0, 1.0, 2.0], vec![10.0, 20.0]).unwrap();
        for (i, v) in [1.0, 5.0, 3.0, 2.0, 4.0, 0.5].into_iter().enumerate() {
            map.record(i, v).unwrap();
        }
        map
    }

    #[test]
    fn rejects_empty_axes() {
        assert_eq!(
            Heatmap::new(Vec::new(), vec![1.0]),
            Err(HeatmapError::EmptyAxis)
        );
    }

    #[test]
    fn row_major_layout() {
        let map = filled();
        assert_eq!(map.get(1, 0), Some(5.0));
        assert_eq!(map.get(0, 1), Some(2.0));
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.row(1), Some(&[2.0, 4.0, 0.5][..]));
        assert_eq!(map.row(2), None);
    }

    #[test]
    fn record_out_of_bounds() {
        let mut map = filled();
        assert_eq!(
            map.record(6, 1.0),
            Err(HeatmapError::OutOfBounds { index: 6, len: 6 })
        );
    }

    #[test]
    fn range_and_max_skip_unrecorded_cells() {
        let mut map = Heatmap::new(vec![0.0, 1.0], vec![0.0]).unwrap();
        assert_eq!(map.range(), None);
        assert_eq!(map.max(), None);

        map.record(1, -2.0).unwrap();
        assert_eq!(map.range(), Some((-2.0, -2.0)));
        assert_eq!(map.max(), Some(([1.0, 0.0], -2.0)));

        let map = filled();
        assert_eq!(map.range(), Some((0.5, 5.0)));
        assert_eq!(map.max(), Some(([1.0, 10.0], 5.0)));
    }

    #[test]
    fn cells_span_midpoints() {
        let map = filled();
        let cells: Vec<Cell> = map.cells().collect();
        assert_eq!(cells.len(), 6);

        assert_relative_eq!(cells[0].x[0], -0.5);
        assert_relative_eq!(cells[0].x[1], 0.5);
        assert_relative_eq!(cells[0].y[0], 5.0);
        assert_relative_eq!(cells[0].y[1], 15.0);

        assert_relative_eq!(cells[5].x[1], 2.5);
        assert_relative_eq!(cells[5].y[1], 25.0);
        assert_relative_eq!(cells[5].value, 0.5);
    }

    #[test]
    fn single_value_axis_gets_unit_cell() {
        assert_eq!(edges(&[3.0]), vec![2.5, 3.5]);
    }
}
