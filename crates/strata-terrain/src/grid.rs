//! Contiguous 2D scalar grid.

use strata_mesh::Heightfield;

/// A `width × height` grid of `f32` samples indexed `[x][y]`.
///
/// Stored as one buffer addressed `x * height + y`, the same order in which
/// the mesh builder lays out vertices. Dimensions never change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarGrid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl ScalarGrid {
    /// Create a zero-filled grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Create a grid by evaluating `f(x, y)` for every cell, x-major.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        x * self.height + y
    }

    /// Sample count along X.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sample count along Y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns `true` if both grids have the same dimensions.
    pub fn same_shape(&self, other: &ScalarGrid) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    /// Overwrite the value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// All samples in storage order.
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// Smallest and largest non-NaN sample, or `None` if there are none.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

impl Heightfield for ScalarGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn height_at(&self, x: usize, y: usize) -> f32 {
        self.get(x, y)
    }
}
