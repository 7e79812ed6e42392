//! Four-neighbour box smoothing.

use crate::grid::ScalarGrid;

/// One smoothing pass.
///
/// Every interior cell becomes the mean of its four axis neighbours in
/// `grid`; border cells are copied. The result is a new grid, so no cell ever
/// sees a neighbour already updated in the same pass.
pub fn smooth_once(grid: &ScalarGrid) -> ScalarGrid {
    let (width, height) = grid.dimensions();
    ScalarGrid::from_fn(width, height, |x, y| {
        let interior = x >= 1 && x + 1 < width && y >= 1 && y + 1 < height;
        if interior {
            (grid.get(x - 1, y) + grid.get(x + 1, y) + grid.get(x, y - 1) + grid.get(x, y + 1))
                / 4.0
        } else {
            grid.get(x, y)
        }
    })
}

/// Apply `iterations` passes of [`smooth_once`], each reading only the
/// previous pass's output. Zero iterations return `grid` untouched.
pub fn smooth(grid: ScalarGrid, iterations: u32) -> ScalarGrid {
    (0..iterations).fold(grid, |current, _| smooth_once(&current))
}
