//! Clamped linear interpolation on tabulated grids.

/// Finds the interval of `grid` that contains `target`.
///
/// Returns the lower index `i` and the fractional position `r` of `target`
/// between `grid[i]` and `grid[i + 1]`. Targets outside the grid are clamped
/// to the first or last interval (`r = 0` or `r = 1`), and NaN clamps to the
/// start of the grid.
///
/// `grid` must be strictly increasing with at least two nodes.
pub fn bracket(grid: &[f64], target: f64) -> (usize, f64) {
    let last = grid.len() - 1;

    if !(target > grid[0]) {
        return (0, 0.0);
    }
    if target >= grid[last] {
        return (last - 1, 1.0);
    }

    // First node strictly greater than target, minus one
    let idx = grid.partition_point(|&node| node <= target) - 1;
    let rr = (target - grid[idx]) / (grid[idx + 1] - grid[idx]);
    (idx, rr)
}

/// Linear blend between `low` and `high`.
///
/// Returns `low` exactly when both ends are equal, and is monotonic in `rr`.
#[inline]
pub fn lerp(low: f64, high: f64, rr: f64) -> f64 {
    low + rr * (high - low)
}

/// Interpolates `values` tabulated on `grid` at `target`, clamped at both ends.
pub fn interpolate(grid: &[f64], values: &[f64], target: f64) -> f64 {
    let (idx, rr) = bracket(grid, target);
    lerp(values[idx], values[idx + 1], rr)
}

/// Checks that a grid can be used with [`bracket`].
pub(crate) fn check_grid(grid: &[f64]) -> Result<(), String> {
    if grid.len() < 2 {
        return Err(format!("needs at least 2 nodes, got {}", grid.len()));
    }
    if grid.iter().any(|node| !node.is_finite()) {
        return Err("contains non-finite nodes".to_string());
    }
    if grid.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err("nodes must be strictly increasing".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [f64; 4] = [1.0, 2.0, 4.0, 8.0];

    #[test]
    fn test_bracket_inside() {
        assert_eq!(bracket(&GRID, 3.0), (1, 0.5));
        assert_eq!(bracket(&GRID, 4.0), (2, 0.0));
        assert_eq!(bracket(&GRID, 7.0), (2, 0.75));
    }

    #[test]
    fn test_bracket_clamps() {
        assert_eq!(bracket(&GRID, -10.0), (0, 0.0));
        assert_eq!(bracket(&GRID, 1.0), (0, 0.0));
        assert_eq!(bracket(&GRID, 8.0), (2, 1.0));
        assert_eq!(bracket(&GRID, 1e30), (2, 1.0));
        assert_eq!(bracket(&GRID, f64::NAN), (0, 0.0));
    }

    #[test]
    fn test_interpolate() {
        let values = [10.0, 20.0, 40.0, 80.0];
        assert_eq!(interpolate(&GRID, &values, 3.0), 30.0);
        assert_eq!(interpolate(&GRID, &values, 0.0), 10.0);
        assert_eq!(interpolate(&GRID, &values, 100.0), 80.0);
    }

    #[test]
    fn test_check_grid() {
        assert!(check_grid(&GRID).is_ok());
        assert!(check_grid(&[1.0]).is_err());
        assert!(check_grid(&[1.0, 1.0]).is_err());
        assert!(check_grid(&[2.0, 1.0]).is_err());
        assert!(check_grid(&[1.0, f64::INFINITY]).is_err());
    }
}
