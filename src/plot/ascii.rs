//! ASCII shading preview of an NDVI grid.
//!
//! This is intentionally "dumb" (fixed character ramp, block averaging),
//! optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each output cell averages the finite pixels of its source block and maps the
//! result from `[-1, 1]` onto `RAMP` (darkest = lowest NDVI). Blocks with no
//! finite pixels render as `?`.

use crate::domain::SpectralGrid;
use crate::math::grid_stats;

const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];
const NO_DATA: char = '?';

/// Render `grid` down-sampled to at most `width × height` characters.
pub fn render_ascii_grid(grid: &SpectralGrid, width: usize, height: usize) -> String {
    let out_w = width.max(1).min(grid.width());
    let out_h = height.max(1).min(grid.height());
    let stats = grid_stats(grid);

    let mut out = String::new();
    out.push_str(&format!(
        "NDVI preview: {} -> {}x{} | range=[{:.3}, {:.3}]\n",
        grid.shape(),
        out_h,
        out_w,
        stats.min,
        stats.max
    ));

    for i in 0..out_h {
        let (r0, r1) = block_bounds(i, out_h, grid.height());
        let line: String = (0..out_w)
            .map(|j| {
                let (c0, c1) = block_bounds(j, out_w, grid.width());
                shade(block_mean(grid, r0..r1, c0..c1))
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Source index range covered by output cell `i` of `n` over `len` pixels.
fn block_bounds(i: usize, n: usize, len: usize) -> (usize, usize) {
    let start = i * len / n;
    let end = ((i + 1) * len / n).max(start + 1);
    (start, end)
}

fn block_mean(
    grid: &SpectralGrid,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for r in rows {
        for c in cols.clone() {
            if let Some(v) = grid.get(r, c).filter(|v| v.is_finite()) {
                sum += v;
                n += 1;
            }
        }
    }
    (n > 0).then(|| sum / n as f64)
}

fn shade(value: Option<f64>) -> char {
    let Some(v) = value else {
        return NO_DATA;
    };
    let u = ((v + 1.0) / 2.0).clamp(0.0, 1.0);
    RAMP[(u * (RAMP.len() - 1) as f64).round() as usize]
}
