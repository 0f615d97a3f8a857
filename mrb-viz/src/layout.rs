//! Geometry for the auxiliary charts: monthly bars and the population tree map.

/// Axis-aligned rectangle in chart coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

/// One bar of the monthly bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub rect: Rect,
    /// `None` for a missing value; such bars have zero height.
    pub value: Option<f64>,
}

/// Lay out `values` as equal-width bars filling `width` x `height`, scaled so
/// the largest value reaches the top. Negative values are drawn as zero.
pub fn bar_layout(values: &[Option<f64>], width: f64, height: f64, gap: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values
        .iter()
        .flatten()
        .copied()
        .fold(0.0_f64, f64::max);
    let slot = width / values.len() as f64;
    let bar_w = (slot - gap).max(0.0);

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let h = match value {
                Some(v) if max > 0.0 => v.max(0.0) / max * height,
                _ => 0.0,
            };
            Bar {
                index,
                rect: Rect::new(index as f64 * slot + gap / 2.0, height - h, bar_w, h),
                value: *value,
            }
        })
        .collect()
}

/// A tree map cell for the item at `index` of the input weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub index: usize,
    pub rect: Rect,
}

/// Squarified tree map: split `bounds` into tiles whose areas are
/// proportional to `weights`, keeping aspect ratios close to square.
///
/// Non-positive and non-finite weights get no tile.
pub fn squarify(weights: &[f64], bounds: Rect) -> Vec<Tile> {
    let mut items: Vec<(usize, f64)> = weights
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, w)| w.is_finite() && *w > 0.0)
        .collect();
    let total: f64 = items.iter().map(|(_, w)| w).sum();
    if items.is_empty() || bounds.area() <= 0.0 {
        return Vec::new();
    }

    let scale = bounds.area() / total;
    for item in items.iter_mut() {
        item.1 *= scale;
    }
    items.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut tiles = Vec::with_capacity(items.len());
    let mut remaining = bounds;
    let mut row: Vec<(usize, f64)> = Vec::new();

    for item in items {
        let side = remaining.w.min(remaining.h);
        if row.is_empty() {
            row.push(item);
            continue;
        }
        let current = worst_ratio(&row, side);
        row.push(item);
        if worst_ratio(&row, side) > current {
            row.pop();
            lay_row(&row, &mut remaining, &mut tiles);
            row.clear();
            row.push(item);
        }
    }
    if !row.is_empty() {
        lay_row(&row, &mut remaining, &mut tiles);
    }
    tiles
}

/// Worst aspect ratio of a row of areas laid along a side of length `side`.
fn worst_ratio(row: &[(usize, f64)], side: f64) -> f64 {
    let sum: f64 = row.iter().map(|(_, a)| a).sum();
    let (min, max) = row
        .iter()
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), (_, a)| (lo.min(*a), hi.max(*a)));
    let side2 = side * side;
    let sum2 = sum * sum;
    (side2 * max / sum2).max(sum2 / (side2 * min))
}

/// Place a finished row along the shorter side of `remaining` and shrink it.
fn lay_row(row: &[(usize, f64)], remaining: &mut Rect, tiles: &mut Vec<Tile>) {
    let sum: f64 = row.iter().map(|(_, a)| a).sum();
    if remaining.w >= remaining.h {
        // column on the left
        let col_w = if remaining.h > 0.0 { sum / remaining.h } else { 0.0 };
        let mut y = remaining.y;
        for (index, area) in row {
            let h = if col_w > 0.0 { area / col_w } else { 0.0 };
            tiles.push(Tile {
                index: *index,
                rect: Rect::new(remaining.x, y, col_w, h),
            });
            y += h;
        }
        remaining.x += col_w;
        remaining.w = (remaining.w - col_w).max(0.0);
    } else {
        // row along the top
        let row_h = if remaining.w > 0.0 { sum / remaining.w } else { 0.0 };
        let mut x = remaining.x;
        for (index, area) in row {
            let w = if row_h > 0.0 { area / row_h } else { 0.0 };
            tiles.push(Tile {
                index: *index,
                rect: Rect::new(x, remaining.y, w, row_h),
            });
            x += w;
        }
        remaining.y += row_h;
        remaining.h = (remaining.h - row_h).max(0.0);
    }
}
