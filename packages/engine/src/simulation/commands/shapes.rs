/// Region an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Disc of radius `size / 2` around the cursor
    Brush { cx: i32, cy: i32, size: i32 },
    /// One-cell-wide Bresenham line, endpoints included
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    /// Filled rectangle; corners may come in any order
    Rect { x0: i32, y0: i32, x1: i32, y1: i32 },
    /// Filled disc
    Circle { cx: i32, cy: i32, radius: i32 },
}

impl Shape {
    /// Visit every cell of the shape that lies on a `width` x `height`
    /// grid, once each. Discs and rectangles are clipped before walking,
    /// so oversized shapes cost no more than the grid itself.
    pub fn for_each_cell(&self, width: u32, height: u32, mut visit: impl FnMut(i32, i32)) {
        match *self {
            Shape::Brush { cx, cy, size } => {
                for_each_in_disc(cx, cy, size.max(0) / 2, width, height, |cell| visit(cell.x, cell.y))
            }
            Shape::Circle { cx, cy, radius } => {
                for_each_in_disc(cx, cy, radius, width, height, |cell| visit(cell.x, cell.y))
            }
            Shape::Rect { x0, y0, x1, y1 } => {
                let (x_lo, x_hi) = clip(x0.min(x1) as i64, x0.max(x1) as i64, width);
                let (y_lo, y_hi) = clip(y0.min(y1) as i64, y0.max(y1) as i64, height);
                for y in y_lo..=y_hi {
                    for x in x_lo..=x_hi {
                        visit(x as i32, y as i32);
                    }
                }
            }
            Shape::Line { x0, y0, x1, y1 } => {
                let inside = |x: i64, y: i64| x >= 0 && y >= 0 && x < width as i64 && y < height as i64;
                let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
                let dx = (x1 - x0).abs();
                let dy = (y1 - y0).abs();
                let sx = if x0 < x1 { 1 } else { -1 };
                let sy = if y0 < y1 { 1 } else { -1 };
                let mut err = dx - dy;
                let (mut x, mut y) = (x0, y0);
                let mut entered = false;
                loop {
                    if inside(x, y) {
                        visit(x as i32, y as i32);
                        entered = true;
                    } else if entered {
                        // A segment crosses the grid in one run.
                        break;
                    }
                    if x == x1 && y == y1 {
                        break;
                    }
                    let e2 = 2 * err;
                    if e2 > -dy {
                        err -= dy;
                        x += sx;
                    }
                    if e2 < dx {
                        err += dx;
                        y += sy;
                    }
                }
            }
        }
    }
}

/// A disc cell on the grid with its offset from the centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscCell {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
    pub distance: f32,
}

/// Visit the on-grid cells within `radius` of `(cx, cy)`, row by row.
///
/// Only the overlap of the bounding box with the grid is walked and the
/// distance test runs in `i64`, so any `i32` centre and radius is safe.
pub fn for_each_in_disc(cx: i32, cy: i32, radius: i32, width: u32, height: u32, mut visit: impl FnMut(DiscCell)) {
    let r = radius.max(0) as i64;
    let (cx, cy) = (cx as i64, cy as i64);
    let (x_lo, x_hi) = clip(cx - r, cx + r, width);
    let (y_lo, y_hi) = clip(cy - r, cy + r, height);
    for y in y_lo..=y_hi {
        let dy = y - cy;
        for x in x_lo..=x_hi {
            let dx = x - cx;
            let d2 = dx * dx + dy * dy;
            if d2 > r * r {
                continue;
            }
            visit(DiscCell {
                x: x as i32,
                y: y as i32,
                dx: dx as i32,
                dy: dy as i32,
                distance: (d2 as f64).sqrt() as f32,
            });
        }
    }
}

/// Clamp `lo..=hi` to `0..extent`; an empty result has `lo > hi`.
fn clip(lo: i64, hi: i64, extent: u32) -> (i64, i64) {
    (lo.max(0), hi.min(extent as i64 - 1))
}
