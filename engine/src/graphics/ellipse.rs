//! Midpoint ellipse drawing inside an axis-aligned bounding rectangle.
//!
//! Each step of the main loop yields the four reflections of the current
//! boundary position, so the result already covers every quadrant. A second
//! loop closes the caps of thin ellipses where the main loop runs out of
//! columns before reaching the top and bottom rows.

use crate::error::{ensure_non_negative, Error, Result};
use crate::geometry::{point, Point};
use itertools::Itertools;

/// Largest width or height, in tiles, an ellipse can have. The error terms
/// grow with the cube of the size and must fit in an `i64`.
pub const MAX_ELLIPSE_SIZE: i32 = 1 << 18;

/// Computes the points of the ellipse inscribed in the rectangle with
/// `(x0, y0)` as its lower left and `(x1, y1)` as its upper right corner.
///
/// The rectangle must be non-empty, i.e. `x0 < x1` and `y0 < y1`, and at
/// most [`MAX_ELLIPSE_SIZE`] tiles along either side.
pub fn ellipse_quadrant(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Vec<Point>> {
    if x0 >= x1 || y0 >= y1 {
        return Err(Error::InvalidArgument(format!(
            "ellipse rectangle ({}, {}) to ({}, {}) must have x0 < x1 and y0 < y1",
            x0, y0, x1, y1
        )));
    }
    ensure_within_limit("width", i64::from(x1) - i64::from(x0))?;
    ensure_within_limit("height", i64::from(y1) - i64::from(y0))?;

    Ok(trace_ellipse(x0, y0, x1, y1))
}

/// Computes the points of an ellipse of the given size, with its bounding
/// rectangle's lower left corner at the origin. Both sizes must be between
/// 0 and [`MAX_ELLIPSE_SIZE`].
pub fn ellipse_points(height: i32, width: i32) -> Result<Vec<Point>> {
    ensure_non_negative("height", height)?;
    ensure_non_negative("width", width)?;
    ensure_within_limit("height", i64::from(height))?;
    ensure_within_limit("width", i64::from(width))?;

    let points = trace_ellipse(0, 0, width, height)
        .into_iter()
        .unique()
        .collect::<Vec<Point>>();

    log::trace!(
        "ellipse of size {}x{} has {} points",
        width,
        height,
        points.len()
    );
    Ok(points)
}

fn ensure_within_limit(name: &str, size: i64) -> Result<()> {
    if size > i64::from(MAX_ELLIPSE_SIZE) {
        return Err(Error::InvalidArgument(format!(
            "ellipse {} {} is larger than {}",
            name, size, MAX_ELLIPSE_SIZE
        )));
    }
    Ok(())
}

/// Runs the two error term midpoint ellipse algorithm. Expects
/// `x0 <= x1`, `y0 <= y1` and both sides within [`MAX_ELLIPSE_SIZE`].
fn trace_ellipse(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let (mut x0, mut x1) = (i64::from(x0), i64::from(x1));
    let (mut y0, mut y1) = (i64::from(y0), i64::from(y1));

    let a = (x1 - x0).abs();
    let b = (y1 - y0).abs();
    let odd_height = b & 1;

    let mut dx = 4 * (1 - a) * b * b;
    let mut dy = 4 * (odd_height + 1) * a * a;
    let mut err = dx + dy + odd_height * a * a;

    // start on the middle row(s)
    y0 += (b + 1) / 2;
    y1 = y0 - odd_height;

    let step_x = 8 * b * b;
    let step_y = 8 * a * a;

    let mut ellipse = Vec::new();
    loop {
        ellipse.extend([
            tile(x1, y0),
            tile(x0, y0),
            tile(x0, y1),
            tile(x1, y1),
        ]);

        let e2 = 2 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += step_y;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += step_x;
            err += dx;
        }

        if x0 > x1 {
            break;
        }
    }

    // flat ellipses stop before reaching the tip
    while y0 - y1 < b {
        ellipse.extend([tile(x0 - 1, y0), tile(x1 + 1, y0)]);
        y0 += 1;
        ellipse.extend([tile(x0 - 1, y1), tile(x1 + 1, y1)]);
        y1 -= 1;
    }

    ellipse
}

/// The traced coordinates never leave the input rectangle, so they fit the
/// `i32` corners they started from.
fn tile(x: i64, y: i64) -> Point {
    point(x as i32, y as i32)
}
