//! Implementation of the midpoint circle drawing algorithm
//! https://en.wikipedia.org/wiki/Midpoint_circle_algorithm

use crate::error::{ensure_non_negative, Result};
use crate::geometry::{point, Point};
use itertools::Itertools;

/// Computes all the points of a circle at the origin with a given radius
pub fn circle_points(radius: i32) -> Result<Vec<Point>> {
    let octet = circle_octet(radius)?;
    let points = circle_points_from_octet(&octet);

    log::trace!(
        "circle of radius {} has {} points ({} in octet)",
        radius,
        points.len(),
        octet.len()
    );
    Ok(points)
}

/// Mirrors an octet produced by [`circle_octet`] into the full circle
pub fn circle_points_from_octet(octet: &[Point]) -> Vec<Point> {
    octet
        .iter()
        .flat_map(|p| project_point_eight_ways(*p))
        .unique()
        .collect()
}

/// Gives the circle octet that lies in the 90° to 45° 8-slice, ordered by
/// increasing x and starting at `(0, radius)`.
pub fn circle_octet(radius: i32) -> Result<Vec<Point>> {
    ensure_non_negative("radius", radius)?;

    let mut octet = vec![point(0, radius)];
    let (mut x, mut y) = (0, radius);
    let mut decision = 1 - i64::from(radius);

    while x < y {
        x += 1;
        if decision < 0 {
            // midpoint inside the circle, stay on this row
            decision += 2 * i64::from(x) + 1;
        } else {
            y -= 1;
            decision += 2 * i64::from(x - y) + 1;
        }

        if x <= y {
            octet.push(point(x, y));
        }
    }

    Ok(octet)
}

/// Counts how many tiles sit on each row of an octet, given the y values of
/// the octet in the order they were produced.
///
/// For a radius of 6 the octet looks like the following, giving `[3, 1, 1]`:
/// ```text
/// xxx
///    x
///     x
/// ```
pub fn octet_row_runs(octet_ys: &[i32]) -> Vec<usize> {
    let mut runs = Vec::new();
    let Some((first, rest)) = octet_ys.split_first() else {
        return runs;
    };

    let mut previous = first;
    let mut count = 1;
    for y in rest {
        if y == previous {
            count += 1;
        } else {
            runs.push(count);
            count = 1;
        }
        previous = y;
    }
    runs.push(count);

    runs
}

/// Takes a point in the 90° to 45° slice and projects it to the other 8-slices
fn project_point_eight_ways(p: Point) -> [Point; 8] {
    debug_assert!(
        p.x >= 0 && p.y >= 0 && p.x <= p.y,
        "point must lie in the 90° to 45° slice of the xy-plane!"
    );
    let (x, y) = (p.x, p.y);

    [
        point(x, y),
        point(y, x),
        point(y, -x),
        point(x, -y),
        point(-x, -y),
        point(-y, -x),
        point(-y, x),
        point(-x, y),
    ]
}
