use super::{rect, Dimension, Rect};

/// Returns the part of `rect` that lies within a `bounds` sized area at the
/// origin, or `None` if nothing of it is visible.
pub fn clip_rect(rect_to_clip: Rect, bounds: Dimension) -> Option<Rect> {
    let x0 = i64::from(rect_to_clip.x).max(0);
    let y0 = i64::from(rect_to_clip.y).max(0);
    let x1 = (i64::from(rect_to_clip.x) + i64::from(rect_to_clip.w)).min(i64::from(bounds.width));
    let y1 = (i64::from(rect_to_clip.y) + i64::from(rect_to_clip.h)).min(i64::from(bounds.height));

    let horizontal_overlap = x0 < x1;
    let vertical_overlap = y0 < y1;

    if horizontal_overlap && vertical_overlap {
        Some(rect(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32))
    } else {
        None
    }
}
