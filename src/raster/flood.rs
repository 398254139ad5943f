use std::collections::VecDeque;

use crate::foundation::core::{Raster, Rgba8Premul};

/// Recolor the 4-connected region of uniform color containing `(x, y)` with `target`.
///
/// Breadth-first; bounds and color are checked when a point is dequeued, so neighbors are
/// pushed without filtering. A start point outside the raster, or one already colored
/// `target`, leaves the raster untouched. Returns the number of recolored pixels.
pub fn flood_fill(raster: &mut Raster, x: i64, y: i64, target: Rgba8Premul) -> usize {
    let Some(start) = raster.pixel(x, y) else {
        return 0;
    };
    if start == target {
        return 0;
    }

    let mut filled = 0;
    let mut queue = VecDeque::from([(x, y)]);
    while let Some((px, py)) = queue.pop_front() {
        if raster.pixel(px, py) != Some(start) {
            continue;
        }
        raster.set_pixel(px, py, target);
        filled += 1;

        queue.push_back((px + 1, py));
        queue.push_back((px - 1, py));
        queue.push_back((px, py + 1));
        queue.push_back((px, py - 1));
    }
    filled
}

#[cfg(test)]
#[path = "../../tests/unit/raster/flood.rs"]
mod tests;
