/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use netpbm_core::image::PixelBuffer;
use netpbm_core::pixel::PixelType;

use crate::draw::{set_pixel, Point};

/// Draw a line from `p1` to `p2`, both endpoints included
///
/// Uses Bresenham's integer algorithm, every pixel on the 8-connected
/// path between the points is set, a line whose endpoints coincide
/// sets a single pixel.
///
/// Only the steps of the walk that land inside the buffer are visited,
/// so lines reaching far outside of it cost no more than ones that don't.
pub fn draw_line<P: PixelType>(buffer: &mut PixelBuffer<P>, p1: Point, p2: Point, color: P) {
    let (width, height) = buffer.dimensions();
    let width = i64::try_from(width).unwrap_or(i64::MAX);
    let height = i64::try_from(height).unwrap_or(i64::MAX);

    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };

    // walk along the longer axis, the shorter one follows `walk.minor_at`
    let (major, minor) = if dx >= dy {
        (Axis::new(x1, sx, width), Axis::new(y1, sy, height))
    } else {
        (Axis::new(y1, sy, height), Axis::new(x1, sx, width))
    };
    let walk = Walk {
        steps: dx.max(dy),
        rise:  dx.min(dy)
    };

    let Some((first, last)) = major.visible_steps(0, walk.steps) else {
        return;
    };
    let Some((low, high)) = minor.visible_steps(0, walk.rise) else {
        return;
    };
    // minor steps only grow along the walk, search for the rows/columns in view
    let first = partition_point(first, last + 1, |k| walk.minor_at(k) < low);
    let last = partition_point(first, last + 1, |k| walk.minor_at(k) <= high) - 1;

    for k in first..=last {
        let (a, b) = (major.at(k), minor.at(walk.minor_at(k)));
        let (x, y) = if dx >= dy { (a, b) } else { (b, a) };
        // inside the buffer, so both fit an i32
        set_pixel(buffer, Point::new(x as i32, y as i32), color);
    }
}

/// One axis of a line, a start, a direction and the buffer extent along it
#[derive(Copy, Clone)]
struct Axis {
    start:  i64,
    sign:   i64,
    extent: i64
}

impl Axis {
    const fn new(start: i64, sign: i64, extent: i64) -> Axis {
        Axis { start, sign, extent }
    }

    const fn at(&self, steps: i64) -> i64 {
        self.start + steps * self.sign
    }

    /// Range of steps in `lo..=hi` whose position lies inside `0..extent`
    fn visible_steps(&self, lo: i64, hi: i64) -> Option<(i64, i64)> {
        let (first, last) = if self.sign > 0 {
            (-self.start, self.extent - 1 - self.start)
        } else {
            (self.start - (self.extent - 1), self.start)
        };
        let (first, last) = (first.max(lo), last.min(hi));

        (first <= last).then_some((first, last))
    }
}

/// Bresenham walk of `steps` along the major axis rising `rise` along the minor one
struct Walk {
    steps: i64,
    rise:  i64
}

impl Walk {
    /// Minor axis steps taken after `k` major steps
    fn minor_at(&self, k: i64) -> i64 {
        if self.steps == 0 {
            return 0;
        }
        // i128, 2 * k * rise overflows an i64 for lines across the i32 plane
        let (k, rise, steps) = (i128::from(k), i128::from(self.rise), i128::from(self.steps));
        ((2 * k * rise + steps - 1) / (2 * steps)) as i64
    }
}

/// First value in `lo..hi` for which `pred` is false, `hi` if there is none
///
/// `pred` must be true for a prefix of the range and false after it.
fn partition_point<F: Fn(i64) -> bool>(mut lo: i64, mut hi: i64, pred: F) -> i64 {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use netpbm_core::image::PixelBuffer;
    use nanorand::Rng;

    use crate::draw::{draw_line, Point};

    #[test]
    fn diagonal_line() {
        let mut buffer = PixelBuffer::new(3, 3, false).unwrap();
        draw_line(&mut buffer, Point::new(2, 2), Point::new(0, 0), true);
        assert_eq!(buffer.to_string(), "1 0 0\n0 1 0\n0 0 1\n");
    }

    #[test]
    fn single_point_line() {
        let mut buffer = PixelBuffer::new(2, 2, 0_u8).unwrap();
        draw_line(&mut buffer, Point::new(1, 0), Point::new(1, 0), 5);
        assert_eq!(buffer.as_slice(), &[0, 5, 0, 0]);
    }

    #[test]
    fn endpoints_are_set() {
        let mut rand = nanorand::WyRand::new_seed(99);

        for _ in 0..200 {
            let mut buffer = PixelBuffer::new(32, 32, 0_u8).unwrap();
            let mut point = || {
                let x = rand.generate_range(0_u32..32) as i32;
                let y = rand.generate_range(0_u32..32) as i32;
                Point::new(x, y)
            };
            let (p1, p2) = (point(), point());

            draw_line(&mut buffer, p1, p2, 255);

            assert_eq!(buffer.get(p1.x as usize, p1.y as usize), Some(255));
            assert_eq!(buffer.get(p2.x as usize, p2.y as usize), Some(255));
        }
    }

    /// Step by step Bresenham, every pixel of the path
    fn walk_line(p1: Point, p2: Point) -> Vec<(i32, i32)> {
        let (mut x, mut y) = (p1.x, p1.y);
        let dx = (p2.x - x).abs();
        let dy = (p2.y - y).abs();
        let sx = if x < p2.x { 1 } else { -1 };
        let sy = if y < p2.y { 1 } else { -1 };
        let mut err = dx - dy;
        let mut path = vec![];

        loop {
            path.push((x, y));
            if x == p2.x && y == p2.y {
                return path;
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

    #[test]
    fn clipping_keeps_the_path() {
        let mut rand = nanorand::WyRand::new_seed(7);

        for _ in 0..500 {
            let (width, height) = (
                rand.generate_range(1_usize..8),
                rand.generate_range(1_usize..8)
            );
            let mut coordinate = || rand.generate_range(0_u32..40) as i32 - 20;
            let p1 = Point::new(coordinate(), coordinate());
            let p2 = Point::new(coordinate(), coordinate());

            let mut expected = PixelBuffer::new(width, height, false).unwrap();
            for (x, y) in walk_line(p1, p2) {
                if (0..width as i32).contains(&x) && (0..height as i32).contains(&y) {
                    expected.set(x as usize, y as usize, true).unwrap();
                }
            }
            let mut buffer = PixelBuffer::new(width, height, false).unwrap();
            draw_line(&mut buffer, p1, p2, true);

            assert_eq!(buffer.as_slice(), expected.as_slice(), "{p1:?} to {p2:?}");
        }
    }

    #[test]
    fn clipped_line_is_partial() {
        let mut buffer = PixelBuffer::new(4, 1, false).unwrap();
        draw_line(&mut buffer, Point::new(-5, 0), Point::new(2, 0), true);
        assert_eq!(buffer.to_string(), "1 1 1 0\n");
    }

    #[test]
    fn lines_far_outside_the_buffer() {
        let mut buffer = PixelBuffer::new(4, 4, false).unwrap();

        draw_line(&mut buffer, Point::new(0, 0), Point::new(200_000_000, 0), true);
        draw_line(&mut buffer, Point::new(i32::MIN, 3), Point::new(i32::MAX, 3), true);
        draw_line(&mut buffer, Point::new(i32::MAX, i32::MIN), Point::new(i32::MAX, i32::MAX), true);

        assert_eq!(buffer.to_string(), "1 1 1 1\n0 0 0 0\n0 0 0 0\n1 1 1 1\n");
    }
}
