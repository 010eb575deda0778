/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Rectangles, circles and triangles
use netpbm_core::image::PixelBuffer;
use netpbm_core::pixel::PixelType;

use crate::draw::{draw_line, fill_span, set_pixel, Point};

/// Draw the border of the `width` by `height` pixels starting at `origin`
///
/// A non positive width or height draws nothing.
pub fn draw_rectangle<P: PixelType>(
    buffer: &mut PixelBuffer<P>, origin: Point, width: i32, height: i32, color: P
) {
    if width <= 0 || height <= 0 {
        return;
    }
    let (_, buffer_height) = buffer.dimensions();
    let right = origin.x.saturating_add(width - 1);
    let bottom = origin.y.saturating_add(height - 1);

    fill_span(buffer, origin.y, origin.x, right, color);
    fill_span(buffer, bottom, origin.x, right, color);

    let last_row = i32::try_from(buffer_height).unwrap_or(i32::MAX) - 1;

    for y in origin.y.max(0)..=bottom.min(last_row) {
        set_pixel(buffer, Point::new(origin.x, y), color);
        set_pixel(buffer, Point::new(right, y), color);
    }
}

/// Fill the `width` by `height` pixels starting at `origin`, clamped to the buffer
///
/// A non positive width or height draws nothing.
pub fn draw_filled_rectangle<P: PixelType>(
    buffer: &mut PixelBuffer<P>, origin: Point, width: i32, height: i32, color: P
) {
    if width <= 0 || height <= 0 {
        return;
    }
    let (_, buffer_height) = buffer.dimensions();
    let right = origin.x.saturating_add(width - 1);
    let bottom = origin
        .y
        .saturating_add(height - 1)
        .min(i32::try_from(buffer_height).unwrap_or(i32::MAX) - 1);

    for y in origin.y.max(0)..=bottom {
        fill_span(buffer, y, origin.x, right, color);
    }
}

/// Draw a circle outline with the midpoint algorithm
///
/// A radius of zero sets the center, a negative radius draws nothing.
pub fn draw_circle<P: PixelType>(buffer: &mut PixelBuffer<P>, center: Point, radius: i32, color: P) {
    midpoint_circle(radius, |x, y| {
        for (dx, dy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            set_pixel(
                buffer,
                Point::new(center.x.saturating_add(dx), center.y.saturating_add(dy)),
                color
            );
        }
    });
}

/// Draw a filled circle
///
/// Covers exactly the outline of [`draw_circle`] and everything inside it.
pub fn draw_filled_circle<P: PixelType>(
    buffer: &mut PixelBuffer<P>, center: Point, radius: i32, color: P
) {
    midpoint_circle(radius, |x, y| {
        let (cx, cy) = (center.x, center.y);

        fill_span(buffer, cy.saturating_add(y), cx.saturating_sub(x), cx.saturating_add(x), color);
        fill_span(buffer, cy.saturating_sub(y), cx.saturating_sub(x), cx.saturating_add(x), color);
        fill_span(buffer, cy.saturating_add(x), cx.saturating_sub(y), cx.saturating_add(y), color);
        fill_span(buffer, cy.saturating_sub(x), cx.saturating_sub(y), cx.saturating_add(y), color);
    });
}

/// Walk the first octant of a circle of `radius`, calling `plot` with
/// offsets `(x, y)` from the center where `x >= y >= 0`
fn midpoint_circle<F: FnMut(i32, i32)>(radius: i32, mut plot: F) {
    if radius < 0 {
        return;
    }
    let (mut x, mut y) = (radius, 0);
    let mut err = 1 - radius;

    while x >= y {
        plot(x, y);
        y += 1;

        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draw the three edges of a triangle
pub fn draw_triangle<P: PixelType>(
    buffer: &mut PixelBuffer<P>, p1: Point, p2: Point, p3: Point, color: P
) {
    draw_line(buffer, p1, p2, color);
    draw_line(buffer, p2, p3, color);
    draw_line(buffer, p3, p1, color);
}

/// Fill a triangle with horizontal scan lines
///
/// Vertices are sorted by y, every row between the top and bottom vertex
/// is filled between the long edge and whichever short edge spans the row.
/// Horizontal edges contribute both of their endpoints.
pub fn draw_filled_triangle<P: PixelType>(
    buffer: &mut PixelBuffer<P>, p1: Point, p2: Point, p3: Point, color: P
) {
    let mut vertices = [p1, p2, p3];
    vertices.sort_by_key(|p| p.y);
    let [top, middle, bottom] = vertices;

    let (_, height) = buffer.dimensions();
    let last_row = i32::try_from(height).unwrap_or(i32::MAX) - 1;

    for y in top.y.max(0)..=bottom.y.min(last_row) {
        let (long_min, long_max) = edge_span(top, bottom, y);
        let (short_min, short_max) = if y < middle.y {
            edge_span(top, middle, y)
        } else {
            edge_span(middle, bottom, y)
        };
        let left = long_min.min(short_min).round() as i32;
        let right = long_max.max(short_max).round() as i32;

        fill_span(buffer, y, left, right, color);
    }
}

/// x range covered by the edge `a`-`b` on row `y`
fn edge_span(a: Point, b: Point, y: i32) -> (f64, f64) {
    if a.y == b.y {
        let (x0, x1) = (f64::from(a.x), f64::from(b.x));
        return (x0.min(x1), x0.max(x1));
    }
    let x = interpolate(a, b, y);
    (x, x)
}

/// x coordinate of the line through `a` and `b` at row `y`, `a.y` must differ from `b.y`
fn interpolate(a: Point, b: Point, y: i32) -> f64 {
    let slope = (f64::from(b.x) - f64::from(a.x)) / (f64::from(b.y) - f64::from(a.y));
    f64::from(a.x) + (f64::from(y) - f64::from(a.y)) * slope
}

#[cfg(test)]
mod tests {
    use netpbm_core::image::PixelBuffer;

    use crate::draw::{
        draw_circle, draw_filled_circle, draw_filled_rectangle, draw_filled_triangle,
        draw_rectangle, draw_triangle, Point
    };

    #[test]
    fn rectangle_outline() {
        let mut buffer = PixelBuffer::new(5, 4, false).unwrap();
        draw_rectangle(&mut buffer, Point::new(1, 0), 3, 3, true);
        assert_eq!(buffer.to_string(), "0 1 1 1 0\n0 1 0 1 0\n0 1 1 1 0\n0 0 0 0 0\n");
    }

    #[test]
    fn huge_rectangle_outline_is_clipped() {
        let mut buffer = PixelBuffer::new(4, 4, false).unwrap();
        draw_rectangle(&mut buffer, Point::new(0, 0), 100_000_000, 100_000_000, true);
        assert_eq!(buffer.to_string(), "1 1 1 1\n1 0 0 0\n1 0 0 0\n1 0 0 0\n");

        let mut buffer = PixelBuffer::new(4, 4, false).unwrap();
        draw_rectangle(&mut buffer, Point::new(-100_000_000, 1), i32::MAX, 2, true);
        assert_eq!(buffer.to_string(), "0 0 0 0\n1 1 1 1\n1 1 1 1\n0 0 0 0\n");
    }

    #[test]
    fn filled_rectangle_is_clamped() {
        let mut buffer = PixelBuffer::new(3, 3, 0_u8).unwrap();
        draw_filled_rectangle(&mut buffer, Point::new(1, -1), 100, 3, 1);
        assert_eq!(buffer.to_string(), "0 1 1\n0 1 1\n0 0 0\n");

        draw_filled_rectangle(&mut buffer, Point::new(0, 0), 0, 3, 7);
        draw_filled_rectangle(&mut buffer, Point::new(0, 0), 3, -2, 7);
        assert!(!buffer.as_slice().contains(&7));
    }

    #[test]
    fn circle_outline() {
        let mut buffer = PixelBuffer::new(5, 5, false).unwrap();
        draw_circle(&mut buffer, Point::new(2, 2), 2, true);
        assert_eq!(
            buffer.to_string(),
            "0 1 1 1 0\n1 0 0 0 1\n1 0 0 0 1\n1 0 0 0 1\n0 1 1 1 0\n"
        );

        let mut buffer = PixelBuffer::new(3, 3, false).unwrap();
        draw_circle(&mut buffer, Point::new(1, 1), -1, true);
        assert_eq!(buffer.to_string(), "0 0 0\n0 0 0\n0 0 0\n");
    }

    #[test]
    fn filled_circle_covers_outline() {
        let mut outline = PixelBuffer::new(21, 21, false).unwrap();
        let mut filled = outline.clone();

        draw_circle(&mut outline, Point::new(10, 10), 8, true);
        draw_filled_circle(&mut filled, Point::new(10, 10), 8, true);

        for (o, f) in outline.as_slice().iter().zip(filled.as_slice()) {
            assert!(!o || *f);
        }
        assert_eq!(filled.get(10, 10), Some(true));
        assert_eq!(filled.get(0, 0), Some(false));
    }

    #[test]
    fn filled_triangle() {
        let mut buffer = PixelBuffer::new(5, 3, false).unwrap();
        draw_filled_triangle(&mut buffer, Point::new(2, 0), Point::new(4, 2), Point::new(0, 2), true);
        assert_eq!(buffer.to_string(), "0 0 1 0 0\n0 1 1 1 0\n1 1 1 1 1\n");
    }

    #[test]
    fn flat_triangles_dont_divide_by_zero() {
        let mut buffer = PixelBuffer::new(4, 2, false).unwrap();
        draw_filled_triangle(&mut buffer, Point::new(0, 1), Point::new(3, 1), Point::new(1, 1), true);
        assert_eq!(buffer.to_string(), "0 0 0 0\n1 1 1 1\n");

        let mut outline = PixelBuffer::new(4, 2, false).unwrap();
        draw_triangle(&mut outline, Point::new(0, 1), Point::new(3, 1), Point::new(1, 1), true);
        assert_eq!(outline, buffer);
    }
}
