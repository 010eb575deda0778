/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Koch snowflake and Sierpinski triangle
use netpbm_core::image::PixelBuffer;
use netpbm_core::log::warn;
use netpbm_core::pixel::PixelType;

use crate::draw::{draw_filled_triangle, draw_line, Point};

/// Deepest recursion the fractals draw, deeper requests are clamped
pub const MAX_FRACTAL_DEPTH: u32 = 10;

fn clamp_depth(depth: u32) -> u32 {
    if depth > MAX_FRACTAL_DEPTH {
        warn!(
            "Fractal depth {} clamped to {}",
            depth, MAX_FRACTAL_DEPTH
        );
        return MAX_FRACTAL_DEPTH;
    }
    depth
}

/// Corners of the equilateral triangle with top edge from `start`
/// to `start + size` pointing down the image
fn base_triangle(start: Point, size: i32) -> (Point, Point, Point) {
    let height = (3.0_f64.sqrt() * f64::from(size) / 2.0) as i32;

    (
        start,
        Point::new(start.x.saturating_add(size), start.y),
        Point::new(start.x.saturating_add(size / 2), start.y.saturating_add(height))
    )
}

/// Draw a Koch snowflake
///
/// Starts from an equilateral triangle with a top edge of `size`
/// pixels at `start` and replaces every edge by four edges `depth` times,
/// a depth of zero draws the triangle.
pub fn draw_koch_snowflake<P: PixelType>(
    buffer: &mut PixelBuffer<P>, depth: u32, start: Point, size: i32, color: P
) {
    let depth = clamp_depth(depth);
    let (p1, p2, p3) = base_triangle(start, size);

    koch_edge(buffer, depth, p1, p2, color);
    koch_edge(buffer, depth, p2, p3, color);
    koch_edge(buffer, depth, p3, p1, color);
}

fn koch_edge<P: PixelType>(buffer: &mut PixelBuffer<P>, depth: u32, p1: Point, p2: Point, color: P) {
    if depth == 0 {
        draw_line(buffer, p1, p2, color);
        return;
    }
    let (dx, dy) = (
        i64::from(p2.x) - i64::from(p1.x),
        i64::from(p2.y) - i64::from(p1.y)
    );
    let third = |n: i64| (i64::from(p1.x) + n * dx / 3, i64::from(p1.y) + n * dy / 3);

    let (x1, y1) = third(1);
    let (x2, y2) = third(2);
    // rotate the first third around the second by 60 degrees to get the peak
    let (sin, cos) = (core::f64::consts::FRAC_PI_3).sin_cos();
    let (rx, ry) = ((x1 - x2) as f64, (y1 - y2) as f64);

    let peak = Point::new(
        (rx * cos - ry * sin) as i32 + x2 as i32,
        (rx * sin + ry * cos) as i32 + y2 as i32
    );
    let first_third = Point::new(x1 as i32, y1 as i32);
    let second_third = Point::new(x2 as i32, y2 as i32);

    koch_edge(buffer, depth - 1, p1, first_third, color);
    koch_edge(buffer, depth - 1, first_third, peak, color);
    koch_edge(buffer, depth - 1, peak, second_third, color);
    koch_edge(buffer, depth - 1, second_third, p2, color);
}

/// Draw a Sierpinski triangle
///
/// Starts from an equilateral triangle with a top edge of `width`
/// pixels at `start`, splits it into the three corner triangles at the
/// edge midpoints `depth` times and fills the remaining triangles.
pub fn draw_sierpinski_triangle<P: PixelType>(
    buffer: &mut PixelBuffer<P>, depth: u32, start: Point, width: i32, color: P
) {
    let depth = clamp_depth(depth);
    let (p1, p2, p3) = base_triangle(start, width);

    sierpinski(buffer, depth, p1, p2, p3, color);
}

fn sierpinski<P: PixelType>(
    buffer: &mut PixelBuffer<P>, depth: u32, p1: Point, p2: Point, p3: Point, color: P
) {
    if depth == 0 {
        draw_filled_triangle(buffer, p1, p2, p3, color);
        return;
    }
    let mid = |a: Point, b: Point| {
        Point::new(
            ((i64::from(a.x) + i64::from(b.x)) / 2) as i32,
            ((i64::from(a.y) + i64::from(b.y)) / 2) as i32
        )
    };
    let mid1 = mid(p1, p2);
    let mid2 = mid(p2, p3);
    let mid3 = mid(p3, p1);

    sierpinski(buffer, depth - 1, p3, mid2, mid3, color);
    sierpinski(buffer, depth - 1, mid2, mid1, p2, color);
    sierpinski(buffer, depth - 1, mid1, p1, mid3, color);
}
