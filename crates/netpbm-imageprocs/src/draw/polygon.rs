/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use netpbm_core::image::PixelBuffer;
use netpbm_core::pixel::PixelType;

use crate::draw::{draw_line, fill_span, set_pixel, Point};

/// Draw the outline of a polygon, closing the last point back to the first
///
/// A single point sets one pixel, no points draw nothing.
pub fn draw_polygon<P: PixelType>(buffer: &mut PixelBuffer<P>, points: &[Point], color: P) {
    match points {
        [] => (),
        [point] => set_pixel(buffer, *point, color),
        [first, .., last] => {
            for edge in points.windows(2) {
                draw_line(buffer, edge[0], edge[1], color);
            }
            draw_line(buffer, *last, *first, color);
        }
    }
}

/// Fill a polygon with horizontal scan lines
///
/// Each row is filled from the leftmost to the rightmost point where
/// an edge crosses it, both inclusive, so self intersecting and concave
/// polygons have their notches filled. The outline is drawn as well.
pub fn draw_filled_polygon<P: PixelType>(buffer: &mut PixelBuffer<P>, points: &[Point], color: P) {
    draw_polygon(buffer, points, color);

    let Some(top) = points.iter().map(|p| p.y).min() else {
        return;
    };
    let bottom = points.iter().map(|p| p.y).max().unwrap_or(top);

    let (_, height) = buffer.dimensions();
    let last_row = i32::try_from(height).unwrap_or(i32::MAX) - 1;

    for y in top.max(0)..=bottom.min(last_row) {
        let mut span: Option<(f64, f64)> = None;

        for (index, a) in points.iter().enumerate() {
            let b = points[(index + 1) % points.len()];

            if y < a.y.min(b.y) || y > a.y.max(b.y) {
                continue;
            }
            let (x0, x1) = if a.y == b.y {
                (f64::from(a.x.min(b.x)), f64::from(a.x.max(b.x)))
            } else {
                let t = (f64::from(y) - f64::from(a.y)) / (f64::from(b.y) - f64::from(a.y));
                let x = f64::from(a.x) + t * (f64::from(b.x) - f64::from(a.x));
                (x, x)
            };
            span = Some(match span {
                Some((left, right)) => (left.min(x0), right.max(x1)),
                None => (x0, x1)
            });
        }
        if let Some((left, right)) = span {
            fill_span(buffer, y, left.round() as i32, right.round() as i32, color);
        }
    }
}
