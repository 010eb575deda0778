/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Rasterize shapes into an image
//!
//! Every routine draws through [`set_pixel`] or [`fill_span`], which
//! silently clip anything outside the image, so drawing never fails
//! on out of range geometry.
//!
//! The routines work on a [`PixelBuffer`] of any pixel type, the
//! [`Draw`] operation dispatches on the pixel kind of an [`Image`].
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::{Image, PixelBuffer, PixelData};
use netpbm_core::pixel::{Pixel, PixelType};
use netpbm_core::variant::PixelKind;

pub use crate::draw::fractals::{draw_koch_snowflake, draw_sierpinski_triangle, MAX_FRACTAL_DEPTH};
pub use crate::draw::line::draw_line;
pub use crate::draw::noise::{draw_perlin_noise, perlin_noise};
pub use crate::draw::polygon::{draw_filled_polygon, draw_polygon};
pub use crate::draw::shapes::{
    draw_circle, draw_filled_circle, draw_filled_rectangle, draw_filled_triangle, draw_rectangle,
    draw_triangle
};
use crate::traits::{Lerp, OperationsTrait};

mod fractals;
mod line;
mod noise;
mod polygon;
mod shapes;

/// A point on the drawing plane
///
/// Coordinates may be negative or beyond the image, such points are clipped
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Set the pixel at `point`, doing nothing if it lies outside the buffer
#[inline]
pub fn set_pixel<P: PixelType>(buffer: &mut PixelBuffer<P>, point: Point, color: P) {
    if point.x < 0 || point.y < 0 {
        return;
    }
    if let Some(pixel) = buffer.get_mut(point.x as usize, point.y as usize) {
        *pixel = color;
    }
}

/// Set pixels `x0..=x1` of row `y`, clamped to the buffer
pub fn fill_span<P: PixelType>(buffer: &mut PixelBuffer<P>, y: i32, x0: i32, x1: i32, color: P) {
    let (width, height) = buffer.dimensions();

    if y < 0 || y as usize >= height {
        return;
    }
    let (start, end) = (x0.min(x1).max(0), x0.max(x1));

    if end < 0 || start as usize >= width {
        return;
    }
    let end = (end as usize).min(width - 1);
    let offset = y as usize * width;

    buffer.as_mut_slice()[offset + start as usize..=offset + end].fill(color);
}

/// A shape to rasterize
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A line between two points, both inclusive
    Line(Point, Point),
    /// Outline of the `width` by `height` pixels starting at `origin`
    Rectangle {
        origin: Point,
        width:  i32,
        height: i32
    },
    /// The `width` by `height` pixels starting at `origin`
    FilledRectangle {
        origin: Point,
        width:  i32,
        height: i32
    },
    Circle {
        center: Point,
        radius: i32
    },
    FilledCircle {
        center: Point,
        radius: i32
    },
    Triangle(Point, Point, Point),
    FilledTriangle(Point, Point, Point),
    /// Closed outline through all points
    Polygon(Vec<Point>),
    FilledPolygon(Vec<Point>),
    /// A Koch snowflake over an equilateral triangle with a horizontal top edge at `start`
    KochSnowflake {
        depth: u32,
        start: Point,
        size:  i32
    },
    /// A Sierpinski triangle over an equilateral triangle with a horizontal top edge at `start`
    SierpinskiTriangle {
        depth: u32,
        start: Point,
        width: i32
    },
    /// Fill the whole image with noise blending the draw colour into `to`
    PerlinNoise { to: Pixel }
}

/// Draw a shape into an image
///
/// The colour must be of the image's pixel kind.
///
/// # Example
/// ```
/// use netpbm_core::image::{Image, PixelBuffer};
/// use netpbm_core::pixel::Pixel;
/// use netpbm_imageprocs::draw::{Draw, Point, Shape};
/// use netpbm_imageprocs::traits::OperationsTrait;
///
/// let mut image = Image::from_bitmap(PixelBuffer::new(4, 4, false).unwrap());
/// let square = Shape::FilledRectangle { origin: Point::new(1, 1), width: 2, height: 2 };
///
/// Draw::new(square, Pixel::Bit(true)).execute(&mut image).unwrap();
///
/// assert_eq!(image.pixels().to_string(), "0 0 0 0\n0 1 1 0\n0 1 1 0\n0 0 0 0\n");
/// ```
#[derive(Clone, Debug)]
pub struct Draw {
    shape: Shape,
    color: Pixel
}

impl Draw {
    #[must_use]
    pub fn new(shape: Shape, color: Pixel) -> Draw {
        Draw { shape, color }
    }
}

impl OperationsTrait for Draw {
    fn name(&self) -> &'static str {
        "Draw"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match image.pixels_mut() {
            PixelData::Bitmap(buffer) => draw_shape(buffer, &self.shape, self.color),
            PixelData::Graymap(buffer) => draw_shape(buffer, &self.shape, self.color),
            PixelData::Pixmap(buffer) => draw_shape(buffer, &self.shape, self.color)
        }
    }

    fn supported_kinds(&self) -> &'static [PixelKind] {
        &[PixelKind::Bitmap, PixelKind::Graymap, PixelKind::Pixmap]
    }
}

fn typed_color<P: PixelType>(color: Pixel) -> Result<P, ImageErrors> {
    P::from_pixel(color).ok_or(ImageErrors::PixelKindMismatch(P::KIND, color.kind()))
}

/// Draw `shape` into `buffer`
///
/// # Errors
/// If a colour is not of the buffer's pixel kind
pub fn draw_shape<P: Lerp>(
    buffer: &mut PixelBuffer<P>, shape: &Shape, color: Pixel
) -> Result<(), ImageErrors> {
    let color = typed_color::<P>(color)?;

    match shape {
        Shape::Line(p1, p2) => draw_line(buffer, *p1, *p2, color),
        Shape::Rectangle {
            origin,
            width,
            height
        } => draw_rectangle(buffer, *origin, *width, *height, color),
        Shape::FilledRectangle {
            origin,
            width,
            height
        } => draw_filled_rectangle(buffer, *origin, *width, *height, color),
        Shape::Circle { center, radius } => draw_circle(buffer, *center, *radius, color),
        Shape::FilledCircle { center, radius } => draw_filled_circle(buffer, *center, *radius, color),
        Shape::Triangle(p1, p2, p3) => draw_triangle(buffer, *p1, *p2, *p3, color),
        Shape::FilledTriangle(p1, p2, p3) => draw_filled_triangle(buffer, *p1, *p2, *p3, color),
        Shape::Polygon(points) => draw_polygon(buffer, points, color),
        Shape::FilledPolygon(points) => draw_filled_polygon(buffer, points, color),
        Shape::KochSnowflake { depth, start, size } => {
            draw_koch_snowflake(buffer, *depth, *start, *size, color);
        }
        Shape::SierpinskiTriangle {
            depth,
            start,
            width
        } => draw_sierpinski_triangle(buffer, *depth, *start, *width, color),
        Shape::PerlinNoise { to } => draw_perlin_noise(buffer, color, typed_color::<P>(*to)?)?
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use netpbm_core::errors::ImageErrors;
    use netpbm_core::image::{Image, PixelBuffer};
    use netpbm_core::pixel::{Pixel, Rgb};

    use crate::draw::{fill_span, set_pixel, Draw, Point, Shape};
    use crate::traits::OperationsTrait;

    #[test]
    fn out_of_bounds_is_clipped() {
        let mut buffer = PixelBuffer::new(3, 2, 0_u8).unwrap();

        set_pixel(&mut buffer, Point::new(-1, 0), 9);
        set_pixel(&mut buffer, Point::new(3, 0), 9);
        set_pixel(&mut buffer, Point::new(0, 2), 9);
        fill_span(&mut buffer, 5, 0, 2, 9);
        assert!(buffer.as_slice().iter().all(|x| *x == 0));

        fill_span(&mut buffer, 1, 10, -10, 4);
        assert_eq!(buffer.as_slice(), &[0, 0, 0, 4, 4, 4]);
    }

    #[test]
    fn draw_checks_color_kind() {
        let mut image = Image::from_bitmap(PixelBuffer::new(4, 4, false).unwrap());
        let line = Draw::new(Shape::Line(Point::new(0, 0), Point::new(3, 0)), Pixel::Gray(1));

        assert!(matches!(
            line.execute(&mut image),
            Err(ImageErrors::PixelKindMismatch(_, _))
        ));

        let noise = Draw::new(Shape::PerlinNoise { to: Pixel::Gray(1) }, Pixel::Bit(true));
        assert!(noise.execute(&mut image).is_err());
    }

    #[test]
    fn draw_on_pixmap() {
        let red = Rgb::new(255, 0, 0);
        let mut image = Image::from_pixmap(PixelBuffer::new(5, 5, Rgb::default()).unwrap(), 255).unwrap();

        Draw::new(Shape::Circle { center: Point::new(2, 2), radius: 0 }, Pixel::Rgb(red))
            .execute(&mut image)
            .unwrap();

        assert_eq!(image.get(2, 2), Some(Pixel::Rgb(red)));
        assert_eq!(image.get(2, 3), Some(Pixel::Rgb(Rgb::default())));
    }
}
