/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! In-memory representation of a netpbm image
//!
//! An [`Image`] is a [`PixelData`] raster plus the header information
//! needed to write it back, the variant and the max value.
//!
//! The raster itself is a [`PixelBuffer`], a row major grid owning
//! exactly `width * height` pixels of one [`PixelType`].
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};
use core::slice::{ChunksExact, ChunksExactMut};

use crate::errors::ImageErrors;
use crate::pixel::{Pixel, PixelType, Rgb};
use crate::variant::{PixelKind, Variant};

/// A row major grid of pixels
///
/// The buffer always holds exactly `width * height` pixels with
/// both dimensions greater than zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer<P: PixelType> {
    width:  usize,
    height: usize,
    data:   Vec<P>
}

impl<P: PixelType> PixelBuffer<P> {
    /// Create a new buffer with every pixel set to `fill`
    ///
    /// # Errors
    /// If either dimension is zero
    pub fn new(width: usize, height: usize, fill: P) -> Result<PixelBuffer<P>, ImageErrors> {
        check_dimensions(width, height)?;
        let size = width
            .checked_mul(height)
            .ok_or(ImageErrors::GenericStatic("Image dimensions overflow"))?;

        Ok(PixelBuffer {
            width,
            height,
            data: vec![fill; size]
        })
    }
    /// Create a buffer from row major pixels
    ///
    /// # Errors
    /// If either dimension is zero or `data` doesn't hold
    /// exactly `width * height` pixels
    pub fn from_vec(width: usize, height: usize, data: Vec<P>) -> Result<PixelBuffer<P>, ImageErrors> {
        check_dimensions(width, height)?;
        let expected = width
            .checked_mul(height)
            .ok_or(ImageErrors::GenericStatic("Image dimensions overflow"))?;

        if expected != data.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        Ok(PixelBuffer {
            width,
            height,
            data
        })
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Return the pixel at `(x,y)` or `None` if it lies outside the buffer
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }
    /// Set the pixel at `(x,y)`
    ///
    /// # Errors
    /// If the coordinate lies outside the buffer
    pub fn set(&mut self, x: usize, y: usize, pixel: P) -> Result<(), ImageErrors> {
        let (width, height) = self.dimensions();
        match self.get_mut(x, y) {
            Some(value) => {
                *value = pixel;
                Ok(())
            }
            None => Err(ImageErrors::OutOfBounds(x, y, width, height))
        }
    }
    /// Set every pixel to `pixel`
    pub fn fill(&mut self, pixel: P) {
        self.data.fill(pixel);
    }
    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, P> {
        self.data.chunks_exact(self.width)
    }
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, P> {
        self.data.chunks_exact_mut(self.width)
    }
    /// Return all pixels in row major order
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }
    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }
    pub fn into_vec(self) -> Vec<P> {
        self.data
    }
    /// Create a buffer of the same dimensions by applying `function` to every pixel
    pub fn map<Q: PixelType, F: Fn(P) -> Q>(&self, function: F) -> PixelBuffer<Q> {
        PixelBuffer {
            width:  self.width,
            height: self.height,
            data:   self.data.iter().map(|x| function(*x)).collect()
        }
    }
}

/// Print one row per line with samples separated by spaces
impl<P: PixelType> Display for PixelBuffer<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in self.rows() {
            for (position, pixel) in row.iter().enumerate() {
                if position != 0 {
                    f.write_str(" ")?;
                }
                pixel.fmt_text(f)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), ImageErrors> {
    if width == 0 {
        return Err(ImageErrors::ZeroDimension("width"));
    }
    if height == 0 {
        return Err(ImageErrors::ZeroDimension("height"));
    }
    Ok(())
}

/// Pixels of an image, one buffer type per pixel kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PixelData {
    Bitmap(PixelBuffer<bool>),
    Graymap(PixelBuffer<u8>),
    Pixmap(PixelBuffer<Rgb>)
}

impl PixelData {
    pub const fn kind(&self) -> PixelKind {
        match self {
            PixelData::Bitmap(_) => PixelKind::Bitmap,
            PixelData::Graymap(_) => PixelKind::Graymap,
            PixelData::Pixmap(_) => PixelKind::Pixmap
        }
    }
    pub const fn dimensions(&self) -> (usize, usize) {
        match self {
            PixelData::Bitmap(buffer) => buffer.dimensions(),
            PixelData::Graymap(buffer) => buffer.dimensions(),
            PixelData::Pixmap(buffer) => buffer.dimensions()
        }
    }
}

impl Display for PixelData {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PixelData::Bitmap(buffer) => Display::fmt(buffer, f),
            PixelData::Graymap(buffer) => Display::fmt(buffer, f),
            PixelData::Pixmap(buffer) => Display::fmt(buffer, f)
        }
    }
}

impl From<PixelBuffer<bool>> for PixelData {
    fn from(value: PixelBuffer<bool>) -> Self {
        PixelData::Bitmap(value)
    }
}

impl From<PixelBuffer<u8>> for PixelData {
    fn from(value: PixelBuffer<u8>) -> Self {
        PixelData::Graymap(value)
    }
}

impl From<PixelBuffer<Rgb>> for PixelData {
    fn from(value: PixelBuffer<Rgb>) -> Self {
        PixelData::Pixmap(value)
    }
}

/// A decoded netpbm image
///
/// The image owns its pixels, the variant it will be written as and the
/// max value its samples are relative to.
///
/// Invariants upheld by every constructor and setter
/// - the variant stores the same pixel kind as the pixel data
/// - bitmaps have a max value of 1, other kinds a max value in `1..=255`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    variant:   Variant,
    max_value: u8,
    pixels:    PixelData
}

impl Image {
    /// Create a new image
    ///
    /// # Errors
    /// - If `variant` doesn't store the pixel kind of `pixels`
    /// - If `max_value` isn't valid for the pixel kind
    pub fn new(variant: Variant, max_value: u8, pixels: PixelData) -> Result<Image, ImageErrors> {
        let kind = pixels.kind();

        if variant.kind() != kind {
            return Err(ImageErrors::VariantMismatch(variant, kind));
        }
        check_max_value(kind, max_value)?;

        Ok(Image {
            variant,
            max_value,
            pixels
        })
    }
    /// Create a binary bitmap image
    pub fn from_bitmap(pixels: PixelBuffer<bool>) -> Image {
        Image {
            variant:   Variant::BitmapBinary,
            max_value: 1,
            pixels:    PixelData::Bitmap(pixels)
        }
    }
    /// Create a binary graymap image
    ///
    /// # Errors
    /// If `max_value` is zero
    pub fn from_graymap(pixels: PixelBuffer<u8>, max_value: u8) -> Result<Image, ImageErrors> {
        Image::new(Variant::GraymapBinary, max_value, PixelData::Graymap(pixels))
    }
    /// Create a binary pixmap image
    ///
    /// # Errors
    /// If `max_value` is zero
    pub fn from_pixmap(pixels: PixelBuffer<Rgb>, max_value: u8) -> Result<Image, ImageErrors> {
        Image::new(Variant::PixmapBinary, max_value, PixelData::Pixmap(pixels))
    }
    /// Create an image of `variant` with every pixel set to `fill`
    ///
    /// Bitmaps ignore `max_value` and use 1.
    pub fn fill_new(
        variant: Variant, width: usize, height: usize, max_value: u8, fill: Pixel
    ) -> Result<Image, ImageErrors> {
        let expected = variant.kind();

        let (pixels, max_value) = match (expected, fill) {
            (PixelKind::Bitmap, Pixel::Bit(value)) => {
                (PixelData::Bitmap(PixelBuffer::new(width, height, value)?), 1)
            }
            (PixelKind::Graymap, Pixel::Gray(value)) => (
                PixelData::Graymap(PixelBuffer::new(width, height, value)?),
                max_value
            ),
            (PixelKind::Pixmap, Pixel::Rgb(value)) => (
                PixelData::Pixmap(PixelBuffer::new(width, height, value)?),
                max_value
            ),
            (expected, found) => {
                return Err(ImageErrors::PixelKindMismatch(expected, found.kind()));
            }
        };
        Image::new(variant, max_value, pixels)
    }
    pub const fn variant(&self) -> Variant {
        self.variant
    }
    /// Change the variant the image is written as
    ///
    /// Only the encoding can change, text or binary, the pixel
    /// kind is fixed by the stored pixels.
    ///
    /// # Errors
    /// If `variant` stores a different pixel kind
    pub fn set_variant(&mut self, variant: Variant) -> Result<(), ImageErrors> {
        if variant.kind() != self.kind() {
            return Err(ImageErrors::VariantMismatch(variant, self.kind()));
        }
        self.variant = variant;
        Ok(())
    }
    pub const fn max_value(&self) -> u8 {
        self.max_value
    }
    /// Set the declared max value without touching samples
    ///
    /// To rescale samples to a new max value, use the
    /// image processing crate's rescale operation.
    ///
    /// # Errors
    /// If the value isn't valid for the pixel kind
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), ImageErrors> {
        check_max_value(self.kind(), max_value)?;
        self.max_value = max_value;
        Ok(())
    }
    pub const fn kind(&self) -> PixelKind {
        self.pixels.kind()
    }
    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        self.pixels.dimensions()
    }
    pub const fn pixels(&self) -> &PixelData {
        &self.pixels
    }
    pub fn pixels_mut(&mut self) -> &mut PixelData {
        &mut self.pixels
    }
    /// Replace the pixels of the image
    ///
    /// Dimensions may change, the pixel kind may not.
    ///
    /// # Errors
    /// If `pixels` is of a different kind
    pub fn set_pixels(&mut self, pixels: PixelData) -> Result<(), ImageErrors> {
        if pixels.kind() != self.kind() {
            return Err(ImageErrors::PixelKindMismatch(self.kind(), pixels.kind()));
        }
        self.pixels = pixels;
        Ok(())
    }
    pub fn into_pixels(self) -> PixelData {
        self.pixels
    }
    /// Return the pixel at `(x,y)`, or `None` if outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        match &self.pixels {
            PixelData::Bitmap(buffer) => buffer.get(x, y).map(Pixel::Bit),
            PixelData::Graymap(buffer) => buffer.get(x, y).map(Pixel::Gray),
            PixelData::Pixmap(buffer) => buffer.get(x, y).map(Pixel::Rgb)
        }
    }
    /// Set the pixel at `(x,y)`
    ///
    /// # Errors
    /// If the coordinate is outside the image or the
    /// pixel kind doesn't match the image
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), ImageErrors> {
        let expected = self.kind();

        match (&mut self.pixels, pixel) {
            (PixelData::Bitmap(buffer), Pixel::Bit(value)) => buffer.set(x, y, value),
            (PixelData::Graymap(buffer), Pixel::Gray(value)) => buffer.set(x, y, value),
            (PixelData::Pixmap(buffer), Pixel::Rgb(value)) => buffer.set(x, y, value),
            (_, found) => Err(ImageErrors::PixelKindMismatch(expected, found.kind()))
        }
    }
    /// Set every pixel to `pixel`
    ///
    /// # Errors
    /// If the pixel kind doesn't match the image
    pub fn fill(&mut self, pixel: Pixel) -> Result<(), ImageErrors> {
        let expected = self.kind();

        match (&mut self.pixels, pixel) {
            (PixelData::Bitmap(buffer), Pixel::Bit(value)) => buffer.fill(value),
            (PixelData::Graymap(buffer), Pixel::Gray(value)) => buffer.fill(value),
            (PixelData::Pixmap(buffer), Pixel::Rgb(value)) => buffer.fill(value),
            (_, found) => return Err(ImageErrors::PixelKindMismatch(expected, found.kind()))
        }
        Ok(())
    }
}

fn check_max_value(kind: PixelKind, max_value: u8) -> Result<(), ImageErrors> {
    let valid = match kind {
        PixelKind::Bitmap => max_value == 1,
        PixelKind::Graymap | PixelKind::Pixmap => max_value > 0
    };
    if !valid {
        return Err(ImageErrors::InvalidMaxValue(kind, u16::from(max_value)));
    }
    Ok(())
}
