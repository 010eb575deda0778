/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Convert between pixel kinds
//!
//! Conversions keep the encoding of the image, a binary pixmap
//! becomes a binary graymap, a text pixmap a text graymap.
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::{Image, PixelBuffer, PixelData};
use netpbm_core::pixel::Rgb;
use netpbm_core::variant::PixelKind;

use crate::traits::{Channels, OperationsTrait};

/// Convert a pixmap into a graymap
///
/// Each gray value is the integer average `(r + g + b) / 3`,
/// the max value is kept.
#[derive(Default, Copy, Clone)]
pub struct ConvertToGraymap;

impl ConvertToGraymap {
    #[must_use]
    pub fn new() -> ConvertToGraymap {
        Self
    }
}

impl OperationsTrait for ConvertToGraymap {
    fn name(&self) -> &'static str {
        "Convert to Graymap"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let max_value = image.max_value();

        let pixels = match image.pixels() {
            PixelData::Graymap(_) => return Ok(()),
            PixelData::Pixmap(buffer) => PixelData::Graymap(rgb_to_gray(buffer)),
            PixelData::Bitmap(_) => {
                return Err(ImageErrors::UnsupportedOperation(self.name(), PixelKind::Bitmap))
            }
        };
        replace_pixels(image, PixelKind::Graymap, max_value, pixels)
    }

    fn supported_kinds(&self) -> &'static [PixelKind] {
        &[PixelKind::Graymap, PixelKind::Pixmap]
    }
}

/// Convert a graymap or pixmap into a bitmap
///
/// A pixel is set (black) when its intensity is below half the
/// max value, `intensity < max_value / 2`.
#[derive(Default, Copy, Clone)]
pub struct ConvertToBitmap;

impl ConvertToBitmap {
    #[must_use]
    pub fn new() -> ConvertToBitmap {
        Self
    }
}

impl OperationsTrait for ConvertToBitmap {
    fn name(&self) -> &'static str {
        "Convert to Bitmap"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let threshold = image.max_value() / 2;

        let pixels = match image.pixels() {
            PixelData::Bitmap(_) => return Ok(()),
            PixelData::Graymap(buffer) => PixelData::Bitmap(to_bitmap(buffer, threshold)),
            PixelData::Pixmap(buffer) => PixelData::Bitmap(to_bitmap(buffer, threshold))
        };
        replace_pixels(image, PixelKind::Bitmap, 1, pixels)
    }

    fn supported_kinds(&self) -> &'static [PixelKind] {
        &[PixelKind::Bitmap, PixelKind::Graymap, PixelKind::Pixmap]
    }
}

/// Average the channels of every pixel
pub fn rgb_to_gray(buffer: &PixelBuffer<Rgb>) -> PixelBuffer<u8> {
    buffer.map(Rgb::average)
}

/// Threshold pixels into bits, a pixel is set when its intensity is below `threshold`
pub fn to_bitmap<T: Channels>(buffer: &PixelBuffer<T>, threshold: u8) -> PixelBuffer<bool> {
    buffer.map(|x| x.intensity() < threshold)
}

fn replace_pixels(
    image: &mut Image, kind: PixelKind, max_value: u8, pixels: PixelData
) -> Result<(), ImageErrors> {
    let variant = image.variant().with_kind(kind);
    *image = Image::new(variant, max_value, pixels)?;
    Ok(())
}
