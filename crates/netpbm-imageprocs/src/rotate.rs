/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Rotate an image a quarter turn clockwise
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::{Image, PixelBuffer, PixelData};
use netpbm_core::pixel::PixelType;
use netpbm_core::variant::PixelKind;

use crate::traits::OperationsTrait;

/// Rotate an image 90 degrees clockwise
///
/// Width and height of the image are swapped.
///
///```text
/// [1,2,3]    [7,4,1]
/// [4,5,6] -> [8,5,2]
/// [7,8,9]    [9,6,3]
///```
#[derive(Default, Copy, Clone)]
pub struct Rotate90;

impl Rotate90 {
    #[must_use]
    pub fn new() -> Rotate90 {
        Self
    }
}

impl OperationsTrait for Rotate90 {
    fn name(&self) -> &'static str {
        "Rotate 90"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let rotated = match image.pixels() {
            PixelData::Bitmap(buffer) => PixelData::Bitmap(rotate_buffer(buffer)?),
            PixelData::Graymap(buffer) => PixelData::Graymap(rotate_buffer(buffer)?),
            PixelData::Pixmap(buffer) => PixelData::Pixmap(rotate_buffer(buffer)?)
        };
        image.set_pixels(rotated)
    }

    fn supported_kinds(&self) -> &'static [PixelKind] {
        &[PixelKind::Bitmap, PixelKind::Graymap, PixelKind::Pixmap]
    }
}

fn rotate_buffer<P: PixelType>(buffer: &PixelBuffer<P>) -> Result<PixelBuffer<P>, ImageErrors> {
    let (width, height) = buffer.dimensions();
    let mut out = vec![P::default(); width * height];

    rotate_90(buffer.as_slice(), &mut out, width, height);

    PixelBuffer::from_vec(height, width, out)
}

/// Rotate `in_image` 90 degrees clockwise into `out_image`
///
/// `out_image` is `height` pixels wide and `width` pixels tall,
/// the pixel at `(x, y)` lands at `(height - 1 - y, x)`
///
/// # Panics
/// If either slice doesn't hold `width * height` pixels
pub fn rotate_90<T: Copy>(in_image: &[T], out_image: &mut [T], width: usize, height: usize) {
    assert_eq!(in_image.len(), width * height);
    assert_eq!(out_image.len(), width * height);

    for (y, row) in in_image.chunks_exact(width).enumerate() {
        let out_x = height - 1 - y;

        for (x, pixel) in row.iter().enumerate() {
            out_image[x * height + out_x] = *pixel;
        }
    }
}


#[cfg(feature = "benchmarks")]
#[cfg(test)]
mod benchmarks {
    extern crate test;

    use crate::rotate::rotate_90;

    #[bench]
    fn rotate_90_u8(b: &mut test::Bencher) {
        let width = 800;
        let height = 600;
        let c1 = vec![0_u8; width * height];
        let mut c2 = vec![0_u8; width * height];

        b.iter(|| {
            rotate_90(&c1, &mut c2, width, height);
        });
    }
}
