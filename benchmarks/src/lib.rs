/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm_core::image::{Image, PixelBuffer};
use netpbm_core::pixel::Rgb;
use netpbm_core::variant::Variant;

/// Width and height of the images benchmarks run on
pub const BENCH_DIMENSIONS: (usize, usize) = (1920, 1080);

/// A pixmap with a colour gradient, the same on every call
pub fn sample_image() -> Image {
    let (width, height) = BENCH_DIMENSIONS;

    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| Rgb::new((x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8))
        })
        .collect();

    Image::from_pixmap(PixelBuffer::from_vec(width, height, pixels).unwrap(), 255).unwrap()
}

/// [`sample_image`] encoded as `variant`
///
/// Bitmap and graymap variants are thresholded and averaged versions
/// of the gradient.
pub fn sample_file(variant: Variant) -> Vec<u8> {
    let pixmap = sample_image();

    let gray = match pixmap.pixels() {
        netpbm_core::image::PixelData::Pixmap(buffer) => buffer.map(Rgb::average),
        _ => unreachable!()
    };
    let mut image = match variant.kind() {
        netpbm_core::variant::PixelKind::Pixmap => pixmap,
        netpbm_core::variant::PixelKind::Graymap => Image::from_graymap(gray, 255).unwrap(),
        netpbm_core::variant::PixelKind::Bitmap => Image::from_bitmap(gray.map(|x| x < 128))
    };
    image.set_variant(variant).unwrap();

    let mut sink = vec![];
    netpbm::encode(&image, &mut sink).unwrap();
    sink
}
