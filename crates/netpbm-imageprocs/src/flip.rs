/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip and flop: reflect pixels around an axis
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::{Image, PixelData};
use netpbm_core::variant::PixelKind;

use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipDirection {
    /// Reverse every row
    ///
    ///```text
    ///old image     new image
    /// ┌─────────┐   ┌─────────┐
    /// │a b c d e│   │e d c b a│
    /// │f g h i j│   │j i h g f│
    /// └─────────┘   └─────────┘
    ///```
    Horizontal,
    /// Reverse the order of rows
    ///
    ///```text
    ///old image     new image
    /// ┌─────────┐   ┌─────────┐
    /// │a b c d e│   │f g h i j│
    /// │f g h i j│   │a b c d e│
    /// └─────────┘   └─────────┘
    ///```
    Vertical
}

/// Flip an image along an axis
#[derive(Copy, Clone)]
pub struct Flip {
    direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(direction: FlipDirection) -> Flip {
        Self { direction }
    }
    /// Reverse every row
    #[must_use]
    pub fn horizontal() -> Flip {
        Flip::new(FlipDirection::Horizontal)
    }
    /// Reverse the row order
    #[must_use]
    pub fn vertical() -> Flip {
        Flip::new(FlipDirection::Vertical)
    }

    fn flip<T: Copy>(&self, in_out_image: &mut [T], width: usize) {
        match self.direction {
            FlipDirection::Horizontal => flop(in_out_image, width),
            FlipDirection::Vertical => vertical_flip(in_out_image, width)
        }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        match self.direction {
            FlipDirection::Horizontal => "Flip Horizontal",
            FlipDirection::Vertical => "Flip Vertical"
        }
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, _) = image.dimensions();

        match image.pixels_mut() {
            PixelData::Bitmap(buffer) => self.flip(buffer.as_mut_slice(), width),
            PixelData::Graymap(buffer) => self.flip(buffer.as_mut_slice(), width),
            PixelData::Pixmap(buffer) => self.flip(buffer.as_mut_slice(), width)
        }
        Ok(())
    }

    fn supported_kinds(&self) -> &'static [PixelKind] {
        &[PixelKind::Bitmap, PixelKind::Graymap, PixelKind::Pixmap]
    }
}

/// Reverse each row of an image in place
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        width_chunks.reverse();
    }
}

/// Reverse the row order of an image in place
///
/// ```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │f g h i j │
///│f g h i j│   │a b c d e │
///└─────────┘   └──────────┘
/// ```
pub fn vertical_flip<T: Copy>(in_out_image: &mut [T], width: usize) {
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );
    // a middle row of an odd height stays where it is
    let half = (in_out_image.len() / width / 2) * width;
    let (top, rest) = in_out_image.split_at_mut(half);
    let bottom_start = rest.len() - half;
    let bottom = &mut rest[bottom_start..];

    for (top_chunk, bottom_chunk) in top
        .chunks_exact_mut(width)
        .zip(bottom.chunks_exact_mut(width).rev())
    {
        top_chunk.swap_with_slice(bottom_chunk);
    }
}
