/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Invert: swap dark and light pixels
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::{Image, PixelData};
use netpbm_core::variant::PixelKind;

use crate::traits::{Channels, OperationsTrait};

/// Invert an image
///
/// Bitmap pixels are toggled, graymap and pixmap channels
/// become `max_value - channel`.
#[derive(Default, Copy, Clone)]
pub struct Invert;

impl Invert {
    /// Create a new invert operation
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let max_value = image.max_value();

        match image.pixels_mut() {
            PixelData::Bitmap(buffer) => invert_bits(buffer.as_mut_slice()),
            PixelData::Graymap(buffer) => invert(buffer.as_mut_slice(), max_value),
            PixelData::Pixmap(buffer) => invert(buffer.as_mut_slice(), max_value)
        }
        Ok(())
    }

    fn supported_kinds(&self) -> &'static [PixelKind] {
        &[PixelKind::Bitmap, PixelKind::Graymap, PixelKind::Pixmap]
    }
}

/// Toggle every bit
pub fn invert_bits(in_out_image: &mut [bool]) {
    in_out_image.iter_mut().for_each(|x| *x = !*x);
}

///Invert pixels
///
/// The formula for inverting a channel is `channel = max_value - channel`,
/// channels above `max_value` become zero
pub fn invert<T: Channels>(in_out_image: &mut [T], max_value: u8) {
    in_out_image
        .iter_mut()
        .for_each(|x| *x = x.map_channels(|c| max_value.saturating_sub(c)));
}
