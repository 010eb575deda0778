/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Rescale samples to a new max value
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::{Image, PixelData};
use netpbm_core::variant::PixelKind;

use crate::traits::{Channels, OperationsTrait};

/// Linearly rescale every channel from the image's max value
/// to a new max value
///
/// Each channel becomes `round(channel * new_max / old_max)`, the
/// image's max value is updated to `new_max`.
#[derive(Copy, Clone)]
pub struct RescaleMax {
    new_max: u8
}

impl RescaleMax {
    #[must_use]
    pub fn new(new_max: u8) -> RescaleMax {
        RescaleMax { new_max }
    }
}

impl OperationsTrait for RescaleMax {
    fn name(&self) -> &'static str {
        "Rescale Max"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.new_max == 0 {
            return Err(ImageErrors::InvalidMaxValue(image.kind(), 0));
        }
        let old_max = image.max_value();
        let new_max = self.new_max;

        match image.pixels_mut() {
            PixelData::Graymap(buffer) => rescale(buffer.as_mut_slice(), old_max, new_max),
            PixelData::Pixmap(buffer) => rescale(buffer.as_mut_slice(), old_max, new_max),
            PixelData::Bitmap(_) => {
                return Err(ImageErrors::UnsupportedOperation(self.name(), PixelKind::Bitmap))
            }
        }
        image.set_max_value(new_max)
    }

    fn supported_kinds(&self) -> &'static [PixelKind] {
        &[PixelKind::Graymap, PixelKind::Pixmap]
    }
}

/// Rescale channels from `old_max` to `new_max`, rounding half up
///
/// Channels above `old_max` are treated as `old_max`.
///
/// # Panics
/// If `old_max` is zero
pub fn rescale<T: Channels>(in_out_image: &mut [T], old_max: u8, new_max: u8) {
    assert_ne!(old_max, 0, "Old max value cannot be zero");

    let old = u32::from(old_max);
    let new = u32::from(new_max);
    // (v * new + old / 2) / old, doubled to keep odd max values exact
    let mut table = [0_u8; 256];

    for (value, entry) in table.iter_mut().enumerate() {
        let value = (value as u32).min(old);
        *entry = ((value * new * 2 + old) / (2 * old)) as u8;
    }
    in_out_image
        .iter_mut()
        .for_each(|x| *x = x.map_channels(|c| table[usize::from(c)]));
}
