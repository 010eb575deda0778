/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits shared by the image operations
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::Image;
use netpbm_core::log::trace;
use netpbm_core::pixel::{PixelType, Rgb};
use netpbm_core::variant::PixelKind;

/// An operation that can be run on an image
///
/// Implementors provide [`execute_impl`](Self::execute_impl) and the pixel kinds
/// they support, callers use [`execute`](Self::execute) which rejects
/// unsupported kinds before the operation runs.
pub trait OperationsTrait {
    /// Name of the operation, used in errors and logs
    fn name(&self) -> &'static str;
    /// Run the operation, the image kind has already been checked
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;
    /// Pixel kinds this operation is defined for
    fn supported_kinds(&self) -> &'static [PixelKind];

    /// Run the operation on `image` in place
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedOperation`] if the image kind isn't supported
    /// - Whatever error the operation itself raises
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let kind = image.kind();

        if !self.supported_kinds().contains(&kind) {
            return Err(ImageErrors::UnsupportedOperation(self.name(), kind));
        }
        trace!("Running {} on a {:?} image", self.name(), kind);

        self.execute_impl(image)
    }
    /// Run the operation on a copy of `image`, leaving the original untouched
    ///
    /// # Errors
    /// See [`execute`](Self::execute)
    fn clone_and_execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut image = image.clone();
        self.execute(&mut image)?;
        Ok(image)
    }
}

/// Pixels made of 8 bit channels, graymap and pixmap pixels
pub trait Channels: PixelType {
    /// Number of channels in a pixel
    const COMPONENTS: usize;

    /// Apply `function` to every channel
    fn map_channels<F: FnMut(u8) -> u8>(self, function: F) -> Self;
    /// Return channels, unused trailing channels are zero
    fn to_channels(self) -> [u8; 3];
    /// Build a pixel from channels, unused trailing channels are ignored
    fn from_channels(channels: [u8; 3]) -> Self;
    /// Integer average of the channels
    fn intensity(self) -> u8;
}

impl Channels for u8 {
    const COMPONENTS: usize = 1;

    #[inline]
    fn map_channels<F: FnMut(u8) -> u8>(self, mut function: F) -> Self {
        function(self)
    }
    #[inline]
    fn to_channels(self) -> [u8; 3] {
        [self, 0, 0]
    }
    #[inline]
    fn from_channels(channels: [u8; 3]) -> Self {
        channels[0]
    }
    #[inline]
    fn intensity(self) -> u8 {
        self
    }
}

impl Channels for Rgb {
    const COMPONENTS: usize = 3;

    #[inline]
    fn map_channels<F: FnMut(u8) -> u8>(self, mut function: F) -> Self {
        Rgb::new(function(self.r), function(self.g), function(self.b))
    }
    #[inline]
    fn to_channels(self) -> [u8; 3] {
        self.to_array()
    }
    #[inline]
    fn from_channels(channels: [u8; 3]) -> Self {
        Rgb::from(channels)
    }
    #[inline]
    fn intensity(self) -> u8 {
        self.average()
    }
}

/// Linear interpolation between two pixels
pub trait Lerp: PixelType {
    /// Return `self` at `t = 0`, `other` at `t = 1`
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for bool {
    fn lerp(self, other: Self, t: f64) -> Self {
        if t >= 0.5 {
            other
        } else {
            self
        }
    }
}

#[inline]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    // float to int casts saturate, out of range t can't wrap
    (f64::from(a) * (1.0 - t) + f64::from(b) * t) as u8
}

impl Lerp for u8 {
    fn lerp(self, other: Self, t: f64) -> Self {
        lerp_channel(self, other, t)
    }
}

impl Lerp for Rgb {
    fn lerp(self, other: Self, t: f64) -> Self {
        Rgb::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t)
        )
    }
}
