/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pixel value types
//!
//! Pixels are plain values, a bitmap pixel is a `bool`, a graymap
//! pixel a `u8` and a pixmap pixel an [`Rgb`] triple.
//!
//! [`Pixel`] erases the difference for code that works on any image,
//! [`PixelType`] recovers it for code generic over the storage.
use core::fmt::{Display, Formatter};

use crate::variant::PixelKind;

/// An `R,G,B` triple with 8 bits per channel
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
    /// Integer average of the three channels
    pub const fn average(self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// A single pixel of any kind
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Pixel {
    Bit(bool),
    Gray(u8),
    Rgb(Rgb)
}

impl Pixel {
    pub const fn kind(self) -> PixelKind {
        match self {
            Pixel::Bit(_) => PixelKind::Bitmap,
            Pixel::Gray(_) => PixelKind::Graymap,
            Pixel::Rgb(_) => PixelKind::Pixmap
        }
    }
}

impl From<bool> for Pixel {
    fn from(value: bool) -> Self {
        Pixel::Bit(value)
    }
}

impl From<u8> for Pixel {
    fn from(value: u8) -> Self {
        Pixel::Gray(value)
    }
}

impl From<Rgb> for Pixel {
    fn from(value: Rgb) -> Self {
        Pixel::Rgb(value)
    }
}

/// Storage types usable as pixels of a [`PixelBuffer`](crate::image::PixelBuffer)
pub trait PixelType: Copy + Default + PartialEq + Send + Sync {
    /// The pixel kind this type stores
    const KIND: PixelKind;

    /// Write the pixel as the decimal tokens used by the text variants
    fn fmt_text(&self, f: &mut Formatter<'_>) -> core::fmt::Result;

    /// Wrap into the dynamic pixel type
    fn into_pixel(self) -> Pixel;
    /// Unwrap from the dynamic pixel type, `None` if the kinds differ
    fn from_pixel(pixel: Pixel) -> Option<Self>;
}

impl PixelType for bool {
    const KIND: PixelKind = PixelKind::Bitmap;

    fn fmt_text(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }

    fn into_pixel(self) -> Pixel {
        Pixel::Bit(self)
    }
    fn from_pixel(pixel: Pixel) -> Option<Self> {
        match pixel {
            Pixel::Bit(value) => Some(value),
            _ => None
        }
    }
}

impl PixelType for u8 {
    const KIND: PixelKind = PixelKind::Graymap;

    fn fmt_text(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }

    fn into_pixel(self) -> Pixel {
        Pixel::Gray(self)
    }
    fn from_pixel(pixel: Pixel) -> Option<Self> {
        match pixel {
            Pixel::Gray(value) => Some(value),
            _ => None
        }
    }
}

impl PixelType for Rgb {
    const KIND: PixelKind = PixelKind::Pixmap;

    fn fmt_text(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }

    fn into_pixel(self) -> Pixel {
        Pixel::Rgb(self)
    }
    fn from_pixel(pixel: Pixel) -> Option<Self> {
        match pixel {
            Pixel::Rgb(value) => Some(value),
            _ => None
        }
    }
}
