/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Errors raised when constructing or operating on images
use core::fmt::{Debug, Display, Formatter};

use crate::variant::{PixelKind, Variant};

/// Errors that may occur when building an image or
/// running an operation on one
pub enum ImageErrors {
    /// The number of pixels does not match `width * height`
    ///
    /// expected, found
    DimensionsMisMatch(usize, usize),
    /// A width or height of zero was requested where a
    /// positive value is required
    ZeroDimension(&'static str),
    /// A pixel coordinate outside of the image, `x`, `y`, `width`, `height`
    OutOfBounds(usize, usize, usize, usize),
    /// A max value that can't be used for the pixel kind
    InvalidMaxValue(PixelKind, u16),
    /// A pixel of one kind was used on an image of another kind
    ///
    /// expected, found
    PixelKindMismatch(PixelKind, PixelKind),
    /// A variant that doesn't store the image's pixel kind
    VariantMismatch(Variant, PixelKind),
    /// An operation isn't defined for the pixel kind
    UnsupportedOperation(&'static str, PixelKind),
    GenericStatic(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ImageErrors::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            ImageErrors::ZeroDimension(what) => {
                writeln!(f, "Invalid dimension, {what} must be greater than zero")
            }
            ImageErrors::OutOfBounds(x, y, width, height) => {
                writeln!(
                    f,
                    "Pixel ({x},{y}) is outside of an image with dimensions {width}x{height}"
                )
            }
            ImageErrors::InvalidMaxValue(kind, value) => {
                writeln!(f, "Max value {value} is not valid for a {kind:?} image")
            }
            ImageErrors::PixelKindMismatch(expected, found) => {
                writeln!(f, "Expected a {expected:?} pixel but found a {found:?} pixel")
            }
            ImageErrors::VariantMismatch(variant, kind) => {
                writeln!(f, "Variant {variant} cannot store {kind:?} pixels")
            }
            ImageErrors::UnsupportedOperation(operation, kind) => {
                writeln!(f, "Operation {operation} is not supported for {kind:?} images")
            }
            ImageErrors::GenericStatic(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ImageErrors {}

impl From<&'static str> for ImageErrors {
    fn from(value: &'static str) -> Self {
        ImageErrors::GenericStatic(value)
    }
}
