/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Errors possible when decoding or encoding netpbm files
use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use netpbm_core::bytestream::ZByteIoError;
use netpbm_core::errors::ImageErrors;
use netpbm_core::variant::{PixelKind, Variant};

/// Why a text sample couldn't be used
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SampleError {
    /// The token isn't a decimal number, or a bitmap token isn't `0` or `1`
    NotANumber,
    /// The number doesn't fit in 8 bits
    TooLarge(u32),
    /// The number is greater than the declared max value (strict mode only)
    AboveMaxValue(u32, u8)
}

/// Possible errors that may occur during decoding
pub enum PnmDecodeErrors {
    /// The stream doesn't start with one of the six magic numbers
    InvalidMagic(String),
    /// A header field is missing or not a number
    InvalidHeader(String),
    /// A width or height of zero, `"width"` or `"height"`
    ZeroDimension(&'static str),
    /// The image is larger than the configured limit
    ///
    /// limit, found
    LargeDimensions(usize, usize),
    /// The declared max value is outside `1..=255`
    UnsupportedMaxValue(usize),
    /// The payload ended before a row was complete
    ShortPixelData {
        row:      usize,
        expected: usize,
        found:    usize
    },
    /// A text sample is unusable, `column` counts samples, not pixels
    InvalidSample {
        row:    usize,
        column: usize,
        reason: SampleError
    },
    IoErrors(ZByteIoError),
    ImageErrors(ImageErrors)
}

impl PnmDecodeErrors {
    /// Whether this error concerns the magic number or header
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMagic(_)
                | Self::InvalidHeader(_)
                | Self::ZeroDimension(_)
                | Self::LargeDimensions(..)
                | Self::UnsupportedMaxValue(_)
        )
    }
    /// Whether this error concerns the pixel payload
    pub const fn is_pixel_data_error(&self) -> bool {
        matches!(self, Self::ShortPixelData { .. } | Self::InvalidSample { .. })
    }
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagic(found) => {
                writeln!(
                    f,
                    "Invalid magic number {found:?}, expected one of P1, P2, P3, P4, P5 or P6"
                )
            }
            Self::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            Self::ZeroDimension(which) => {
                writeln!(f, "Invalid header, {which} must be greater than zero")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::UnsupportedMaxValue(value) => {
                writeln!(
                    f,
                    "Max value {value} is not supported, only values between 1 and 255 are"
                )
            }
            Self::ShortPixelData {
                row,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Unexpected end of file at row {row}, expected {expected} bytes, got {found}"
                )
            }
            Self::InvalidSample {
                row,
                column,
                reason
            } => match reason {
                SampleError::NotANumber => {
                    writeln!(f, "Invalid sample at row {row}, column {column}")
                }
                SampleError::TooLarge(value) => {
                    writeln!(
                        f,
                        "Sample {value} at row {row}, column {column} does not fit in 8 bits"
                    )
                }
                SampleError::AboveMaxValue(value, max) => {
                    writeln!(
                        f,
                        "Sample {value} at row {row}, column {column} is above max value {max}"
                    )
                }
            },
            Self::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
            Self::ImageErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PnmDecodeErrors {}

impl From<ZByteIoError> for PnmDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        PnmDecodeErrors::IoErrors(value)
    }
}

impl From<ImageErrors> for PnmDecodeErrors {
    fn from(value: ImageErrors) -> Self {
        PnmDecodeErrors::ImageErrors(value)
    }
}

/// Errors occurring during encoding
pub enum PnmEncodeErrors {
    /// A magic number that isn't one of the six variants
    UnknownVariant(String),
    /// The requested variant stores a different pixel kind than the image
    MismatchedVariant(Variant, PixelKind),
    IoErrors(ZByteIoError)
}

impl Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownVariant(magic) => {
                writeln!(f, "Unknown variant {magic:?}, cannot encode")
            }
            Self::MismatchedVariant(variant, kind) => {
                writeln!(f, "Variant {variant} cannot encode a {kind:?} image")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PnmEncodeErrors {}

impl From<ZByteIoError> for PnmEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        PnmEncodeErrors::IoErrors(value)
    }
}
