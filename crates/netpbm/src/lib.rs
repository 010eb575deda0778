/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A Portable Bitmap, Graymap and Pixmap decoder and encoder
//!
//! This crate reads and writes all six netpbm variants
//!
//! | Magic | Format  | Payload                                   |
//! |-------|---------|-------------------------------------------|
//! | `P1`  | bitmap  | ascii `0` / `1`                           |
//! | `P2`  | graymap | ascii decimal samples                     |
//! | `P3`  | pixmap  | ascii decimal `R G B` samples             |
//! | `P4`  | bitmap  | 8 pixels per byte, rows padded to a byte  |
//! | `P5`  | graymap | 1 byte per pixel                          |
//! | `P6`  | pixmap  | 3 bytes per pixel                         |
//!
//! Samples are limited to 8 bits, i.e max values up to 255.
//!
//! # Example
//! - Decode a binary bitmap and re-encode it as text
//!
//! ```
//! use netpbm::netpbm_core::bytestream::ZCursor;
//! use netpbm::netpbm_core::variant::Variant;
//!
//! let mut image = netpbm::decode(ZCursor::new(b"P4\n4 1\n\xa0")).unwrap();
//! image.set_variant(Variant::BitmapText).unwrap();
//!
//! let mut sink = vec![];
//! netpbm::encode(&image, &mut sink).unwrap();
//!
//! assert_eq!(sink, b"P1\n4 1\n1 0 1 0\n");
//! ```
//!
//! # Features
//!  - `std`: Enables file helpers and `std::io` readers and writers, on by default
//!  - `log`: Logs header information and lenient recoveries through the `log` crate
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use netpbm_core;

pub use crate::decoder::PnmDecoder;
pub use crate::encoder::PnmEncoder;
pub use crate::errors::{PnmDecodeErrors, PnmEncodeErrors, SampleError};
pub use crate::grammar::{FormatGrammar, HeaderField, PixelEncoding, GRAMMARS};

mod decoder;
mod encoder;
mod errors;
mod grammar;

use netpbm_core::bytestream::{ZByteReaderTrait, ZByteWriterTrait};
use netpbm_core::image::Image;
use netpbm_core::variant::Variant;

/// Decode a netpbm image from `source` with default options
pub fn decode<T: ZByteReaderTrait>(source: T) -> Result<Image, PnmDecodeErrors> {
    PnmDecoder::new(source).decode()
}

/// Encode `image` as its own variant into `sink`
///
/// Returns the number of bytes written
pub fn encode<T: ZByteWriterTrait>(image: &Image, sink: T) -> Result<usize, PnmEncodeErrors> {
    PnmEncoder::new(image).encode(sink)
}

/// Return true if `bytes` start with one of the six magic numbers
///
/// Leading whitespace and comments are not skipped, a file
/// written by an encoder always starts with its magic number.
pub fn probe_pnm(bytes: &[u8]) -> bool {
    match bytes {
        [b'P', _, rest @ ..] => {
            let magic_ok = Variant::from_magic(&bytes[..2]).is_some();
            let terminated = rest
                .first()
                .map_or(true, |x| x.is_ascii_whitespace() || *x == b'#');
            magic_ok && terminated
        }
        _ => false
    }
}

/// Decode the file at `path`
#[cfg(feature = "std")]
pub fn decode_file<P: AsRef<std::path::Path>>(path: P) -> Result<Image, PnmDecodeErrors> {
    let file = std::fs::File::open(path).map_err(netpbm_core::bytestream::ZByteIoError::from)?;
    decode(std::io::BufReader::new(file))
}

/// Encode `image` as its own variant into the file at `path`,
/// replacing it if it exists
#[cfg(feature = "std")]
pub fn encode_file<P: AsRef<std::path::Path>>(
    image: &Image, path: P
) -> Result<usize, PnmEncodeErrors> {
    let file =
        std::fs::File::create(path).map_err(netpbm_core::bytestream::ZByteIoError::from)?;
    let mut writer = std::io::BufWriter::new(file);
    encode(image, &mut writer)
}
