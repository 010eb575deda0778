/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use netpbm_core::bytestream::{ZByteIoError, ZByteReaderTrait, ZReader};
use netpbm_core::image::{Image, PixelBuffer, PixelData};
use netpbm_core::log::{info, trace, warn};
use netpbm_core::options::DecoderOptions;
use netpbm_core::pixel::Rgb;
use netpbm_core::variant::{PixelKind, Variant};

use crate::errors::{PnmDecodeErrors, SampleError};
use crate::grammar::{FormatGrammar, HeaderField, PixelEncoding};

/// An instance of a netpbm decoder
///
/// The decoder can decode all six variants, `P1` to `P6`, with
/// max values up to 255.
///
/// # Example
/// ```
/// use netpbm::netpbm_core::bytestream::ZCursor;
/// use netpbm::PnmDecoder;
///
/// let mut decoder = PnmDecoder::new(ZCursor::new(b"P2\n2 1\n15\n0 15\n"));
/// let image = decoder.decode().unwrap();
///
/// assert_eq!(image.dimensions(), (2, 1));
/// assert_eq!(image.max_value(), 15);
/// ```
pub struct PnmDecoder<T: ZByteReaderTrait> {
    width:           usize,
    height:          usize,
    max_value:       u8,
    grammar:         Option<&'static FormatGrammar>,
    decoded_headers: bool,
    reader:          ZReader<T>,
    options:         DecoderOptions,
    warned_max:      bool
}

impl<T: ZByteReaderTrait> PnmDecoder<T> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: netpbm encoded bytes
    ///
    /// # Example
    /// ```
    /// use netpbm::netpbm_core::bytestream::ZCursor;
    /// use netpbm::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(ZCursor::new(b"NOT VALID PNM"));
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PnmDecoder<T> {
        PnmDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder with the specified options
    ///
    /// # Arguments
    /// - data: netpbm encoded bytes
    /// - options: Modified options for the decoder
    ///
    /// # Example
    /// ```
    /// use netpbm::netpbm_core::bytestream::ZCursor;
    /// use netpbm::netpbm_core::options::DecoderOptions;
    /// use netpbm::PnmDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PnmDecoder::new_with_options(ZCursor::new(b"P1 2 1 0 1"), options);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> PnmDecoder<T> {
        PnmDecoder {
            width: 0,
            height: 0,
            max_value: 1,
            grammar: None,
            decoded_headers: false,
            reader: ZReader::new(data),
            options,
            warned_max: false
        }
    }

    /// Read the magic number and header fields, storing them
    /// in internal state
    ///
    /// This is called by [`decode`](Self::decode) if needed, calling it
    /// directly allows inspecting an image without decoding pixels.
    pub fn decode_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let grammar = self.read_magic()?;

        for field in grammar.header {
            match field {
                HeaderField::Width => {
                    self.width = self.read_dimension("width", self.options.max_width())?;
                }
                HeaderField::Height => {
                    self.height = self.read_dimension("height", self.options.max_height())?;
                }
                HeaderField::MaxValue => {
                    let value = self.read_header_integer("max value")?;

                    if value == 0 || value > 255 {
                        return Err(PnmDecodeErrors::UnsupportedMaxValue(value));
                    }
                    self.max_value = value as u8;
                }
            }
        }
        if grammar.is_binary() {
            self.skip_header_terminator()?;
        }

        info!("Variant: {}", grammar.variant);
        info!("Width: {}, height: {}", self.width, self.height);
        info!("Max value: {}", self.max_value);

        self.grammar = Some(grammar);
        self.decoded_headers = true;

        Ok(())
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }
    /// Return the variant or none if headers aren't decoded
    pub fn variant(&self) -> Option<Variant> {
        self.grammar.map(|grammar| grammar.variant)
    }
    /// Return the declared max value or none if headers aren't decoded
    ///
    /// Bitmaps report a max value of 1
    pub const fn max_value(&self) -> Option<u8> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode a netpbm file returning the image
    ///
    /// No partial image is returned on failure.
    pub fn decode(&mut self) -> Result<Image, PnmDecodeErrors> {
        self.decode_headers()?;

        let grammar = self
            .grammar
            .ok_or_else(|| PnmDecodeErrors::InvalidHeader("headers not decoded".into()))?;

        let pixels = match grammar.encoding {
            PixelEncoding::PackedBits => PixelData::Bitmap(self.decode_packed_bits(grammar)?),
            PixelEncoding::AsciiBits => PixelData::Bitmap(self.decode_ascii_bits()?),
            PixelEncoding::Bytes => {
                let samples = self.decode_bytes(grammar)?;
                self.samples_to_pixels(grammar.variant.kind(), samples)?
            }
            PixelEncoding::AsciiDecimal => {
                let samples = self.decode_ascii_decimal(grammar)?;
                self.samples_to_pixels(grammar.variant.kind(), samples)?
            }
        };
        Ok(Image::new(grammar.variant, self.max_value, pixels)?)
    }

    fn read_magic(&mut self) -> Result<&'static FormatGrammar, PnmDecodeErrors> {
        skip_spaces(&mut self.reader)?;

        let token = read_token(&mut self.reader, 8)?;

        match FormatGrammar::from_magic(&token) {
            Some(grammar) => Ok(grammar),
            None => Err(PnmDecodeErrors::InvalidMagic(
                String::from_utf8_lossy(&token).into()
            ))
        }
    }

    fn read_dimension(&mut self, name: &'static str, limit: usize) -> Result<usize, PnmDecodeErrors> {
        let value = self.read_header_integer(name)?;

        if value == 0 {
            return Err(PnmDecodeErrors::ZeroDimension(name));
        }
        if value > limit {
            return Err(PnmDecodeErrors::LargeDimensions(limit, value));
        }
        Ok(value)
    }

    fn read_header_integer(&mut self, name: &'static str) -> Result<usize, PnmDecodeErrors> {
        skip_spaces(&mut self.reader)?;

        let token = read_token(&mut self.reader, 24)?;

        if token.is_empty() {
            let msg = format!("expected {name} but the stream ended");
            return Err(PnmDecodeErrors::InvalidHeader(msg));
        }
        parse_decimal(&token).ok_or_else(|| {
            let msg = format!(
                "expected {name} but found '{}'",
                String::from_utf8_lossy(&token)
            );
            PnmDecodeErrors::InvalidHeader(msg)
        })
    }

    /// Binary payloads start right after a single whitespace byte, a
    /// `\r\n` pair counts as one
    fn skip_header_terminator(&mut self) -> Result<(), PnmDecodeErrors> {
        match self.reader.peek_u8()? {
            Some(byte) if byte.is_ascii_whitespace() => {
                self.reader.skip(1)?;

                if byte == b'\r' && self.reader.peek_u8()? == Some(b'\n') {
                    self.reader.skip(1)?;
                }
                Ok(())
            }
            // an empty payload is reported when reading rows
            None => Ok(()),
            Some(byte) => {
                let msg = format!(
                    "expected whitespace after header but found '{}'",
                    byte as char
                );
                Err(PnmDecodeErrors::InvalidHeader(msg))
            }
        }
    }

    fn num_samples(&self, grammar: &FormatGrammar) -> Result<usize, PnmDecodeErrors> {
        self.width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(grammar.samples_per_pixel()))
            .ok_or(PnmDecodeErrors::LargeDimensions(usize::MAX, self.width))
    }

    fn decode_packed_bits(
        &mut self, grammar: &FormatGrammar
    ) -> Result<PixelBuffer<bool>, PnmDecodeErrors> {
        let row_bytes = grammar.row_bytes(self.width);
        let mut row = vec![0_u8; row_bytes];
        let mut pixels = Vec::with_capacity(self.num_samples(grammar)?);

        trace!("Packed payload: {} bytes per row", row_bytes);

        for y in 0..self.height {
            self.read_row(y, &mut row)?;
            // padding bits in the last byte are ignored
            pixels.extend((0..self.width).map(|x| (row[x / 8] >> (7 - (x % 8))) & 1 == 1));
        }
        Ok(PixelBuffer::from_vec(self.width, self.height, pixels)?)
    }

    fn decode_bytes(&mut self, grammar: &FormatGrammar) -> Result<Vec<u8>, PnmDecodeErrors> {
        // checked first, every row fits inside the total
        let mut samples = vec![0_u8; self.num_samples(grammar)?];
        let row_bytes = grammar.row_bytes(self.width);

        trace!("Byte payload: {} bytes per row", row_bytes);

        for (y, row) in samples.chunks_exact_mut(row_bytes).enumerate() {
            self.read_row(y, row)?;

            for (x, sample) in row.iter().enumerate() {
                self.check_max_value(u32::from(*sample), y, x)?;
            }
        }
        Ok(samples)
    }

    fn read_row(&mut self, y: usize, row: &mut [u8]) -> Result<(), PnmDecodeErrors> {
        let found = self.reader.read_up_to(row)?;

        if found != row.len() {
            return Err(PnmDecodeErrors::ShortPixelData {
                row: y,
                expected: row.len(),
                found
            });
        }
        Ok(())
    }

    fn decode_ascii_bits(&mut self) -> Result<PixelBuffer<bool>, PnmDecodeErrors> {
        let mut pixels = Vec::with_capacity(self.width.saturating_mul(self.height));

        for y in 0..self.height {
            for x in 0..self.width {
                skip_spaces(&mut self.reader)?;

                // digits may follow each other without whitespace
                let bit = match self.reader.peek_u8()? {
                    Some(b'0') => false,
                    Some(b'1') => true,
                    Some(_) => {
                        return Err(PnmDecodeErrors::InvalidSample {
                            row:    y,
                            column: x,
                            reason: SampleError::NotANumber
                        });
                    }
                    None => {
                        return Err(PnmDecodeErrors::ShortPixelData {
                            row:      y,
                            expected: self.width,
                            found:    x
                        });
                    }
                };
                self.reader.skip(1)?;
                pixels.push(bit);
            }
        }
        Ok(PixelBuffer::from_vec(self.width, self.height, pixels)?)
    }

    fn decode_ascii_decimal(&mut self, grammar: &FormatGrammar) -> Result<Vec<u8>, PnmDecodeErrors> {
        let mut samples = Vec::with_capacity(self.num_samples(grammar)?);
        let per_row = self.width * grammar.samples_per_pixel();

        for y in 0..self.height {
            for x in 0..per_row {
                skip_spaces(&mut self.reader)?;

                let token = read_token(&mut self.reader, 16)?;

                if token.is_empty() {
                    return Err(PnmDecodeErrors::ShortPixelData {
                        row:      y,
                        expected: per_row,
                        found:    x
                    });
                }
                let value = parse_decimal(&token)
                    .and_then(|x| u32::try_from(x).ok())
                    .ok_or(PnmDecodeErrors::InvalidSample {
                        row:    y,
                        column: x,
                        reason: SampleError::NotANumber
                    })?;

                if value > 255 {
                    return Err(PnmDecodeErrors::InvalidSample {
                        row:    y,
                        column: x,
                        reason: SampleError::TooLarge(value)
                    });
                }
                self.check_max_value(value, y, x)?;
                samples.push(value as u8);
            }
        }
        Ok(samples)
    }

    fn check_max_value(&mut self, value: u32, row: usize, column: usize) -> Result<(), PnmDecodeErrors> {
        if value <= u32::from(self.max_value) {
            return Ok(());
        }
        if self.options.strict_mode() {
            return Err(PnmDecodeErrors::InvalidSample {
                row,
                column,
                reason: SampleError::AboveMaxValue(value, self.max_value)
            });
        }
        if !self.warned_max {
            warn!(
                "Sample {} at row {}, column {} is above max value {}, keeping it",
                value, row, column, self.max_value
            );
            self.warned_max = true;
        }
        Ok(())
    }

    fn samples_to_pixels(&self, kind: PixelKind, samples: Vec<u8>) -> Result<PixelData, PnmDecodeErrors> {
        let pixels = match kind {
            PixelKind::Graymap => {
                PixelData::Graymap(PixelBuffer::from_vec(self.width, self.height, samples)?)
            }
            PixelKind::Pixmap => {
                let rgb = samples
                    .chunks_exact(3)
                    .map(|x| Rgb::new(x[0], x[1], x[2]))
                    .collect();
                PixelData::Pixmap(PixelBuffer::from_vec(self.width, self.height, rgb)?)
            }
            PixelKind::Bitmap => {
                let bits = samples.iter().map(|x| *x != 0).collect();
                PixelData::Bitmap(PixelBuffer::from_vec(self.width, self.height, bits)?)
            }
        };
        Ok(pixels)
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
///
/// A comment runs from `#` to the end of the line.
fn skip_spaces<T: ZByteReaderTrait>(reader: &mut ZReader<T>) -> Result<(), ZByteIoError> {
    while let Some(byte) = reader.peek_u8()? {
        if byte == b'#' {
            let mut skipped = 0_usize;
            // comment, skip the whole line
            while let Some(byte) = reader.peek_u8()? {
                reader.skip(1)?;
                skipped += 1;
                if byte == b'\n' || byte == b'\r' {
                    break;
                }
            }
            trace!("Skipped a {} byte comment", skipped);
        } else if byte.is_ascii_whitespace() {
            reader.skip(1)?;
        } else {
            break;
        }
    }
    Ok(())
}

/// Read bytes up to the next whitespace, comment start or end of stream.
///
/// At most `limit` bytes are kept, longer tokens are still consumed
/// but can't be valid anywhere in a netpbm header anyway.
fn read_token<T: ZByteReaderTrait>(
    reader: &mut ZReader<T>, limit: usize
) -> Result<Vec<u8>, ZByteIoError> {
    let mut token = Vec::new();

    while let Some(byte) = reader.peek_u8()? {
        if byte.is_ascii_whitespace() || byte == b'#' {
            break;
        }
        reader.skip(1)?;
        if token.len() <= limit {
            token.push(byte);
        }
    }
    Ok(token)
}

fn parse_decimal(token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0_usize, |value, byte| {
        if !byte.is_ascii_digit() {
            return None;
        }
        value
            .checked_mul(10)
            .and_then(|x| x.checked_add(usize::from(byte - b'0')))
    })
}
