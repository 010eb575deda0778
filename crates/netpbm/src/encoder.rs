/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use netpbm_core::bytestream::{ZByteWriterTrait, ZWriter};
use netpbm_core::image::{Image, PixelBuffer, PixelData};
use netpbm_core::log::trace;
use netpbm_core::pixel::Rgb;
use netpbm_core::variant::Variant;

use crate::errors::PnmEncodeErrors;
use crate::grammar::{FormatGrammar, HeaderField, PixelEncoding};

/// A netpbm encoder
///
/// By default the image is written as its own variant, use
/// [`set_variant`](Self::set_variant) to switch between the text
/// and binary encoding of the same pixel kind.
///
/// # Example
/// ```
/// use netpbm::netpbm_core::image::{Image, PixelBuffer};
/// use netpbm::netpbm_core::variant::Variant;
/// use netpbm::PnmEncoder;
///
/// let image = Image::from_graymap(PixelBuffer::new(2, 1, 7).unwrap(), 9).unwrap();
///
/// let mut encoder = PnmEncoder::new(&image);
/// encoder.set_variant(Variant::GraymapText).unwrap();
///
/// let mut sink = vec![];
/// encoder.encode(&mut sink).unwrap();
///
/// assert_eq!(sink, b"P2\n2 1\n9\n7 7\n");
/// ```
pub struct PnmEncoder<'a> {
    image:   &'a Image,
    variant: Variant
}

impl<'a> PnmEncoder<'a> {
    /// Create a new encoder writing `image` as its current variant
    pub fn new(image: &'a Image) -> PnmEncoder<'a> {
        PnmEncoder {
            image,
            variant: image.variant()
        }
    }
    /// Return the variant that will be written
    pub const fn variant(&self) -> Variant {
        self.variant
    }
    /// Write the image as `variant`
    ///
    /// # Errors
    /// If the variant stores a different pixel kind than the image
    pub fn set_variant(&mut self, variant: Variant) -> Result<(), PnmEncodeErrors> {
        if variant.kind() != self.image.kind() {
            return Err(PnmEncodeErrors::MismatchedVariant(variant, self.image.kind()));
        }
        self.variant = variant;
        Ok(())
    }
    /// Write the image as the variant identified by `magic`, e.g `"P4"`
    ///
    /// # Errors
    /// - If `magic` isn't one of the six magic numbers
    /// - If the variant stores a different pixel kind than the image
    pub fn set_magic(&mut self, magic: &str) -> Result<(), PnmEncodeErrors> {
        let variant = Variant::from_magic(magic.trim().as_bytes())
            .ok_or_else(|| PnmEncodeErrors::UnknownVariant(magic.to_string()))?;

        self.set_variant(variant)
    }

    /// Encode the image into `sink`
    ///
    /// Returns the number of bytes written
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, PnmEncodeErrors> {
        let grammar = FormatGrammar::of(self.variant);
        let mut writer = ZWriter::new(sink);

        let (width, height) = self.image.dimensions();
        writer.reserve(self.size_hint(grammar, width, height))?;

        self.write_headers(grammar, &mut writer)?;

        match (grammar.encoding, self.image.pixels()) {
            (PixelEncoding::PackedBits, PixelData::Bitmap(buffer)) => {
                write_packed_bits(buffer, &mut writer)?;
            }
            (PixelEncoding::AsciiBits, PixelData::Bitmap(buffer)) => {
                write_text(buffer, &mut writer, |x, out| push_decimal(u8::from(*x), out))?;
            }
            (PixelEncoding::Bytes, PixelData::Graymap(buffer)) => {
                writer.write_all(buffer.as_slice())?;
            }
            (PixelEncoding::Bytes, PixelData::Pixmap(buffer)) => {
                write_rgb_bytes(buffer, &mut writer)?;
            }
            (PixelEncoding::AsciiDecimal, PixelData::Graymap(buffer)) => {
                write_text(buffer, &mut writer, |x, out| push_decimal(*x, out))?;
            }
            (PixelEncoding::AsciiDecimal, PixelData::Pixmap(buffer)) => {
                write_text(buffer, &mut writer, push_rgb)?;
            }
            _ => {
                return Err(PnmEncodeErrors::MismatchedVariant(
                    self.variant,
                    self.image.kind()
                ));
            }
        }
        writer.flush()?;

        trace!("Wrote {} bytes as {}", writer.bytes_written(), self.variant);

        Ok(writer.bytes_written())
    }

    fn write_headers<T: ZByteWriterTrait>(
        &self, grammar: &FormatGrammar, writer: &mut ZWriter<T>
    ) -> Result<(), PnmEncodeErrors> {
        let (width, height) = self.image.dimensions();

        let mut header = format!("{}\n{} {}\n", self.variant, width, height);

        if grammar.header.contains(&HeaderField::MaxValue) {
            header.push_str(&format!("{}\n", self.image.max_value()));
        }
        writer.write_all(header.as_bytes())?;
        Ok(())
    }

    fn size_hint(&self, grammar: &FormatGrammar, width: usize, height: usize) -> usize {
        let payload = match grammar.encoding {
            PixelEncoding::PackedBits | PixelEncoding::Bytes => grammar.row_bytes(width),
            // worst case of three digits and a separator per sample
            PixelEncoding::AsciiDecimal => width * grammar.samples_per_pixel() * 4,
            PixelEncoding::AsciiBits => width * 2
        };
        payload.saturating_mul(height).saturating_add(32)
    }
}

fn write_packed_bits<T: ZByteWriterTrait>(
    buffer: &PixelBuffer<bool>, writer: &mut ZWriter<T>
) -> Result<(), PnmEncodeErrors> {
    let mut row_bytes = Vec::with_capacity(buffer.width().div_ceil(8));

    for row in buffer.rows() {
        row_bytes.clear();
        // the last chunk may be short, its unused low bits stay zero
        row_bytes.extend(row.chunks(8).map(|bits| {
            bits.iter()
                .enumerate()
                .fold(0_u8, |byte, (position, bit)| byte | (u8::from(*bit) << (7 - position)))
        }));
        writer.write_all(&row_bytes)?;
    }
    Ok(())
}

fn write_rgb_bytes<T: ZByteWriterTrait>(
    buffer: &PixelBuffer<Rgb>, writer: &mut ZWriter<T>
) -> Result<(), PnmEncodeErrors> {
    let mut row_bytes = Vec::with_capacity(buffer.width() * 3);

    for row in buffer.rows() {
        row_bytes.clear();
        row_bytes.extend(row.iter().flat_map(|x| x.to_array()));
        writer.write_all(&row_bytes)?;
    }
    Ok(())
}

/// Write one text line per row, samples separated by a single space
fn write_text<P, T, F>(
    buffer: &PixelBuffer<P>, writer: &mut ZWriter<T>, push: F
) -> Result<(), PnmEncodeErrors>
where
    P: netpbm_core::pixel::PixelType,
    T: ZByteWriterTrait,
    F: Fn(&P, &mut Vec<u8>)
{
    let mut line = Vec::new();

    for row in buffer.rows() {
        line.clear();
        for (position, pixel) in row.iter().enumerate() {
            if position != 0 {
                line.push(b' ');
            }
            push(pixel, &mut line);
        }
        line.push(b'\n');
        writer.write_all(&line)?;
    }
    Ok(())
}

fn push_rgb(pixel: &Rgb, out: &mut Vec<u8>) {
    push_decimal(pixel.r, out);
    out.push(b' ');
    push_decimal(pixel.g, out);
    out.push(b' ');
    push_decimal(pixel.b, out);
}

fn push_decimal(value: u8, out: &mut Vec<u8>) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + (value / 10) % 10);
    }
    out.push(b'0' + value % 10);
}
