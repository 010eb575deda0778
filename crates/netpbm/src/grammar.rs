/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The header and payload layout of each variant
//!
//! Decoder and encoder both dispatch on this table instead of
//! matching on variants themselves, so the two stay in agreement.
use netpbm_core::variant::Variant;

/// A field of the header following the magic number
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HeaderField {
    Width,
    Height,
    MaxValue
}

/// How pixel samples are laid out after the header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelEncoding {
    /// `0`/`1` characters, whitespace between them is optional
    AsciiBits,
    /// Whitespace separated decimal numbers, one per channel
    AsciiDecimal,
    /// Eight pixels per byte, most significant bit first,
    /// each row padded to a whole byte
    PackedBits,
    /// One byte per channel, no padding
    Bytes
}

/// Grammar of a single variant
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FormatGrammar {
    pub variant:  Variant,
    pub header:   &'static [HeaderField],
    pub encoding: PixelEncoding
}

const BITMAP_HEADER: &[HeaderField] = &[HeaderField::Width, HeaderField::Height];
const SAMPLE_HEADER: &[HeaderField] = &[
    HeaderField::Width,
    HeaderField::Height,
    HeaderField::MaxValue
];

/// One entry per variant, in magic number order
pub static GRAMMARS: [FormatGrammar; 6] = [
    FormatGrammar {
        variant:  Variant::BitmapText,
        header:   BITMAP_HEADER,
        encoding: PixelEncoding::AsciiBits
    },
    FormatGrammar {
        variant:  Variant::GraymapText,
        header:   SAMPLE_HEADER,
        encoding: PixelEncoding::AsciiDecimal
    },
    FormatGrammar {
        variant:  Variant::PixmapText,
        header:   SAMPLE_HEADER,
        encoding: PixelEncoding::AsciiDecimal
    },
    FormatGrammar {
        variant:  Variant::BitmapBinary,
        header:   BITMAP_HEADER,
        encoding: PixelEncoding::PackedBits
    },
    FormatGrammar {
        variant:  Variant::GraymapBinary,
        header:   SAMPLE_HEADER,
        encoding: PixelEncoding::Bytes
    },
    FormatGrammar {
        variant:  Variant::PixmapBinary,
        header:   SAMPLE_HEADER,
        encoding: PixelEncoding::Bytes
    }
];

impl FormatGrammar {
    /// Look up the grammar for a variant
    pub fn of(variant: Variant) -> &'static FormatGrammar {
        // GRAMMARS is ordered like Variant::ALL
        &GRAMMARS[variant as usize]
    }
    /// Look up the grammar for a magic number
    pub fn from_magic(magic: &[u8]) -> Option<&'static FormatGrammar> {
        GRAMMARS
            .iter()
            .find(|grammar| grammar.variant.magic().as_slice() == magic)
    }
    /// Samples stored per pixel
    pub const fn samples_per_pixel(&self) -> usize {
        self.variant.kind().num_components()
    }
    /// Bytes a single row occupies in a binary payload
    pub const fn row_bytes(&self, width: usize) -> usize {
        match self.encoding {
            PixelEncoding::PackedBits => width.div_ceil(8),
            _ => width * self.samples_per_pixel()
        }
    }
    pub const fn is_binary(&self) -> bool {
        matches!(self.encoding, PixelEncoding::PackedBits | PixelEncoding::Bytes)
    }
}
