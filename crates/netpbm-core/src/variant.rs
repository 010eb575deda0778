/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Netpbm variants and the pixel kinds they carry
//!
//! A file's magic number selects one of six variants, the variant
//! in turn fixes the pixel kind (bitmap, graymap or pixmap) and whether
//! the payload is ascii text or raw bytes.
use core::fmt::{Display, Formatter};

/// The in-memory kind of a pixel
///
/// This is what an image stores, independent of how it
/// is laid out on the wire
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelKind {
    /// One boolean per pixel, `true` means set (black)
    Bitmap,
    /// One 8 bit intensity per pixel
    Graymap,
    /// An `R,G,B` triple of 8 bit channels per pixel
    Pixmap
}

impl PixelKind {
    /// Number of channels stored per pixel
    pub const fn num_components(self) -> usize {
        match self {
            PixelKind::Bitmap | PixelKind::Graymap => 1,
            PixelKind::Pixmap => 3
        }
    }
    /// Whether the kind carries a declared maximum value in its header
    pub const fn has_max_value(self) -> bool {
        !matches!(self, PixelKind::Bitmap)
    }
    /// The text variant storing this kind
    pub const fn text_variant(self) -> Variant {
        match self {
            PixelKind::Bitmap => Variant::BitmapText,
            PixelKind::Graymap => Variant::GraymapText,
            PixelKind::Pixmap => Variant::PixmapText
        }
    }
    /// The binary variant storing this kind
    pub const fn binary_variant(self) -> Variant {
        match self {
            PixelKind::Bitmap => Variant::BitmapBinary,
            PixelKind::Graymap => Variant::GraymapBinary,
            PixelKind::Pixmap => Variant::PixmapBinary
        }
    }
}

/// One of the six netpbm sub-formats
///
/// | Variant         | Magic |
/// |-----------------|-------|
/// | `BitmapText`    | `P1`  |
/// | `GraymapText`   | `P2`  |
/// | `PixmapText`    | `P3`  |
/// | `BitmapBinary`  | `P4`  |
/// | `GraymapBinary` | `P5`  |
/// | `PixmapBinary`  | `P6`  |
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Variant {
    BitmapText,
    GraymapText,
    PixmapText,
    BitmapBinary,
    GraymapBinary,
    PixmapBinary
}

impl Variant {
    /// All variants, in magic number order
    pub const ALL: [Variant; 6] = [
        Variant::BitmapText,
        Variant::GraymapText,
        Variant::PixmapText,
        Variant::BitmapBinary,
        Variant::GraymapBinary,
        Variant::PixmapBinary
    ];

    /// The two byte magic number identifying this variant
    pub const fn magic(self) -> &'static [u8; 2] {
        match self {
            Variant::BitmapText => b"P1",
            Variant::GraymapText => b"P2",
            Variant::PixmapText => b"P3",
            Variant::BitmapBinary => b"P4",
            Variant::GraymapBinary => b"P5",
            Variant::PixmapBinary => b"P6"
        }
    }
    /// Match a magic number, returning `None` for anything
    /// that isn't one of the six tokens
    pub fn from_magic(magic: &[u8]) -> Option<Variant> {
        Variant::ALL
            .iter()
            .copied()
            .find(|variant| variant.magic().as_slice() == magic)
    }
    /// Pixel kind produced when decoding this variant
    pub const fn kind(self) -> PixelKind {
        match self {
            Variant::BitmapText | Variant::BitmapBinary => PixelKind::Bitmap,
            Variant::GraymapText | Variant::GraymapBinary => PixelKind::Graymap,
            Variant::PixmapText | Variant::PixmapBinary => PixelKind::Pixmap
        }
    }
    /// Whether pixels are stored as raw bytes instead of ascii tokens
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            Variant::BitmapBinary | Variant::GraymapBinary | Variant::PixmapBinary
        )
    }
    /// Variant storing `kind` with the same text/binary encoding as `self`
    pub const fn with_kind(self, kind: PixelKind) -> Variant {
        if self.is_binary() {
            kind.binary_variant()
        } else {
            kind.text_variant()
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let magic = self.magic();
        write!(f, "{}{}", magic[0] as char, magic[1] as char)
    }
}
