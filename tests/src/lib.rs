/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use netpbm_core::errors::ImageErrors;
use netpbm_core::image::Image;
use netpbm_core::pixel::{Pixel, Rgb};
use netpbm_imageprocs::convert::{ConvertToBitmap, ConvertToGraymap};
use netpbm_imageprocs::draw::{Draw, Point, Shape};
use netpbm_imageprocs::flip::Flip;
use netpbm_imageprocs::invert::Invert;
use netpbm_imageprocs::rescale::RescaleMax;
use netpbm_imageprocs::resize::Resize;
use netpbm_imageprocs::rotate::Rotate90;
use netpbm_imageprocs::traits::OperationsTrait;
use serde::Deserialize;

mod pipeline;
mod scenarios;

/// A colour as written in the test files, `true`, `12` or `[1, 2, 3]`
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum JsonColor {
    Bit(bool),
    Gray(u8),
    Rgb([u8; 3])
}

impl JsonColor {
    pub fn to_pixel(self) -> Pixel {
        match self {
            Self::Bit(value) => Pixel::Bit(value),
            Self::Gray(value) => Pixel::Gray(value),
            Self::Rgb(value) => Pixel::Rgb(Rgb::from(value))
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum JsonOperation {
    Invert,
    FlipHorizontal,
    FlipVertical,
    Rotate90,
    RescaleMax {
        max: u8
    },
    ToGraymap,
    ToBitmap,
    Resize {
        width:  usize,
        height: usize
    },
    SetMagic {
        magic: String
    },
    Line {
        from:  [i32; 2],
        to:    [i32; 2],
        color: JsonColor
    },
    FilledPolygon {
        points: Vec<[i32; 2]>,
        color:  JsonColor
    }
}

fn point([x, y]: [i32; 2]) -> Point {
    Point::new(x, y)
}

impl JsonOperation {
    /// Run the operation on `image`
    pub fn apply(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let operation: Box<dyn OperationsTrait> = match self {
            Self::Invert => Box::new(Invert::new()),
            Self::FlipHorizontal => Box::new(Flip::horizontal()),
            Self::FlipVertical => Box::new(Flip::vertical()),
            Self::Rotate90 => Box::new(Rotate90::new()),
            Self::RescaleMax { max } => Box::new(RescaleMax::new(*max)),
            Self::ToGraymap => Box::new(ConvertToGraymap::new()),
            Self::ToBitmap => Box::new(ConvertToBitmap::new()),
            Self::Resize { width, height } => Box::new(Resize::new(*width, *height)),
            Self::Line { from, to, color } => Box::new(Draw::new(
                Shape::Line(point(*from), point(*to)),
                color.to_pixel()
            )),
            Self::FilledPolygon { points, color } => Box::new(Draw::new(
                Shape::FilledPolygon(points.iter().copied().map(point).collect()),
                color.to_pixel()
            )),
            Self::SetMagic { magic } => {
                let variant = netpbm_core::variant::Variant::from_magic(magic.as_bytes())
                    .ok_or(ImageErrors::GenericStatic("Unknown magic in test file"))?;
                return image.set_variant(variant);
            }
        };
        operation.execute(image)
    }
}

/// A pipeline test, decode `input`, run `operations` in order,
/// encode and compare with `expected`
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    pub input:      String,
    pub operations: Vec<JsonOperation>,
    pub expected:   String,
    pub comment:    Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_owned()
}
