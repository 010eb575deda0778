/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for netpbm images
//!
//! This implements transforms, a resampler and a rasterizer working on
//! [`Image`](netpbm_core::image::Image)s of every pixel kind.
//!
//! Every routine is available as a generic slice function and as an
//! operation implementing [`OperationsTrait`](crate::traits::OperationsTrait),
//! the latter dispatches on the pixel kind of the image.
//!
//! # Example
//! - Invert a graymap, then draw a white line over it
//! ```
//! use netpbm_core::image::{Image, PixelBuffer};
//! use netpbm_core::pixel::Pixel;
//! use netpbm_imageprocs::draw::{Draw, Point, Shape};
//! use netpbm_imageprocs::invert::Invert;
//! use netpbm_imageprocs::traits::OperationsTrait;
//!
//! let mut image = Image::from_graymap(PixelBuffer::new(8, 8, 0).unwrap(), 255).unwrap();
//!
//! Invert::new().execute(&mut image).unwrap();
//! Draw::new(Shape::Line(Point::new(0, 0), Point::new(7, 7)), Pixel::Gray(0))
//!     .execute(&mut image)
//!     .unwrap();
//!
//! assert_eq!(image.get(3, 3), Some(Pixel::Gray(0)));
//! assert_eq!(image.get(3, 4), Some(Pixel::Gray(255)));
//! ```
//!
//! # Features
//!  - `threads`: Split the resampler and the noise fill across threads, on by default
//!  - `log`: Log executed operations through the `log` crate
//!  - `benchmarks`: Nightly micro benchmarks
#![cfg_attr(feature = "benchmarks", feature(test))]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

pub mod convert;
pub mod draw;
pub mod flip;
pub mod invert;
pub mod rescale;
pub mod resize;
pub mod rotate;
pub mod traits;
