/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the netpbm crates
//!
//! This crate provides the building blocks the codec and the
//! image processing crates agree on
//!
//! It currently contains
//!
//! - A bytestream reader and writer usable from `no_std`
//! - The six netpbm variants and the three pixel kinds they decode to
//! - An in-memory image, a pixel buffer per pixel kind
//! - Decoder options
//! - A logging facade that compiles to nothing without the `log` feature
//!
//! This library is `#[no_std]` with `alloc` feature needed for defining `Vec`
//! which we need for storing decoded pixels.
//!
//! # Features
//!  - `std`: Enables io trait implementations for the bytestream.
//!
//!  - `log`: Routes the logging macros to the [`log`](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

#[cfg(feature = "log")]
pub extern crate log;

pub mod bytestream;
pub mod errors;
pub mod image;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod pixel;
pub mod serde;
pub mod variant;
