/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The reader is what the netpbm decoder pulls header tokens and
//! pixel rows from, the writer is where the encoder pushes them.
//!
//! Both are traits so that in-memory buffers, files and
//! anything that implements `std::io` traits can be used
//! interchangeably.
pub use reader::{ZByteIoError, ZReader};
pub use traits::*;
pub use writer::ZWriter;

pub use crate::bytestream::reader::zcursor::ZCursor;

mod reader;
mod traits;
mod writer;
