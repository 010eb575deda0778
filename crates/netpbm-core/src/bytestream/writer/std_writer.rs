/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::io::Write;

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

impl<T: Write> ZByteWriterTrait for T {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        Ok(self.write_all(buf)?)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(self.flush()?)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
        Ok(())
    }
}
