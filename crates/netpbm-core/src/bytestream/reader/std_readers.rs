/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::io;
use std::io::{BufRead, BufReader, Read};

use crate::bytestream::reader::ZByteIoError;
use crate::bytestream::ZByteReaderTrait;

impl<T: io::Read + io::Seek> ZByteReaderTrait for BufReader<T> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        self.read(buf).map_err(ZByteIoError::from)
    }

    fn peek_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        // serve from the internal buffer when possible, that never
        // needs a seek on the underlying reader
        let available = self.fill_buf()?;
        if available.len() >= buf.len() || available.is_empty() {
            let amount = available.len().min(buf.len());
            buf[..amount].copy_from_slice(&available[..amount]);
            return Ok(amount);
        }
        let bytes_read = self.read_bytes(buf)?;
        let converted = -i64::try_from(bytes_read)
            .map_err(|_| ZByteIoError::Generic("Peek length does not fit an i64"))?;
        self.seek_relative(converted)?;

        Ok(bytes_read)
    }

    fn skip_bytes(&mut self, num: usize) -> Result<(), ZByteIoError> {
        let mut remaining = num;

        while remaining > 0 {
            let buffered = self.fill_buf()?.len();
            if buffered == 0 {
                break;
            }
            let amount = buffered.min(remaining);
            self.consume(amount);
            remaining -= amount;
        }
        Ok(())
    }
}
