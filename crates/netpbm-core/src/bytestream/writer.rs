/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

mod no_std_writer;
mod std_writer;

/// Encapsulates a simple byte writer over a sink
///
/// The writer keeps count of how many bytes went through it
/// so encoders can report the size of what they produced.
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes written through this writer
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    /// Write all of `buf` or error out
    #[inline]
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }
    pub fn reserve(&mut self, additional: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(additional)
    }
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::bytestream::ZWriter;

    #[test]
    fn counts_written_bytes() {
        let mut sink = Vec::new();
        let mut writer = ZWriter::new(&mut sink);

        writer.reserve(8).unwrap();
        writer.write_all(b"P5\n3 2\n").unwrap();
        writer.write_all(&[255]).unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.bytes_written(), 8);
        assert_eq!(sink, b"P5\n3 2\n\xff".to_vec());
    }
}
