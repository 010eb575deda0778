/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing netpbm streams
//!
//! Sources and sinks the decoder and encoder are generic over.

use crate::bytestream::reader::ZByteIoError;

/// The input trait implemented for readers.
///
/// Header and text payload parsing works a byte at a time with one byte
/// of look-ahead, binary payloads are read a row at a time.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`ZCursor`](crate::bytestream::ZCursor) over [`Cursor`](std::io::Cursor),
/// the former serves single bytes without going through `std::io::Read`.
///
/// With the `std` feature the trait is also implemented for [`BufReader`](std::io::BufReader)
/// over anything that is `Read + Seek`, e.g a file.
pub trait ZByteReaderTrait {
    /// Read bytes into `buf` returning how many bytes were read
    ///
    /// A count of zero means the source is exhausted, a short
    /// count doesn't.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError>;
    /// Reads data into provided buffer but does not advance read position.
    fn peek_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError>;
    /// Move past `num` bytes, stopping early at the end of the source
    ///
    /// This is called once per header and text payload byte, implementations
    /// should not reach out to an underlying device for bytes they already hold.
    fn skip_bytes(&mut self, num: usize) -> Result<(), ZByteIoError>;
}

/// The writer trait implemented for the netpbm encoder
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
///
/// With the `std` feature every [`std::io::Write`] is a sink, without it
/// `&mut [u8]` and `&mut Vec<u8>` are.
pub trait ZByteWriterTrait {
    /// Write all bytes to the sink or return an error if that isn't possible
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;
    /// A hint of how many bytes the encoder expects to write
    ///
    /// In memory sinks can reserve space up front, others may ignore it.
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError>;
}
