/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use core::fmt::Formatter;

mod std_readers;
pub(crate) mod zcursor;
use crate::bytestream::ZByteReaderTrait;

/// Errors raised by bytestream readers and writers
pub enum ZByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    // buffer size, requested
    NotEnoughBuffer(usize, usize),
    Generic(&'static str)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::NotEnoughBuffer(size, requested) => {
                writeln!(
                    f,
                    "Not enough buffer to write {requested} bytes, buffer size is {size}"
                )
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl core::fmt::Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// A reader over anything that implements [`ZByteReaderTrait`]
///
/// This adds the small conveniences the netpbm grammar needs,
/// one byte look-ahead and partial reads that report how much
/// was actually available.
pub struct ZReader<T: ZByteReaderTrait> {
    inner: T
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader { inner: source }
    }
    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<(), ZByteIoError> {
        self.inner.skip_bytes(num)
    }
    /// Return the next byte without consuming it, or `None`
    /// at the end of the stream
    #[inline]
    pub fn peek_u8(&mut self) -> Result<Option<u8>, ZByteIoError> {
        let mut buf = [0];
        match self.inner.peek_bytes(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0]))
        }
    }

    /// Fill `buf` as far as the source allows, returning the number of
    /// bytes that were actually read.
    ///
    /// This keeps asking the source until either the buffer is full or
    /// the source reports no more bytes, so a short count always means
    /// end of stream.
    pub fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.inner.read_bytes(&mut buf[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        Ok(filled)
    }
}
