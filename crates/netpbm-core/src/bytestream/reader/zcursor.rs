/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait};

/// A cursor over an in-memory buffer
///
/// This is the preferred source for decoding bytes already in memory,
/// it works with and without `std`.
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    #[inline]
    fn len(&self) -> usize {
        self.stream.as_ref().len()
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let read = self.peek_bytes(buf)?;
        self.position += read;
        Ok(read)
    }

    #[inline(always)]
    fn peek_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let start = core::cmp::min(self.position, self.len());
        let end = core::cmp::min(self.position.saturating_add(buf.len()), self.len());
        let slice = &self.stream.as_ref()[start..end];

        buf[..slice.len()].copy_from_slice(slice);
        Ok(slice.len())
    }

    #[inline(always)]
    fn skip_bytes(&mut self, num: usize) -> Result<(), ZByteIoError> {
        self.position = self.position.saturating_add(num).min(self.len());
        Ok(())
    }
}
