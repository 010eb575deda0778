/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::pixel::Rgb;
use crate::variant::{PixelKind, Variant};

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // variants serialize as their magic number
        serializer.serialize_str(&format!("{}", self))
    }
}

impl Serialize for PixelKind {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.r)?;
        tuple.serialize_element(&self.g)?;
        tuple.serialize_element(&self.b)?;
        tuple.end()
    }
}
