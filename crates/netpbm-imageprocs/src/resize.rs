/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Resize an image by neighbourhood averaging
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::{Image, PixelBuffer, PixelData};
use netpbm_core::log::trace;
use netpbm_core::variant::PixelKind;

use crate::traits::{Channels, OperationsTrait};

/// Resize an image to new dimensions
///
/// Each destination pixel maps back to a source pixel by the ratio of
/// the old and new dimensions, its value is the average of that pixel
/// and its neighbours in a 3x3 window clipped to the source.
///
/// Only graymaps and pixmaps can be resized.
#[derive(Copy, Clone)]
pub struct Resize {
    new_width:  usize,
    new_height: usize
}

impl Resize {
    /// Create a new resize operation
    ///
    /// Zero dimensions are rejected when the operation runs
    #[must_use]
    pub fn new(new_width: usize, new_height: usize) -> Resize {
        Resize {
            new_width,
            new_height
        }
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.new_width == 0 {
            return Err(ImageErrors::ZeroDimension("width"));
        }
        if self.new_height == 0 {
            return Err(ImageErrors::ZeroDimension("height"));
        }
        let (old_width, old_height) = image.dimensions();

        trace!(
            "Resizing from {}x{} to {}x{}",
            old_width,
            old_height,
            self.new_width,
            self.new_height
        );

        let resized = match image.pixels() {
            PixelData::Graymap(buffer) => PixelData::Graymap(self.resize_buffer(buffer)?),
            PixelData::Pixmap(buffer) => PixelData::Pixmap(self.resize_buffer(buffer)?),
            PixelData::Bitmap(_) => {
                return Err(ImageErrors::UnsupportedOperation(self.name(), PixelKind::Bitmap))
            }
        };
        image.set_pixels(resized)
    }

    fn supported_kinds(&self) -> &'static [PixelKind] {
        &[PixelKind::Graymap, PixelKind::Pixmap]
    }
}

impl Resize {
    fn resize_buffer<T: Channels>(&self, buffer: &PixelBuffer<T>) -> Result<PixelBuffer<T>, ImageErrors> {
        let (in_width, in_height) = buffer.dimensions();
        let (out_width, out_height) = (self.new_width, self.new_height);

        let size = out_width
            .checked_mul(out_height)
            .ok_or(ImageErrors::GenericStatic("Image dimensions overflow"))?;
        let mut out_image = vec![T::default(); size];
        let in_image = buffer.as_slice();

        #[cfg(feature = "threads")]
        {
            let threads = std::thread::available_parallelism().map_or(1, usize::from);
            let rows_per_thread = out_height.div_ceil(threads);

            std::thread::scope(|s| {
                let mut handles = vec![];
                for (position, chunk) in out_image
                    .chunks_mut(rows_per_thread * out_width)
                    .enumerate()
                {
                    let handle = s.spawn(move || {
                        resize_rows(
                            in_image,
                            chunk,
                            (in_width, in_height),
                            (out_width, out_height),
                            position * rows_per_thread
                        );
                    });
                    handles.push(handle);
                }
                handles
                    .into_iter()
                    .map(|x| {
                        x.join()
                            .map_err(|_| ImageErrors::GenericStatic("Resize thread panicked"))
                    })
                    .collect::<Result<Vec<()>, ImageErrors>>()
            })?;
        }
        #[cfg(not(feature = "threads"))]
        {
            resize(
                in_image,
                &mut out_image,
                in_width,
                in_height,
                out_width,
                out_height
            );
        }

        PixelBuffer::from_vec(out_width, out_height, out_image)
    }
}

/// Resize an image to new dimensions
///
/// # Arguments
/// - in_image: Pixels of the source image, row major
/// - out_image: Where we will store the new resized pixels
/// - in_width: `in_image`'s width
/// - in_height:  `in_image`'s height.
/// - out_width: The expected width
/// - out_height: The expected height.
/// # Panics
/// - `in_width*in_height` do not match `in_image.len()`.
/// - `out_width*out_height` do not match `out_image.len()`.
pub fn resize<T: Channels>(
    in_image: &[T], out_image: &mut [T], in_width: usize, in_height: usize, out_width: usize,
    out_height: usize
) {
    assert_eq!(in_image.len(), in_width * in_height);
    assert_eq!(out_image.len(), out_width * out_height);

    resize_rows(
        in_image,
        out_image,
        (in_width, in_height),
        (out_width, out_height),
        0
    );
}

/// Fill the destination rows in `out_rows`, the first of which is row `first_row`
fn resize_rows<T: Channels>(
    in_image: &[T], out_rows: &mut [T], (in_width, in_height): (usize, usize),
    (out_width, out_height): (usize, usize), first_row: usize
) {
    let scale_x = in_width as f64 / out_width as f64;
    let scale_y = in_height as f64 / out_height as f64;

    for (y, row) in out_rows.chunks_exact_mut(out_width).enumerate() {
        let orig_y = ((first_row + y) as f64 * scale_y) as usize;

        for (x, pixel) in row.iter_mut().enumerate() {
            let orig_x = (x as f64 * scale_x) as usize;

            *pixel = neighbourhood_average(in_image, in_width, in_height, orig_x, orig_y);
        }
    }
}

/// Average of the pixel at `(x, y)` and its neighbours, clipped to the image
fn neighbourhood_average<T: Channels>(
    in_image: &[T], width: usize, height: usize, x: usize, y: usize
) -> T {
    let mut sums = [0_u32; 3];
    let mut count = 0;

    for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
        let row = &in_image[ny * width..(ny + 1) * width];

        for pixel in &row[x.saturating_sub(1)..=(x + 1).min(width - 1)] {
            for (sum, channel) in sums.iter_mut().zip(pixel.to_channels()) {
                *sum += u32::from(channel);
            }
            count += 1;
        }
    }
    T::from_channels(sums.map(|x| (x / count) as u8))
}
