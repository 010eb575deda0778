/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Deterministic value noise fill
use netpbm_core::errors::ImageErrors;
use netpbm_core::image::PixelBuffer;

use crate::traits::Lerp;

const FREQUENCY: f64 = 0.02;
const AMPLITUDE: f64 = 50.0;

/// Pseudo random noise at `(x, y)`, in `(-0.5, 0.5]`
///
/// The coordinates are truncated to integers and hashed, the result
/// depends on nothing but the coordinates.
pub fn perlin_noise(x: f64, y: f64) -> f64 {
    let n = (x as i64).wrapping_add((y as i64).wrapping_mul(57));
    let n = (n << 13) ^ n;

    let hash = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789_221))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;

    1.0 - ((hash as f64 / 1_073_741_824.0) + 1.0) / 2.0
}

/// Blend factor of the pixel at `(x, y)`, in `[0, 1]`
fn noise_factor(x: usize, y: usize) -> f64 {
    let noise = perlin_noise(x as f64 * FREQUENCY, y as f64 * FREQUENCY) * AMPLITUDE;
    (noise + AMPLITUDE) / (2.0 * AMPLITUDE)
}

fn fill_rows<P: Lerp>(rows: &mut [P], width: usize, first_row: usize, from: P, to: P) {
    for (y, row) in rows.chunks_exact_mut(width).enumerate() {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = from.lerp(to, noise_factor(x, first_row + y));
        }
    }
}

/// Fill every pixel with a blend of `from` and `to` weighted by noise
///
/// The result is a pure function of the buffer dimensions and colours.
///
/// # Errors
/// If a worker thread panics
pub fn draw_perlin_noise<P: Lerp>(buffer: &mut PixelBuffer<P>, from: P, to: P) -> Result<(), ImageErrors> {
    let width = buffer.width();

    #[cfg(feature = "threads")]
    {
        let height = buffer.height();
        let threads = std::thread::available_parallelism().map_or(1, usize::from);
        let rows_per_thread = height.div_ceil(threads);

        std::thread::scope(|s| {
            let mut handles = vec![];
            for (position, chunk) in buffer
                .as_mut_slice()
                .chunks_mut(rows_per_thread * width)
                .enumerate()
            {
                let handle =
                    s.spawn(move || fill_rows(chunk, width, position * rows_per_thread, from, to));
                handles.push(handle);
            }
            handles
                .into_iter()
                .map(|x| {
                    x.join()
                        .map_err(|_| ImageErrors::GenericStatic("Noise thread panicked"))
                })
                .collect::<Result<Vec<()>, ImageErrors>>()
        })?;
    }
    #[cfg(not(feature = "threads"))]
    {
        fill_rows(buffer.as_mut_slice(), width, 0, from, to);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use netpbm_core::image::PixelBuffer;
    use netpbm_core::pixel::Rgb;

    use crate::draw::noise::{fill_rows, noise_factor, perlin_noise};
    use crate::draw::draw_perlin_noise;

    #[test]
    fn noise_is_bounded_and_pure() {
        for y in 0..40 {
            for x in 0..40 {
                let value = perlin_noise(f64::from(x), f64::from(y));
                assert!(value > -0.5 && value <= 0.5, "{value}");
                assert_eq!(value.to_bits(), perlin_noise(f64::from(x), f64::from(y)).to_bits());

                let factor = noise_factor(x as usize, y as usize);
                assert!((0.0..=1.0).contains(&factor));
            }
        }
    }

    #[test]
    fn noise_at_origin() {
        // hash of 0 is 1376312589
        let expected = 1.0 - ((1_376_312_589.0 / 1_073_741_824.0) + 1.0) / 2.0;
        assert_eq!(perlin_noise(0.0, 0.0), expected);
    }

    #[test]
    fn threaded_fill_matches_serial() {
        let (from, to) = (Rgb::new(0, 0, 0), Rgb::new(255, 128, 64));

        let mut threaded = PixelBuffer::new(97, 61, Rgb::default()).unwrap();
        draw_perlin_noise(&mut threaded, from, to).unwrap();

        let mut serial = PixelBuffer::new(97, 61, Rgb::default()).unwrap();
        fill_rows(serial.as_mut_slice(), 97, 0, from, to);

        assert_eq!(threaded, serial);
    }

    #[test]
    fn fill_stays_between_colors() {
        let mut buffer = PixelBuffer::new(10, 10, 0_u8).unwrap();
        draw_perlin_noise(&mut buffer, 40, 200).unwrap();
        assert!(buffer.as_slice().iter().all(|x| (40..=200).contains(x)));
    }
}
