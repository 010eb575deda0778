/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use nanorand::{Rng, WyRand};
use netpbm::netpbm_core::bytestream::ZCursor;
use netpbm::netpbm_core::image::{Image, PixelBuffer, PixelData};
use netpbm::netpbm_core::pixel::Rgb;
use netpbm::netpbm_core::variant::{PixelKind, Variant};
use netpbm::PnmEncoder;

fn random_image(rng: &mut WyRand, variant: Variant) -> Image {
    let width = rng.generate_range(1_usize..=19);
    let height = rng.generate_range(1_usize..=7);
    let max_value = rng.generate_range(1_u8..=255);

    let mut samples = vec![0_u8; width * height * variant.kind().num_components()];
    rng.fill(&mut samples);

    let pixels = match variant.kind() {
        PixelKind::Bitmap => {
            let bits = samples.iter().map(|x| x & 1 == 1).collect();
            PixelData::Bitmap(PixelBuffer::from_vec(width, height, bits).unwrap())
        }
        PixelKind::Graymap => {
            let gray = samples
                .iter()
                .map(|x| (u16::from(*x) % (u16::from(max_value) + 1)) as u8)
                .collect();
            PixelData::Graymap(PixelBuffer::from_vec(width, height, gray).unwrap())
        }
        PixelKind::Pixmap => {
            let rgb = samples
                .chunks_exact(3)
                .map(|x| Rgb::new(x[0], x[1], x[2]))
                .collect();
            // full range so every channel value is exercised
            return Image::new(
                variant,
                255,
                PixelData::Pixmap(PixelBuffer::from_vec(width, height, rgb).unwrap())
            )
            .unwrap();
        }
    };
    let max_value = if variant.kind() == PixelKind::Bitmap { 1 } else { max_value };
    Image::new(variant, max_value, pixels).unwrap()
}

#[test]
fn decode_of_encode_is_identity() {
    let mut rng = WyRand::new_seed(0x5eed);

    for variant in Variant::ALL {
        for _ in 0..16 {
            let image = random_image(&mut rng, variant);

            let mut sink = vec![];
            netpbm::encode(&image, &mut sink).unwrap();

            let decoded = netpbm::decode(ZCursor::new(&sink)).unwrap();
            assert_eq!(decoded, image, "variant {variant}");
        }
    }
}

#[test]
fn packed_padding_is_zero() {
    let mut rng = WyRand::new_seed(42);

    for width in [1_usize, 3, 7, 9, 13, 15] {
        let bits = (0..width * 3).map(|_| rng.generate::<bool>()).collect();
        let image = Image::from_bitmap(PixelBuffer::from_vec(width, 3, bits).unwrap());

        let mut sink = vec![];
        netpbm::encode(&image, &mut sink).unwrap();

        let header_len = format!("P4\n{width} 3\n").len();
        let row_bytes = width.div_ceil(8);
        let padding = row_bytes * 8 - width;
        let mask = (1_u16 << padding) as u8 - 1;

        assert_eq!(sink.len(), header_len + row_bytes * 3);
        for row in sink[header_len..].chunks_exact(row_bytes) {
            assert_eq!(row[row_bytes - 1] & mask, 0, "width {width}");
        }
    }
}

#[test]
fn text_and_binary_hold_the_same_pixels() {
    let mut rng = WyRand::new_seed(7);
    let image = random_image(&mut rng, Variant::PixmapBinary);

    let mut binary = vec![];
    netpbm::encode(&image, &mut binary).unwrap();

    let mut text = vec![];
    let mut encoder = PnmEncoder::new(&image);
    encoder.set_variant(Variant::PixmapText).unwrap();
    encoder.encode(&mut text).unwrap();

    let from_binary = netpbm::decode(ZCursor::new(&binary)).unwrap();
    let from_text = netpbm::decode(ZCursor::new(&text)).unwrap();

    assert_eq!(from_binary.pixels(), from_text.pixels());
    assert_eq!(from_text.variant(), Variant::PixmapText);
}

#[test]
fn file_helpers() {
    let path = std::env::temp_dir().join(format!("netpbm-file-helpers-{}.pgm", std::process::id()));
    let image = Image::from_graymap(PixelBuffer::from_vec(2, 2, vec![0, 50, 100, 150]).unwrap(), 150)
        .unwrap();

    let written = netpbm::encode_file(&image, &path).unwrap();
    assert_eq!(written, std::fs::metadata(&path).unwrap().len() as usize);

    let decoded = netpbm::decode_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(decoded, image);
    assert!(netpbm::decode_file(&path).is_err());
}
