/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm::{PnmDecodeErrors, PnmDecoder, PnmEncoder};
use netpbm_core::bytestream::ZCursor;
use netpbm_core::image::{Image, PixelBuffer, PixelData};
use netpbm_core::options::DecoderOptions;
use netpbm_core::pixel::{Pixel, Rgb};
use netpbm_core::variant::Variant;
use netpbm_imageprocs::draw::{Draw, Point, Shape};
use netpbm_imageprocs::invert::Invert;
use netpbm_imageprocs::resize::Resize;
use netpbm_imageprocs::traits::OperationsTrait;

#[test]
fn padded_binary_bitmap_is_all_set() {
    let image = netpbm::decode(ZCursor::new(b"P4\n4 4\n\xF0\xF0\xF0\xF0")).unwrap();

    assert_eq!(image.variant(), Variant::BitmapBinary);
    match image.pixels() {
        PixelData::Bitmap(buffer) => assert!(buffer.as_slice().iter().all(|x| *x)),
        _ => panic!("Expected a bitmap")
    }
}

#[test]
fn resize_decoded_pixmap() {
    let mut image = netpbm::decode(ZCursor::new(
        b"P6\n2 2\n255\n\x00\x0a\xff\x64\x0a\xff\x00\x0a\x00\x64\x0b\x00".to_vec()
    ))
    .unwrap();

    Resize::new(1, 1).execute(&mut image).unwrap();

    assert_eq!(image.dimensions(), (1, 1));
    assert_eq!(image.get(0, 0), Some(Pixel::Rgb(Rgb::new(50, 10, 127))));
}

#[test]
fn draw_on_decoded_then_reencode() {
    let mut image = netpbm::decode(ZCursor::new(b"P1\n4 4\n0000 0000 0000 0000")).unwrap();

    let square = [
        Point::new(0, 0),
        Point::new(0, 3),
        Point::new(3, 3),
        Point::new(3, 0)
    ];
    Draw::new(Shape::FilledPolygon(square.to_vec()), Pixel::Bit(true))
        .execute(&mut image)
        .unwrap();
    image.set_variant(Variant::BitmapBinary).unwrap();

    let mut sink = vec![];
    netpbm::encode(&image, &mut sink).unwrap();
    assert_eq!(sink, b"P4\n4 4\n\xF0\xF0\xF0\xF0");
}

#[test]
fn invert_survives_every_variant() {
    let pixels = vec![Rgb::new(1, 2, 3), Rgb::new(40, 50, 60)];
    let image = Image::from_pixmap(PixelBuffer::from_vec(2, 1, pixels).unwrap(), 60).unwrap();
    let inverted = Invert::new().clone_and_execute(&image).unwrap();

    for variant in [Variant::PixmapText, Variant::PixmapBinary] {
        let mut encoder = PnmEncoder::new(&inverted);
        encoder.set_variant(variant).unwrap();

        let mut sink = vec![];
        encoder.encode(&mut sink).unwrap();

        let decoded = netpbm::decode(ZCursor::new(sink)).unwrap();
        assert_eq!(decoded.variant(), variant);
        assert_eq!(decoded.get(1, 0), Some(Pixel::Rgb(Rgb::new(20, 10, 0))));
        assert_eq!(decoded.max_value(), 60);
    }
}

#[test]
fn strict_mode_rejects_samples_above_max() {
    let data = b"P2\n2 1\n10\n3 11\n";

    let lenient = netpbm::decode(ZCursor::new(data)).unwrap();
    assert_eq!(lenient.get(1, 0), Some(Pixel::Gray(11)));

    let options = DecoderOptions::default().set_strict_mode(true);
    let err = PnmDecoder::new_with_options(ZCursor::new(data), options)
        .decode()
        .unwrap_err();

    assert!(err.is_pixel_data_error());
    assert!(matches!(err, PnmDecodeErrors::InvalidSample { row: 0, column: 1, .. }));
}

#[test]
fn headers_without_pixels() {
    let mut decoder = PnmDecoder::new(ZCursor::new(b"P5\n# size\n640 480\n200\n"));
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some((640, 480)));
    assert_eq!(decoder.variant(), Some(Variant::GraymapBinary));
    assert_eq!(decoder.max_value(), Some(200));

    let err = decoder.decode().unwrap_err();
    assert!(err.is_pixel_data_error());
}

#[test]
fn header_types_serialize() {
    let header = serde_json::json!({
        "variant": Variant::PixmapBinary,
        "kind": Variant::PixmapBinary.kind(),
        "first": Rgb::new(1, 2, 3)
    });
    assert_eq!(
        header.to_string(),
        r#"{"first":[1,2,3],"kind":"Pixmap","variant":"P6"}"#
    );
}
