/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};

use netpbm::netpbm_core::bytestream::ZCursor;
use netpbm::netpbm_core::image::PixelData;
use netpbm::netpbm_core::options::DecoderOptions;
use netpbm::netpbm_core::pixel::Rgb;
use netpbm::netpbm_core::variant::Variant;
use netpbm::{PnmDecodeErrors, PnmDecoder};

fn bits(data: &[u8]) -> Vec<bool> {
    match netpbm::decode(ZCursor::new(data)).unwrap().into_pixels() {
        PixelData::Bitmap(buffer) => buffer.into_vec(),
        _ => panic!("expected a bitmap")
    }
}

#[test]
fn packed_bitmap_four_by_four() {
    // two high nibbles set, low nibble is row padding
    let data = b"P4\n4 4\n\xF0\xF0\xF0\xF0";
    let image = netpbm::decode(ZCursor::new(data)).unwrap();

    assert_eq!(image.dimensions(), (4, 4));
    assert_eq!(image.variant(), Variant::BitmapBinary);
    assert_eq!(image.max_value(), 1);
    assert_eq!(bits(data), vec![true; 16]);
}

#[test]
fn packed_bitmap_ignores_padding_bits() {
    // 3 pixels per row, padding bits set to garbage
    assert_eq!(
        bits(b"P4 3 2\n\xBF\x5F"),
        vec![true, false, true, false, true, false]
    );
}

#[test]
fn packed_bitmap_multiple_bytes_per_row() {
    assert_eq!(
        bits(b"P4\n9 1\n\x80\x80"),
        vec![true, false, false, false, false, false, false, false, true]
    );
}

#[test]
fn comments_between_header_fields() {
    let data = b"#first\nP2\n# width next\n2 # trailing\n#\n\n1\n#max\n255\n1 2\n";
    let image = netpbm::decode(ZCursor::new(data)).unwrap();

    match image.pixels() {
        PixelData::Graymap(buffer) => assert_eq!(buffer.as_slice(), &[1, 2]),
        _ => panic!("expected a graymap")
    }
}

#[test]
fn text_samples_ignore_line_structure() {
    let data = b"P3 2 2 255 1 2 3 4\n5 6 7 8 9\r\n10 11 12";
    let image = netpbm::decode(ZCursor::new(data)).unwrap();

    match image.pixels() {
        PixelData::Pixmap(buffer) => {
            assert_eq!(buffer.get(1, 1), Some(Rgb::new(10, 11, 12)));
            assert_eq!(buffer.get(0, 1), Some(Rgb::new(7, 8, 9)));
        }
        _ => panic!("expected a pixmap")
    }
}

#[test]
fn binary_pixmap() {
    let data = b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06";
    let image = netpbm::decode(ZCursor::new(data)).unwrap();

    match image.pixels() {
        PixelData::Pixmap(buffer) => {
            assert_eq!(buffer.as_slice(), &[Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
        }
        _ => panic!("expected a pixmap")
    }
}

#[test]
fn short_binary_payload_reports_row() {
    let data = b"P5\n3 2\n255\n\x01\x02\x03\x04";
    let err = netpbm::decode(ZCursor::new(data)).unwrap_err();

    assert!(err.is_pixel_data_error());
    assert!(matches!(
        err,
        PnmDecodeErrors::ShortPixelData {
            row:      1,
            expected: 3,
            found:    1
        }
    ));
}

#[test]
fn short_packed_payload() {
    let err = netpbm::decode(ZCursor::new(b"P4\n4 4\n\xF0\xF0")).unwrap_err();
    assert!(matches!(
        err,
        PnmDecodeErrors::ShortPixelData {
            row:      2,
            expected: 1,
            found:    0
        }
    ));
}

#[test]
fn short_text_payload() {
    let err = netpbm::decode(ZCursor::new(b"P2 2 2 255 1 2 3")).unwrap_err();
    assert!(matches!(
        err,
        PnmDecodeErrors::ShortPixelData {
            row:      1,
            expected: 2,
            found:    1
        }
    ));
}

#[test]
fn unparsable_sample() {
    let err = netpbm::decode(ZCursor::new(b"P3 1 1 255 1 x 3")).unwrap_err();
    assert!(err.is_pixel_data_error());
    assert!(matches!(
        err,
        PnmDecodeErrors::InvalidSample {
            row: 0,
            column: 1,
            ..
        }
    ));

    let err = netpbm::decode(ZCursor::new(b"P1 2 1 0 2")).unwrap_err();
    assert!(matches!(
        err,
        PnmDecodeErrors::InvalidSample {
            row: 0,
            column: 1,
            ..
        }
    ));
}

#[test]
fn header_errors_are_format_errors() {
    let cases: [&[u8]; 8] = [
        b"",
        b"P7\n1 1\n255\n",
        b"p6\n1 1\n255\n",
        b"P6\n0 1\n255\n",
        b"P6\n1 -1\n255\n",
        b"P6\n1 1\n256\n",
        b"P2\n1 1\nmax\n",
        b"P5\n1 1"
    ];
    for case in cases {
        let err = netpbm::decode(ZCursor::new(case)).unwrap_err();
        assert!(err.is_format_error(), "{:?} gave {:?}", case, err);
    }
}

#[test]
fn zero_width_is_rejected() {
    let err = netpbm::decode(ZCursor::new(b"P1\n0 3\n")).unwrap_err();
    assert!(matches!(err, PnmDecodeErrors::ZeroDimension("width")));
}

#[test]
fn dimensions_above_limit() {
    let options = DecoderOptions::default()
        .set_max_width(10)
        .set_max_height(10);
    let mut decoder = PnmDecoder::new_with_options(ZCursor::new(b"P5 4 11 255\n"), options);

    assert!(matches!(
        decoder.decode(),
        Err(PnmDecodeErrors::LargeDimensions(10, 11))
    ));
}

#[test]
fn row_length_overflow_without_limits() {
    let options = DecoderOptions::default().set_max_width(usize::MAX);
    let data = format!("P3\n{} 1\n255\n1 2 3\n", usize::MAX / 2);

    for data in [data.clone(), data.replace("P3", "P6")] {
        let mut decoder = PnmDecoder::new_with_options(ZCursor::new(data.as_bytes()), options);
        assert!(matches!(
            decoder.decode(),
            Err(PnmDecodeErrors::LargeDimensions(..))
        ));
    }
}

#[test]
fn decode_from_bufreader() {
    let data = b"P5\n2 2\n255\n\x00\x40\x80\xff".to_vec();
    let reader = BufReader::with_capacity(3, Cursor::new(data));

    let image = netpbm::decode(reader).unwrap();

    match image.pixels() {
        PixelData::Graymap(buffer) => assert_eq!(buffer.as_slice(), &[0, 0x40, 0x80, 0xff]),
        _ => panic!("expected a graymap")
    }
}

/// A source that counts the seeks issued against it
struct CountingSource {
    inner: Cursor<Vec<u8>>,
    seeks: usize
}

impl Read for CountingSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for CountingSource {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.seeks += 1;
        self.inner.seek(pos)
    }
}

#[test]
fn text_payload_from_bufreader_does_not_seek() {
    let mut data = b"P2\n# a comment\n100 100\n255\n".to_vec();
    for i in 0..100 * 100 {
        data.extend_from_slice(format!("{} ", i % 256).as_bytes());
    }
    let mut source = CountingSource {
        inner: Cursor::new(data),
        seeks: 0
    };

    let image = netpbm::decode(BufReader::new(&mut source)).unwrap();

    assert_eq!(image.dimensions(), (100, 100));
    assert_eq!(source.seeks, 0);
}

#[test]
fn trailing_data_is_ignored() {
    let image = netpbm::decode(ZCursor::new(b"P5 1 1 255\n\x07\x08\x09")).unwrap();
    assert_eq!(image.dimensions(), (1, 1));
}
