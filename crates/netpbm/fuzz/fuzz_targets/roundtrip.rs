#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use netpbm::netpbm_core::bytestream::ZCursor;
    use netpbm::netpbm_core::options::DecoderOptions;

    let options = DecoderOptions::default()
        .set_max_width(512)
        .set_max_height(512);

    let mut decoder = netpbm::PnmDecoder::new_with_options(ZCursor::new(data), options);

    if let Ok(image) = decoder.decode() {
        // anything we decode must survive an encode and decode unchanged
        let mut sink = vec![];
        netpbm::encode(&image, &mut sink).unwrap();
        let again = netpbm::decode(ZCursor::new(&sink)).unwrap();
        assert_eq!(image, again);
    }
});
