#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use netpbm::netpbm_core::bytestream::ZCursor;
    use netpbm::netpbm_core::options::DecoderOptions;

    // keep allocations bounded, the header alone can ask for 16k x 16k
    let options = DecoderOptions::default()
        .set_max_width(1024)
        .set_max_height(1024);

    let mut decoder = netpbm::PnmDecoder::new_with_options(ZCursor::new(data), options);
    let _ = decoder.decode();
});
