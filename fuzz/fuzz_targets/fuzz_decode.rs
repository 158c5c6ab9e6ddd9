#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input.
    let _ = bmpview::probe(data);
    if let Ok(bitmap) = bmpview::decode_bmp(data, enough::Unstoppable) {
        let mut frame = bmpview::FrameBuffer::new(bitmap.width().min(64), bitmap.height().min(64));
        bmpview::render(&bitmap, &bmpview::DisplayParameters::default(), (0, 0), &mut frame);
        let _ = bmpview::Histogram::from_bitmap(&bitmap, &bmpview::DisplayParameters::default());
    }
});
