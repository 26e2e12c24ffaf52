#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use spdy::{SpdyFrameDecoder, SpdyVersion};

fuzz_target!(|data: &[u8]| {
    // Whole-buffer decode: must never panic, and must leave at most a
    // partial frame unread.
    let mut decoder = SpdyFrameDecoder::new(SpdyVersion::Spdy31, ());
    let mut buf = BytesMut::from(data);
    decoder.decode(&mut buf);

    // Split-buffer decode: feeding the same input a few bytes at a time
    // must also never panic, regardless of where the chunk boundaries
    // land relative to frame boundaries.
    let mut decoder = SpdyFrameDecoder::new(SpdyVersion::Spdy31, ());
    let mut buf = BytesMut::new();
    for chunk in data.chunks(3) {
        buf.extend_from_slice(chunk);
        decoder.decode(&mut buf);
    }
});
