//! The event receiver driven by the frame decoder.

use super::error::FrameError;
use super::types::StreamId;

/// Receiver for decoded frame events.
///
/// One method per event, each with an empty default body: an
/// implementation overrides only the events it cares about. Callbacks are
/// synchronous and must not fail; byte slices are borrowed from the
/// decoder's input and must be copied if they need to outlive the call.
///
/// Event ordering follows the wire: for SYN_STREAM, SYN_REPLY, and
/// HEADERS the frame event precedes any [`on_header_block`] slices, which
/// precede the single [`on_header_block_end`]; for SETTINGS the frame
/// event precedes the per-entry [`on_setting`] calls, which precede
/// [`on_settings_end`].
///
/// [`on_header_block`]: FrameSink::on_header_block
/// [`on_header_block_end`]: FrameSink::on_header_block_end
/// [`on_setting`]: FrameSink::on_setting
/// [`on_settings_end`]: FrameSink::on_settings_end
pub trait FrameSink {
    /// Data frame payload. A frame may arrive as multiple slices; `fin` is
    /// true only on the slice that completes a frame carrying the FIN flag.
    /// An empty frame is delivered as a single empty slice.
    fn on_data_frame(&mut self, stream_id: StreamId, fin: bool, data: &[u8]) {
        let _ = (stream_id, fin, data);
    }

    /// SYN_STREAM fixed fields. The header block follows via
    /// `on_header_block`.
    fn on_syn_stream_frame(
        &mut self,
        stream_id: StreamId,
        associated_stream_id: StreamId,
        priority: u8,
        fin: bool,
        unidirectional: bool,
    ) {
        let _ = (stream_id, associated_stream_id, priority, fin, unidirectional);
    }

    /// SYN_REPLY fixed fields. The header block follows.
    fn on_syn_reply_frame(&mut self, stream_id: StreamId, fin: bool) {
        let _ = (stream_id, fin);
    }

    fn on_rst_stream_frame(&mut self, stream_id: StreamId, status_code: u32) {
        let _ = (stream_id, status_code);
    }

    /// SETTINGS frame header. Entries follow via `on_setting`.
    fn on_settings_frame(&mut self, clear_persisted: bool) {
        let _ = clear_persisted;
    }

    /// One SETTINGS entry. `id` is the raw 24-bit identifier; see
    /// [`SettingId`](super::SettingId) for the SPDY/3 vocabulary.
    fn on_setting(&mut self, id: u32, value: u32, persist_value: bool, persisted: bool) {
        let _ = (id, value, persist_value, persisted);
    }

    fn on_settings_end(&mut self) {}

    fn on_ping_frame(&mut self, id: u32) {
        let _ = id;
    }

    fn on_goaway_frame(&mut self, last_good_stream_id: StreamId, status_code: u32) {
        let _ = (last_good_stream_id, status_code);
    }

    /// HEADERS fixed fields. The header block follows.
    fn on_headers_frame(&mut self, stream_id: StreamId, fin: bool) {
        let _ = (stream_id, fin);
    }

    fn on_window_update_frame(&mut self, stream_id: StreamId, delta_window_size: u32) {
        let _ = (stream_id, delta_window_size);
    }

    /// A slice of the compressed header block. The block may arrive as
    /// multiple slices as input becomes available; the downstream inflater
    /// must tolerate partial input.
    fn on_header_block(&mut self, data: &[u8]) {
        let _ = data;
    }

    /// The current frame's header block is complete.
    fn on_header_block_end(&mut self) {}

    /// A structural violation in the current frame. The decoder discards
    /// the rest of the frame and resumes at the next frame header.
    fn on_frame_error(&mut self, error: FrameError) {
        let _ = error;
    }
}

/// Null sink: decode for validation only, dropping every event.
impl FrameSink for () {}
