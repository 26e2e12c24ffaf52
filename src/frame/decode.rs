//! SPDY frame decoding.

use bytes::{Buf, BytesMut};

use super::error::FrameError;
use super::sink::FrameSink;
use super::types::{FrameType, SpdyVersion, StreamId, flags};
use super::{DEFAULT_MAX_CHUNK_SIZE, SETTING_ENTRY_SIZE, SPDY_HEADER_SIZE, SYN_STREAM_PREFIX_SIZE};

/// Decoder state, with inline scratch for the frame being decoded.
///
/// No scratch is live in `ReadCommonHeader`; every other state carries
/// exactly what it needs to resume when more input arrives.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Between frames, waiting for an 8-byte common header.
    ReadCommonHeader,
    /// Waiting for the fixed payload prefix of a recognized control frame.
    ReadControlFramePayload {
        frame_type: FrameType,
        frame_flags: u8,
        length: u32,
    },
    /// Reading 8-byte SETTINGS entries.
    ReadSettings { num_settings: u32 },
    /// Streaming the compressed header block to the sink.
    ReadHeaderBlock { length: u32 },
    /// Streaming a data frame payload to the sink.
    ReadDataFramePayload {
        stream_id: StreamId,
        frame_flags: u8,
        length: u32,
    },
    /// Dropping the rest of the current frame without events.
    DiscardFrame { length: u32 },
    /// A structural violation was detected; report it, then discard.
    FrameError { error: FrameError, remaining: u32 },
}

/// Streaming SPDY frame decoder.
///
/// Push-driven: the owner feeds received bytes via [`decode`] and events
/// are delivered to the bound [`FrameSink`]. The decoder consumes as many
/// leading bytes as it can and leaves the rest in the caller's buffer for
/// the next call, so input may be chunked at arbitrary boundaries.
///
/// `decode` never fails: malformed frames produce one
/// [`FrameSink::on_frame_error`] event, the declared remainder of the
/// frame is discarded, and decoding resumes at the next frame header.
///
/// [`decode`]: SpdyFrameDecoder::decode
pub struct SpdyFrameDecoder<S> {
    version: u16,
    max_chunk_size: usize,
    state: State,
    sink: S,
}

impl<S: FrameSink> SpdyFrameDecoder<S> {
    /// Create a decoder for the given protocol dialect, bound to `sink`
    /// for the lifetime of the connection.
    pub fn new(version: SpdyVersion, sink: S) -> Self {
        Self {
            version: version.wire_version(),
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            state: State::ReadCommonHeader,
            sink,
        }
    }

    /// Set the upper bound on the size of a single data slice handed to
    /// the sink.
    pub fn set_max_chunk_size(&mut self, size: usize) {
        self.max_chunk_size = size.max(1);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Consume as many leading bytes of `buf` as possible, emitting events
    /// to the sink. Returns when the buffer is exhausted for the current
    /// state; unread bytes stay in `buf`.
    pub fn decode(&mut self, buf: &mut BytesMut) {
        loop {
            match self.state {
                State::ReadCommonHeader => {
                    if buf.len() < SPDY_HEADER_SIZE {
                        return;
                    }
                    self.state = self.read_common_header(buf);
                }
                State::ReadControlFramePayload {
                    frame_type,
                    frame_flags,
                    length,
                } => {
                    if buf.len() < fixed_prefix_size(frame_type) {
                        return;
                    }
                    self.state =
                        self.read_control_frame_payload(buf, frame_type, frame_flags, length);
                }
                State::ReadSettings { num_settings } => {
                    let mut remaining = num_settings;
                    while remaining > 0 && buf.len() >= SETTING_ENTRY_SIZE {
                        let id_flags = buf.get_u8();
                        let id = buf.get_uint(3) as u32;
                        let value = buf.get_u32();
                        self.sink.on_setting(
                            id,
                            value,
                            id_flags & flags::PERSIST_VALUE != 0,
                            id_flags & flags::PERSISTED != 0,
                        );
                        remaining -= 1;
                    }
                    if remaining > 0 {
                        self.state = State::ReadSettings {
                            num_settings: remaining,
                        };
                        return;
                    }
                    self.sink.on_settings_end();
                    self.state = State::ReadCommonHeader;
                }
                State::ReadHeaderBlock { length } => {
                    if length == 0 {
                        self.sink.on_header_block_end();
                        self.state = State::ReadCommonHeader;
                        continue;
                    }
                    if buf.is_empty() {
                        return;
                    }
                    let n = buf.len().min(length as usize);
                    let chunk = buf.split_to(n);
                    self.sink.on_header_block(&chunk);
                    self.state = State::ReadHeaderBlock {
                        length: length - n as u32,
                    };
                }
                State::ReadDataFramePayload {
                    stream_id,
                    frame_flags,
                    length,
                } => {
                    if buf.is_empty() {
                        return;
                    }
                    let n = buf.len().min(length as usize).min(self.max_chunk_size);
                    let chunk = buf.split_to(n);
                    let remaining = length - n as u32;
                    // FIN is only signaled on the slice that completes the frame.
                    let fin = remaining == 0 && frame_flags & flags::FIN != 0;
                    self.sink.on_data_frame(stream_id, fin, &chunk);
                    self.state = if remaining == 0 {
                        State::ReadCommonHeader
                    } else {
                        State::ReadDataFramePayload {
                            stream_id,
                            frame_flags,
                            length: remaining,
                        }
                    };
                }
                State::DiscardFrame { length } => {
                    if length == 0 {
                        self.state = State::ReadCommonHeader;
                        continue;
                    }
                    if buf.is_empty() {
                        return;
                    }
                    let n = buf.len().min(length as usize);
                    buf.advance(n);
                    self.state = State::DiscardFrame {
                        length: length - n as u32,
                    };
                }
                State::FrameError { error, remaining } => {
                    self.sink.on_frame_error(error);
                    self.state = State::DiscardFrame { length: remaining };
                }
            }
        }
    }

    /// Parse the 8-byte common header and dispatch on frame kind.
    fn read_common_header(&mut self, buf: &mut BytesMut) -> State {
        debug_assert!(buf.len() >= SPDY_HEADER_SIZE);

        let control = buf[0] & 0x80 != 0;
        let frame_flags = buf[4];
        // Length is 24 bits (3 bytes), big-endian
        let length = ((buf[5] as u32) << 16) | ((buf[6] as u32) << 8) | (buf[7] as u32);

        if control {
            // Version is 15 bits, type is 16 bits, both big-endian
            let version = (((buf[0] as u16) << 8) | (buf[1] as u16)) & 0x7FFF;
            let frame_type = ((buf[2] as u16) << 8) | (buf[3] as u16);
            buf.advance(SPDY_HEADER_SIZE);
            self.dispatch_control_frame(version, frame_type, frame_flags, length)
        } else {
            // Stream ID is 31 bits (4 bytes), big-endian, high bit reserved
            let stream_id = StreamId::new(
                ((buf[0] as u32) << 24)
                    | ((buf[1] as u32) << 16)
                    | ((buf[2] as u32) << 8)
                    | (buf[3] as u32),
            );
            buf.advance(SPDY_HEADER_SIZE);

            if stream_id.is_session_level() {
                return State::FrameError {
                    error: FrameError::InvalidDataFrame,
                    remaining: length,
                };
            }
            if length == 0 {
                self.sink
                    .on_data_frame(stream_id, frame_flags & flags::FIN != 0, &[]);
                return State::ReadCommonHeader;
            }
            State::ReadDataFramePayload {
                stream_id,
                frame_flags,
                length,
            }
        }
    }

    fn dispatch_control_frame(
        &mut self,
        version: u16,
        frame_type: u16,
        frame_flags: u8,
        length: u32,
    ) -> State {
        if version != self.version {
            return State::FrameError {
                error: FrameError::UnsupportedVersion { version },
                remaining: length,
            };
        }

        // Unknown control frame types are skipped without an event.
        let Some(frame_type) = FrameType::from_u16(frame_type) else {
            return State::DiscardFrame { length };
        };

        if let Err(error) = validate_control_header(frame_type, frame_flags, length) {
            return State::FrameError {
                error,
                remaining: length,
            };
        }

        State::ReadControlFramePayload {
            frame_type,
            frame_flags,
            length,
        }
    }

    /// Read the fixed payload prefix of a recognized control frame, check
    /// field-level constraints, and emit the frame event.
    ///
    /// The caller has already verified the prefix is buffered and that the
    /// declared length satisfies the per-type constraint.
    fn read_control_frame_payload(
        &mut self,
        buf: &mut BytesMut,
        frame_type: FrameType,
        frame_flags: u8,
        length: u32,
    ) -> State {
        match frame_type {
            FrameType::SynStream => {
                let stream_id = StreamId::new(buf.get_u32());
                let associated_stream_id = StreamId::new(buf.get_u32());
                let priority = (buf.get_u8() >> 5) & 0x07;
                buf.advance(1); // unused byte
                let remaining = length - SYN_STREAM_PREFIX_SIZE as u32;
                if stream_id.is_session_level() {
                    return State::FrameError {
                        error: FrameError::StreamIdRequired { frame_type },
                        remaining,
                    };
                }
                self.sink.on_syn_stream_frame(
                    stream_id,
                    associated_stream_id,
                    priority,
                    frame_flags & flags::FIN != 0,
                    frame_flags & flags::UNIDIRECTIONAL != 0,
                );
                State::ReadHeaderBlock { length: remaining }
            }
            FrameType::SynReply => {
                let stream_id = StreamId::new(buf.get_u32());
                let remaining = length - 4;
                if stream_id.is_session_level() {
                    return State::FrameError {
                        error: FrameError::StreamIdRequired { frame_type },
                        remaining,
                    };
                }
                self.sink
                    .on_syn_reply_frame(stream_id, frame_flags & flags::FIN != 0);
                State::ReadHeaderBlock { length: remaining }
            }
            FrameType::RstStream => {
                let stream_id = StreamId::new(buf.get_u32());
                let status_code = buf.get_u32();
                if stream_id.is_session_level() {
                    return State::FrameError {
                        error: FrameError::StreamIdRequired { frame_type },
                        remaining: 0,
                    };
                }
                if status_code == 0 {
                    return State::FrameError {
                        error: FrameError::InvalidStatusCode,
                        remaining: 0,
                    };
                }
                self.sink.on_rst_stream_frame(stream_id, status_code);
                State::ReadCommonHeader
            }
            FrameType::Settings => {
                let num_settings = buf.get_u32();
                let remaining = length - 4;
                if num_settings as u64 * SETTING_ENTRY_SIZE as u64 != remaining as u64 {
                    return State::FrameError {
                        error: FrameError::InvalidSettingCount {
                            num_settings,
                            length,
                        },
                        remaining,
                    };
                }
                self.sink
                    .on_settings_frame(frame_flags & flags::CLEAR_SETTINGS != 0);
                if num_settings == 0 {
                    self.sink.on_settings_end();
                    return State::ReadCommonHeader;
                }
                State::ReadSettings { num_settings }
            }
            FrameType::Ping => {
                let id = buf.get_u32();
                self.sink.on_ping_frame(id);
                State::ReadCommonHeader
            }
            FrameType::GoAway => {
                let last_good_stream_id = StreamId::new(buf.get_u32());
                let status_code = buf.get_u32();
                self.sink.on_goaway_frame(last_good_stream_id, status_code);
                State::ReadCommonHeader
            }
            FrameType::Headers => {
                let stream_id = StreamId::new(buf.get_u32());
                let remaining = length - 4;
                if stream_id.is_session_level() {
                    return State::FrameError {
                        error: FrameError::StreamIdRequired { frame_type },
                        remaining,
                    };
                }
                self.sink
                    .on_headers_frame(stream_id, frame_flags & flags::FIN != 0);
                State::ReadHeaderBlock { length: remaining }
            }
            FrameType::WindowUpdate => {
                // WINDOW_UPDATE on stream 0 adjusts the session window.
                let stream_id = StreamId::new(buf.get_u32());
                let delta_window_size = buf.get_u32() & 0x7FFF_FFFF;
                if delta_window_size == 0 {
                    return State::FrameError {
                        error: FrameError::InvalidWindowDelta,
                        remaining: 0,
                    };
                }
                self.sink
                    .on_window_update_frame(stream_id, delta_window_size);
                State::ReadCommonHeader
            }
        }
    }
}

/// Check the header-derived constraints for a control frame: per-type
/// length rules, and flags on types that admit none.
fn validate_control_header(
    frame_type: FrameType,
    frame_flags: u8,
    length: u32,
) -> Result<(), FrameError> {
    let valid_length = match frame_type {
        FrameType::SynStream => length >= SYN_STREAM_PREFIX_SIZE as u32,
        FrameType::SynReply | FrameType::Headers => length >= 4,
        FrameType::RstStream | FrameType::GoAway | FrameType::WindowUpdate => length == 8,
        FrameType::Settings => length >= 4 && (length - 4).is_multiple_of(SETTING_ENTRY_SIZE as u32),
        FrameType::Ping => length == 4,
    };
    if !valid_length {
        return Err(FrameError::InvalidLength { frame_type, length });
    }
    if frame_type == FrameType::RstStream && frame_flags != 0 {
        return Err(FrameError::InvalidFlags {
            frame_type,
            flags: frame_flags,
        });
    }
    Ok(())
}

/// Bytes of fixed payload that must be buffered before a recognized
/// control frame can be processed.
fn fixed_prefix_size(frame_type: FrameType) -> usize {
    match frame_type {
        FrameType::SynStream => SYN_STREAM_PREFIX_SIZE,
        FrameType::SynReply | FrameType::Headers | FrameType::Settings | FrameType::Ping => 4,
        FrameType::RstStream | FrameType::GoAway | FrameType::WindowUpdate => 8,
    }
}
