//! SPDY frame type definitions.

use std::fmt;

/// SPDY protocol dialects understood by the codec.
///
/// SPDY/3 and SPDY/3.1 share wire version 3; 3.1 adds session-level flow
/// control on top of the same framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpdyVersion {
    Spdy3,
    Spdy31,
}

impl SpdyVersion {
    /// The version carried in control frame headers for this dialect.
    pub fn wire_version(self) -> u16 {
        match self {
            SpdyVersion::Spdy3 | SpdyVersion::Spdy31 => 3,
        }
    }
}

/// SPDY control frame types (SPDY/3 draft section 2.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FrameType {
    SynStream = 0x1,
    SynReply = 0x2,
    RstStream = 0x3,
    Settings = 0x4,
    Ping = 0x6,
    GoAway = 0x7,
    Headers = 0x8,
    WindowUpdate = 0x9,
}

impl FrameType {
    /// Try to convert a wire type code to a frame type.
    ///
    /// Type 0x5 (NOOP) was removed in SPDY/3 and is treated as unknown.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            0x1 => Some(FrameType::SynStream),
            0x2 => Some(FrameType::SynReply),
            0x3 => Some(FrameType::RstStream),
            0x4 => Some(FrameType::Settings),
            0x6 => Some(FrameType::Ping),
            0x7 => Some(FrameType::GoAway),
            0x8 => Some(FrameType::Headers),
            0x9 => Some(FrameType::WindowUpdate),
            _ => None,
        }
    }

    pub fn to_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameType::SynStream => write!(f, "SYN_STREAM"),
            FrameType::SynReply => write!(f, "SYN_REPLY"),
            FrameType::RstStream => write!(f, "RST_STREAM"),
            FrameType::Settings => write!(f, "SETTINGS"),
            FrameType::Ping => write!(f, "PING"),
            FrameType::GoAway => write!(f, "GOAWAY"),
            FrameType::Headers => write!(f, "HEADERS"),
            FrameType::WindowUpdate => write!(f, "WINDOW_UPDATE"),
        }
    }
}

/// Frame flags.
pub mod flags {
    /// DATA/SYN_STREAM/SYN_REPLY/HEADERS: last frame from the sender on
    /// this stream.
    pub const FIN: u8 = 0x01;
    /// SYN_STREAM: the stream carries no response.
    pub const UNIDIRECTIONAL: u8 = 0x02;
    /// SETTINGS: clear previously persisted settings before applying.
    pub const CLEAR_SETTINGS: u8 = 0x01;
    /// SETTINGS entry: the receiver should persist this value.
    pub const PERSIST_VALUE: u8 = 0x01;
    /// SETTINGS entry: this value was previously persisted by the sender.
    pub const PERSISTED: u8 = 0x02;
}

/// Stream identifier (31 bits, high bit reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StreamId(pub u32);

impl StreamId {
    /// The session-level stream (stream 0).
    pub const SESSION: StreamId = StreamId(0);

    /// Create a new stream ID, masking the reserved bit.
    #[inline]
    pub fn new(id: u32) -> Self {
        StreamId(id & 0x7FFF_FFFF)
    }

    /// Get the raw stream ID value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Check if this identifies the session rather than a stream.
    #[inline]
    pub fn is_session_level(self) -> bool {
        self.0 == 0
    }

    /// Check if this is a client-initiated stream (odd numbers).
    #[inline]
    pub fn is_client_initiated(self) -> bool {
        self.0 % 2 == 1
    }

    /// Check if this is a server-initiated stream (even numbers, non-zero).
    #[inline]
    pub fn is_server_initiated(self) -> bool {
        self.0 != 0 && self.0.is_multiple_of(2)
    }
}

impl From<u32> for StreamId {
    fn from(id: u32) -> Self {
        StreamId::new(id)
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
