//! SPDY frame types and decoding.
//!
//! SPDY frames have a common 8-byte header. The top bit of the first byte
//! distinguishes control frames from data frames:
//! ```text
//! +----------------------------------+
//! |C|       Stream-ID (31bits)       |   C = 0: data frame
//! +----------------------------------+
//! | Flags (8)  |  Length (24 bits)   |
//! +----------------------------------+
//!
//! +----------------------------------+
//! |C| Version(15bits) | Type(16bits) |   C = 1: control frame
//! +----------------------------------+
//! | Flags (8)  |  Length (24 bits)   |
//! +----------------------------------+
//! |               Data               |
//! +----------------------------------+
//! ```
//! All fields are big-endian.

mod decode;
mod error;
mod sink;
mod types;

pub use decode::SpdyFrameDecoder;
pub use error::{FrameError, SettingId, StatusCode};
pub use sink::FrameSink;
pub use types::*;

/// Frame header size in bytes.
pub const SPDY_HEADER_SIZE: usize = 8;

/// Maximum frame payload length expressible in the 24-bit length field.
pub const MAX_FRAME_LENGTH: u32 = 16_777_215;

/// Default upper bound on the size of a single data slice handed to the
/// sink. Larger frames are delivered as multiple slices.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 8_192;

/// Size of one SETTINGS entry on the wire: id-flags(1) | id(3) | value(4).
pub const SETTING_ENTRY_SIZE: usize = 8;

/// Fixed SYN_STREAM payload prefix preceding the header block:
/// stream-id(4) | associated-stream-id(4) | priority(1) | unused(1).
pub const SYN_STREAM_PREFIX_SIZE: usize = 10;
