//! SPDY frame errors and wire vocabularies.

use std::fmt;

use super::types::FrameType;

/// Structural violations detected while decoding a frame.
///
/// Delivered through [`FrameSink::on_frame_error`](super::FrameSink); the
/// `Display` rendering is the human-readable reason. Errors are local to
/// the offending frame: the decoder discards the frame's declared payload
/// and resumes at the next frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Control frame declaring a version other than the configured one.
    #[error("unsupported protocol version {version}")]
    UnsupportedVersion { version: u16 },
    /// Data frame with a zero stream ID.
    #[error("invalid data frame")]
    InvalidDataFrame,
    /// Frame length violates the per-type constraint.
    #[error("{frame_type} frame has invalid length {length}")]
    InvalidLength { frame_type: FrameType, length: u32 },
    /// Non-zero flags on a frame type that admits none.
    #[error("{frame_type} frame has invalid flags 0x{flags:02x}")]
    InvalidFlags { frame_type: FrameType, flags: u8 },
    /// Zero stream ID where a stream is required.
    #[error("{frame_type} frame requires non-zero stream ID")]
    StreamIdRequired { frame_type: FrameType },
    /// RST_STREAM status code must be non-zero.
    #[error("RST_STREAM status code must be non-zero")]
    InvalidStatusCode,
    /// WINDOW_UPDATE delta window size must be non-zero.
    #[error("delta window size must be non-zero")]
    InvalidWindowDelta,
    /// SETTINGS entry count inconsistent with the frame length.
    #[error("SETTINGS count {num_settings} inconsistent with length {length}")]
    InvalidSettingCount { num_settings: u32, length: u32 },
}

/// SPDY stream status codes (SPDY/3 draft section 2.6.3).
///
/// Carried in RST_STREAM frames; the first three double as GOAWAY session
/// status codes. The decoder delivers the raw value; this type is the
/// interpretive layer for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// Generic protocol violation.
    ProtocolError,
    /// Frame for a stream that is not active.
    InvalidStream,
    /// Stream declined before any processing.
    RefusedStream,
    /// Unsupported version in SYN_STREAM.
    UnsupportedVersion,
    /// Stream no longer needed.
    Cancel,
    /// Implementation fault.
    InternalError,
    /// Flow-control window violated.
    FlowControlError,
    /// SYN_STREAM for an already-active stream ID.
    StreamInUse,
    /// Data on a half-closed stream.
    StreamAlreadyClosed,
    /// Client certificate vector credential rejected.
    InvalidCredentials,
    /// Frame exceeded the receiver's limits.
    FrameTooLarge,
    /// Status code not defined by SPDY/3.
    Unknown(u32),
}

impl StatusCode {
    pub fn from_u32(code: u32) -> Self {
        match code {
            1 => StatusCode::ProtocolError,
            2 => StatusCode::InvalidStream,
            3 => StatusCode::RefusedStream,
            4 => StatusCode::UnsupportedVersion,
            5 => StatusCode::Cancel,
            6 => StatusCode::InternalError,
            7 => StatusCode::FlowControlError,
            8 => StatusCode::StreamInUse,
            9 => StatusCode::StreamAlreadyClosed,
            10 => StatusCode::InvalidCredentials,
            11 => StatusCode::FrameTooLarge,
            _ => StatusCode::Unknown(code),
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            StatusCode::ProtocolError => 1,
            StatusCode::InvalidStream => 2,
            StatusCode::RefusedStream => 3,
            StatusCode::UnsupportedVersion => 4,
            StatusCode::Cancel => 5,
            StatusCode::InternalError => 6,
            StatusCode::FlowControlError => 7,
            StatusCode::StreamInUse => 8,
            StatusCode::StreamAlreadyClosed => 9,
            StatusCode::InvalidCredentials => 10,
            StatusCode::FrameTooLarge => 11,
            StatusCode::Unknown(code) => code,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::ProtocolError => write!(f, "PROTOCOL_ERROR"),
            StatusCode::InvalidStream => write!(f, "INVALID_STREAM"),
            StatusCode::RefusedStream => write!(f, "REFUSED_STREAM"),
            StatusCode::UnsupportedVersion => write!(f, "UNSUPPORTED_VERSION"),
            StatusCode::Cancel => write!(f, "CANCEL"),
            StatusCode::InternalError => write!(f, "INTERNAL_ERROR"),
            StatusCode::FlowControlError => write!(f, "FLOW_CONTROL_ERROR"),
            StatusCode::StreamInUse => write!(f, "STREAM_IN_USE"),
            StatusCode::StreamAlreadyClosed => write!(f, "STREAM_ALREADY_CLOSED"),
            StatusCode::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            StatusCode::FrameTooLarge => write!(f, "FRAME_TOO_LARGE"),
            StatusCode::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

/// Known setting identifiers (SPDY/3 draft section 2.6.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingId {
    UploadBandwidth,
    DownloadBandwidth,
    RoundTripTime,
    MaxConcurrentStreams,
    CurrentCwnd,
    DownloadRetransRate,
    InitialWindowSize,
    ClientCertificateVectorSize,
    /// Setting ID not defined by SPDY/3.
    Unknown(u32),
}

impl SettingId {
    pub fn from_u32(id: u32) -> Self {
        match id {
            1 => SettingId::UploadBandwidth,
            2 => SettingId::DownloadBandwidth,
            3 => SettingId::RoundTripTime,
            4 => SettingId::MaxConcurrentStreams,
            5 => SettingId::CurrentCwnd,
            6 => SettingId::DownloadRetransRate,
            7 => SettingId::InitialWindowSize,
            8 => SettingId::ClientCertificateVectorSize,
            _ => SettingId::Unknown(id),
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            SettingId::UploadBandwidth => 1,
            SettingId::DownloadBandwidth => 2,
            SettingId::RoundTripTime => 3,
            SettingId::MaxConcurrentStreams => 4,
            SettingId::CurrentCwnd => 5,
            SettingId::DownloadRetransRate => 6,
            SettingId::InitialWindowSize => 7,
            SettingId::ClientCertificateVectorSize => 8,
            SettingId::Unknown(id) => id,
        }
    }
}
