//! spdy - SPDY/3.1 framing layer for byte-stream transports.
//!
//! This crate provides the frame decoder that sits between a byte-stream
//! transport and an SPDY session layer. It is push-driven and does not use
//! async/await or tokio: the owner feeds received bytes into the decoder
//! and the decoder emits typed events to a caller-supplied sink.
//!
//! # Features
//!
//! - Streaming decode of arbitrarily chunked input
//! - Zero-copy delivery of data payloads and compressed header blocks
//! - Strict per-frame-type validation with frame-local error recovery
//! - Tolerance for unknown frame types and unknown flag bits
//!
//! # Architecture
//!
//! Everything lives in the `frame` module: `SpdyFrameDecoder` (the
//! resumable frame state machine), `FrameSink` (the event receiver trait
//! implemented by the caller), and the wire vocabulary (`FrameType`,
//! `StreamId`, `FrameError`, status and setting codes).
//!
//! Transport, header-block decompression, and stream/session state are the
//! caller's concern: the decoder hands compressed header-block bytes and
//! data payloads onward without interpreting them.

pub mod frame;

// Re-export commonly used types
pub use frame::{
    DEFAULT_MAX_CHUNK_SIZE, FrameError, FrameSink, FrameType, MAX_FRAME_LENGTH, SPDY_HEADER_SIZE,
    SettingId, SpdyFrameDecoder, SpdyVersion, StatusCode, StreamId,
};
