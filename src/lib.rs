//! # http-downloader
//!
//! A streaming, async HTTP downloader library for Rust.
//!
//! Features:
//! - Chunk-ordered streaming writes (never buffers the whole payload)
//! - Replay-latest progress reporting (fraction + cumulative bytes)
//! - Whole-transfer timeout with cooperative cancellation
//! - Download to a path, to any async sink, or to a self-deleting temp file

mod stream;
mod remote_file;
pub mod error;
pub mod progress;
pub mod download_options;
pub mod downloader;
pub mod temp_stream;
