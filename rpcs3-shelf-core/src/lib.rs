//! Shared building blocks for rpcs3-shelf.
//!
//! - [`HostPlatform`]: the operating system the emulator runs on, with its
//!   executable naming and default configuration location
//! - [`util`]: little-endian and NUL-terminated byte helpers used by the
//!   PARAM.SFO decoder
//! - [`ReadSeek`]: the reader bound every decoder accepts

use std::io::{Read, Seek};

pub mod host;
pub mod util;

pub use host::{HostPlatform, HostPlatformParseError};

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}
