//! PARAM.SFO decoding for PlayStation 3 titles.
//!
//! Every PS3 title carries a `PARAM.SFO` container describing it: title,
//! title ID, category, versions, parental level and so on. This crate turns
//! that binary container into an [`Sfo`] key/value mapping.
//!
//! Only reading is supported.

mod category;
mod decoder;
pub mod error;
pub mod format;
mod param;

pub use category::Category;
pub use decoder::{decode_sfo, decode_sfo_bytes, decode_sfo_file, read_header};
pub use error::SfoError;
pub use format::{DataFormat, SfoHeader};
pub use param::{Sfo, SfoValue, keys};
