//! Concrete wire formats for encoded object graphs.
//!
//! The transcoding core stops at the [`Document`] structure; this crate
//! carries it across process boundaries: JSON text for readability and
//! interchange, bincode for compact binary, plus file helpers and
//! [`expand`], a reference-expanding view for debugging dumps.
//!
//! [`Document`]: ogt_transcode::Document

pub mod binary;
pub mod error;
pub mod expand;
pub mod json;

pub use binary::{from_bytes, to_bytes};
pub use error::{WireError, WireResult};
pub use expand::expand;
pub use json::{from_file, from_json, to_file, to_json, to_json_pretty};
