//! Identity-preserving graph transcoding core.
//!
//! Flattens a possibly cyclic, aliased graph of objects into a sequence of
//! [`Record`]s and reconstructs it with referential identity intact: an
//! instance referenced from many places is encoded once and decoded once,
//! and every path to it resolves to the same reconstructed instance.
//!
//! # Shape of an encoding
//!
//! One [`Record`] per distinct reachable instance, in first-discovery order.
//! Reference-typed field values become [`Encoded::Ref`] markers carrying the
//! target's [`RecordId`]; scalars and collections are carried in place. The
//! resulting [`Document`] also names the root ids, so decoding hands the
//! original roots back.
//!
//! Decoding is two-phase (allocate every instance, then populate fields), so
//! record order never matters and cycles need no special casing.
//!
//! The core is synchronous and in-memory; each encode or decode call owns
//! its own index state and shares nothing.
//!
//! [`RecordId`]: ogt_types::RecordId

pub mod decode;
pub mod encode;
pub mod error;
pub mod index;
pub mod record;

pub use decode::{decode, Decoded};
pub use encode::encode;
pub use error::{TranscodeError, TranscodeResult};
pub use index::{Bindings, RefIndex};
pub use record::{Document, Encoded, Record};
