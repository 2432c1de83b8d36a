//! Foundation types for the object graph transcoder (OGT).
//!
//! This crate provides the core identity and value types used throughout the
//! OGT system. Every other OGT crate depends on `ogt-types`.
//!
//! # Key Types
//!
//! - [`RecordId`] — Session-scoped identifier assigned in first-discovery order
//! - [`TypeTag`] — Name under which a concrete type is registered
//! - [`Value`] — A live field value: scalar, instance reference, or collection
//! - [`Instance`] — Shared handle to a dynamic object, compared by identity

pub mod instance;
pub mod record_id;
pub mod tag;
pub mod value;

pub use instance::Instance;
pub use record_id::RecordId;
pub use tag::TypeTag;
pub use value::Value;
