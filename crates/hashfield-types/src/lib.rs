//! # hashfield-types — Pluggable Field Types
//!
//! Defines the field-type contract consumed by the mapping layer and the
//! implementations registered against it.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): `FieldType`, the object-safe five-operation
//!   contract (declare storage kind, validate, prepare, restore, equals).
//!   Field types are registered explicitly by reference; there is no
//!   implicit dispatch.
//!
//! - **Hashed** (`hashed.rs`): `HashedField` stores the SHA-256 digest of a
//!   value's canonical text and compares plaintext against digests without
//!   the caller tracking which side is which.
//!
//! - **Value** (`value.rs`): `FieldValue` tags an operand as plaintext or
//!   digest for callers that want an unambiguous comparison.
//!
//! - **Plain** (`plain.rs`): `PlainTextField` stores text verbatim.
//!
//! ## Crate Policy
//!
//! - Depends only on `hashfield-core` internally.
//! - Field types are stateless, `Send + Sync`, and perform no I/O.
//! - Plaintext and digests never appear in log events.

pub mod hashed;
pub mod plain;
pub mod traits;
pub mod value;

pub use hashed::HashedField;
pub use plain::PlainTextField;
pub use traits::FieldType;
pub use value::FieldValue;
