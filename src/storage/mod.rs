//! File storage layer for TaskVault
//!
//! One text file per user under the storage root, containing either
//! plaintext-serialized record text or cipher-transformed text with no
//! embedded format marker. Whether a password protects a given user is
//! out-of-band knowledge; the decrypt-then-validate flow in
//! [`UserStore::load`] compensates for the ambiguity.

pub mod file_io;
pub mod serialize;
pub mod user_store;

pub use serialize::{deserialize_record, serialize_record};
pub use user_store::UserStore;
