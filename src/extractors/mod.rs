//! Request extractors: path id and validated write bodies.

pub mod id;
pub mod validated;
pub use id::RecordId;
pub use validated::Validated;
