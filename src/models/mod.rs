//! Data models for zxbridge
//!
//! Read-only projections of the upstream ZX-Art JSON; nothing here is
//! mutated or persisted, every value is request-scoped.

mod release;

pub use release::{Envelope, EntityRef, PlayableFile, Release};
