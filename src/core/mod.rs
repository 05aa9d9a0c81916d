//! Core translation logic: query building, name synthesis, transliteration
//! and legacy record serialization
//!
//! Every function in here is pure and total; all I/O lives in the
//! `upstream` gateway and the `api` handlers.

pub mod naming;
pub mod query;
pub mod records;
pub mod translit;
