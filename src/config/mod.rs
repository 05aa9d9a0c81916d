//! Runtime configuration for zxbridge
//!
//! Everything is set once at startup from the command line and shared
//! read-only with the request handlers; there is no on-disk state.

use clap::ValueEnum;

/// Default upstream archive host
pub const DEFAULT_UPSTREAM: &str = "https://zxart.ee";

/// How listing titles and outbound file names are rendered.
///
/// The two policies are mutually exclusive per deployment and never mix
/// within one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Raw title in the listing; synthesized friendly name for both the
    /// listing name field and the download file name
    Friendly,
    /// Transliterated title in the listing; raw upstream file name for both
    /// the listing name field and the download file name
    Translit,
}

/// Immutable per-process settings handed to every handler
#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: OutputMode,
}
