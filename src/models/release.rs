//! Release and file models projected from the ZX-Art JSON API

use serde::Deserialize;

/// A software release from the upstream catalog
///
/// All fields mirror the upstream `zxRelease` export. Everything except the
/// id may be missing from a given record, so each field carries a serde
/// default; the defaulting decisions (empty string vs. `"Unknown"` vs.
/// `"????"`) live at the call sites that render these values, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Catalog id, required for download lookups
    #[serde(default)]
    pub id: Option<u64>,
    /// Release title, may contain non-Latin script
    #[serde(default)]
    pub title: Option<String>,
    /// Release type label ("Tape image", "Disk image", ...)
    #[serde(default)]
    pub release_type: Option<String>,
    /// Short language codes in upstream order
    #[serde(default)]
    pub language: Vec<String>,
    /// Credited authors, first entry wins for provenance
    #[serde(default)]
    pub authors_info_short: Vec<EntityRef>,
    /// Publishers, fallback provenance when no author is credited
    #[serde(default)]
    pub publishers_info: Vec<EntityRef>,
    /// Release year as text; `"????"` means unknown
    #[serde(default)]
    pub year: Option<String>,
    /// Files usable for direct retrieval
    #[serde(default)]
    pub playable_files: Vec<PlayableFile>,
}

/// A named entity reference (author or publisher)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// One downloadable file within a release
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayableFile {
    /// Opaque upstream file identifier
    #[serde(default)]
    pub id: Option<u64>,
    /// On-disk name including extension
    #[serde(default)]
    pub file_name: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<u64>,
}

/// Top-level upstream response envelope: `{"responseData": {"zxRelease": [...]}}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub response_data: ResponseData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    /// Missing or null array means an empty result, not an error
    #[serde(default)]
    pub zx_release: Vec<Release>,
}
