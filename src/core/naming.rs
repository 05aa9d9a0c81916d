//! Friendly file name synthesis from release metadata
//!
//! Upstream file names are often cryptic ("eli48kv2.tap"), so the legacy
//! client is shown a name composed from the release type, language tags,
//! releaser and year instead. The original extension always survives.

use crate::models::{EntityRef, PlayableFile, Release};

/// Year value the upstream uses for "unknown"
pub const UNKNOWN_YEAR: &str = "????";

/// Synthesize a display/download name for one file of a release.
///
/// Pure and total: same inputs always give the same name, and the result is
/// never empty for a presentable file since a release with no usable
/// metadata degenerates to the bare upstream file name.
pub fn friendly_file_name(release: &Release, file: &PlayableFile) -> String {
    let file_name = file.file_name.as_deref().unwrap_or_default();
    let (stem, extension) = split_extension(file_name);

    let mut parts: Vec<String> = Vec::with_capacity(2);

    // type segment: "Tape image (en,ru)", either half may be absent
    let mut type_part = release
        .release_type
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string();
    let languages: Vec<&str> = release
        .language
        .iter()
        .map(String::as_str)
        .filter(|lang| !lang.is_empty())
        .collect();
    if !languages.is_empty() {
        if !type_part.is_empty() {
            type_part.push(' ');
        }
        type_part.push('(');
        type_part.push_str(&languages.join(","));
        type_part.push(')');
    }
    if !type_part.is_empty() {
        parts.push(type_part);
    }

    // provenance segment: first author title, else first publisher title
    let releaser = first_title(&release.authors_info_short)
        .or_else(|| first_title(&release.publishers_info))
        .unwrap_or_default();

    let year = match release.year.as_deref() {
        Some(UNKNOWN_YEAR) | None => "",
        Some(year) => year,
    };

    let author_part = if year.is_empty() {
        releaser.trim().to_string()
    } else {
        format!("{releaser} {year}").trim().to_string()
    };
    if !author_part.is_empty() {
        parts.push(author_part);
    }

    let mut friendly = parts.join(" - ").trim().to_string();

    if friendly.is_empty() {
        friendly = stem.to_string();
    }

    if !extension.is_empty() {
        friendly.push('.');
        friendly.push_str(extension);
    }

    friendly
}

/// Split a file name into (stem, extension after the last dot).
///
/// A name without a dot has an empty extension and is its own stem.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, ext),
        None => (file_name, ""),
    }
}

fn first_title(entities: &[EntityRef]) -> Option<&str> {
    entities
        .first()
        .and_then(|entity| entity.title.as_deref())
        .filter(|title| !title.is_empty())
}
