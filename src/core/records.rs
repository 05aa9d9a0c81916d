//! Legacy record serialization for the search listing
//!
//! One `^`-delimited line per presentable release:
//! `^{id}^{title}^{name}^{size}^{fileCount}^{year}^\n`

use crate::config::OutputMode;
use crate::core::naming::{friendly_file_name, UNKNOWN_YEAR};
use crate::core::translit::transliterate;
use crate::models::{PlayableFile, Release};

/// Render the whole search listing, skipping releases with no playable
/// files (they are not presentable to the legacy client).
pub fn render_listing(releases: &[Release], mode: OutputMode) -> String {
    let mut out = String::new();
    for release in releases {
        if let Some(record) = render_record(release, mode) {
            out.push_str(&record);
        }
    }
    out
}

/// Render a single release record, or `None` when the release has no
/// playable files. The representative file is always the first one.
fn render_record(release: &Release, mode: OutputMode) -> Option<String> {
    let file = release.playable_files.first()?;
    let file_count = release.playable_files.len();

    let id = release.id.map_or_else(|| "0".to_string(), |id| id.to_string());

    let raw_title = release.title.as_deref().unwrap_or("Unknown");
    let title = match mode {
        OutputMode::Friendly => raw_title.to_string(),
        OutputMode::Translit => transliterate(raw_title),
    };

    let name_field = outbound_file_name(release, file, mode);
    let size = file.size.unwrap_or(0);

    // unlike friendly-name synthesis, the listing always shows a year slot
    let year = release.year.as_deref().unwrap_or(UNKNOWN_YEAR);

    Some(format!(
        "^{id}^{title}^{name_field}^{size}^{file_count}^{year}^\n"
    ))
}

/// Select the playable file for a 1-based download option. Anything below
/// 1 or past the end of the list has no match.
pub fn select_file(release: &Release, option: i64) -> Option<&PlayableFile> {
    option
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| release.playable_files.get(index))
}

/// The name presented for a file, both in the listing and as the download
/// attachment name, per the configured output mode.
pub fn outbound_file_name(release: &Release, file: &PlayableFile, mode: OutputMode) -> String {
    match mode {
        OutputMode::Friendly => friendly_file_name(release, file),
        OutputMode::Translit => file.file_name.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityRef;

    fn release_with_files(names: &[&str]) -> Release {
        Release {
            id: Some(5),
            title: Some("Elite".to_string()),
            release_type: Some("Tape image".to_string()),
            authors_info_short: vec![EntityRef {
                title: Some("Firebird".to_string()),
            }],
            year: Some("1985".to_string()),
            playable_files: names
                .iter()
                .map(|name| PlayableFile {
                    id: Some(9),
                    file_name: Some(name.to_string()),
                    size: Some(48000),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_friendly_mode_record() {
        let release = release_with_files(&["eli48kv2.tap", "eli128.tap"]);
        let listing = render_listing(std::slice::from_ref(&release), OutputMode::Friendly);

        assert_eq!(
            listing,
            "^5^Elite^Tape image - Firebird 1985.tap^48000^2^1985^\n"
        );
    }

    #[test]
    fn test_translit_mode_record_keeps_raw_file_name() {
        let mut release = release_with_files(&["privet.tap"]);
        release.title = Some("Привет".to_string());

        let listing = render_listing(std::slice::from_ref(&release), OutputMode::Translit);

        assert_eq!(listing, "^5^Privet^privet.tap^48000^1^1985^\n");
    }

    #[test]
    fn test_release_without_playable_files_is_skipped() {
        let presentable = release_with_files(&["eli48kv2.tap"]);
        let empty = Release {
            id: Some(6),
            title: Some("Lost".to_string()),
            ..Default::default()
        };

        let listing = render_listing(&[empty, presentable], OutputMode::Friendly);

        assert_eq!(listing.lines().count(), 1);
        assert!(listing.starts_with("^5^"));
    }

    #[test]
    fn test_missing_fields_get_listing_defaults() {
        let release = Release {
            playable_files: vec![PlayableFile::default()],
            ..Default::default()
        };

        let listing = render_listing(std::slice::from_ref(&release), OutputMode::Friendly);

        // id 0, Unknown title, bare (empty) file name, size 0, year placeholder
        assert_eq!(listing, "^0^Unknown^^0^1^????^\n");
    }

    #[test]
    fn test_year_placeholder_only_in_listing() {
        let release = Release {
            year: None,
            playable_files: vec![PlayableFile {
                file_name: Some("game.tap".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let listing = render_listing(std::slice::from_ref(&release), OutputMode::Friendly);
        // the record shows "????" while the friendly name dropped the year
        assert!(listing.contains("^game.tap^"));
        assert!(listing.ends_with("^????^\n"));
    }

    #[test]
    fn test_select_file_is_one_based() {
        let release = release_with_files(&["a.tap", "b.tap"]);

        assert_eq!(
            select_file(&release, 1).unwrap().file_name.as_deref(),
            Some("a.tap")
        );
        assert_eq!(
            select_file(&release, 2).unwrap().file_name.as_deref(),
            Some("b.tap")
        );
        // out of range and degenerate options have no match
        assert!(select_file(&release, 3).is_none());
        assert!(select_file(&release, 0).is_none());
        assert!(select_file(&release, -1).is_none());
        assert!(select_file(&release, i64::MIN).is_none());
        assert!(select_file(&release, i64::MAX).is_none());
        assert!(select_file(&Release::default(), 1).is_none());
    }

    #[test]
    fn test_outbound_name_per_mode() {
        let release = release_with_files(&["eli48kv2.tap"]);
        let file = &release.playable_files[0];

        assert_eq!(
            outbound_file_name(&release, file, OutputMode::Friendly),
            "Tape image - Firebird 1985.tap"
        );
        assert_eq!(
            outbound_file_name(&release, file, OutputMode::Translit),
            "eli48kv2.tap"
        );
    }
}
