//! Fixture data rendered by the gallery stories.
//!
//! The JSON document is embedded at compile time so the gallery needs no
//! network access; it deserializes straight into `trellis-core` descriptors.

use serde::Deserialize;
use trellis_core::items::{FileItem, LinkColumn, NavLink, OptionItem, StatItem, TimelineEntry};

const GALLERY_JSON: &str = include_str!("fixtures/gallery.json");

/// Every fixture collection used by the gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GalleryFixtures {
    /// Radio group options.
    pub plans: Vec<OptionItem>,
    /// Checkbox group options.
    pub notifications: Vec<OptionItem>,
    /// Tab options.
    pub tabs: Vec<OptionItem>,
    /// File list entries.
    pub files: Vec<FileItem>,
    /// Stat widgets.
    pub stats: Vec<StatItem>,
    /// Timeline entries.
    pub timeline: Vec<TimelineEntry>,
    /// Header navigation.
    pub nav: Vec<NavLink>,
    /// Breadcrumb trail.
    pub breadcrumbs: Vec<NavLink>,
    /// Footer link columns.
    pub footer_columns: Vec<LinkColumn>,
}

/// Parse the embedded fixture document.
///
/// # Errors
/// Returns the JSON error if the embedded document does not match
/// [`GalleryFixtures`].
pub fn load() -> Result<GalleryFixtures, serde_json::Error> {
    serde_json::from_str(GALLERY_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::items::{FileKind, Trend};

    #[test]
    fn embedded_fixtures_parse() -> Result<(), serde_json::Error> {
        let fixtures = load()?;
        assert_eq!(fixtures.plans.len(), 4);
        assert!(fixtures.plans[3].disabled);
        assert_eq!(fixtures.stats[2].trend, Some(Trend::Down));
        assert_eq!(fixtures.footer_columns.len(), 2);
        Ok(())
    }

    #[test]
    fn file_fixtures_cover_several_kinds() -> Result<(), serde_json::Error> {
        let fixtures = load()?;
        let kinds: Vec<FileKind> = fixtures.files.iter().map(FileItem::resolved_kind).collect();
        assert!(kinds.contains(&FileKind::Document));
        assert!(kinds.contains(&FileKind::Archive));
        assert!(kinds.contains(&FileKind::Video));
        assert_eq!(fixtures.files[0].modified_label(), "Mar 4, 2025");
        assert_eq!(fixtures.files[5].modified_label(), "");
        Ok(())
    }
}
