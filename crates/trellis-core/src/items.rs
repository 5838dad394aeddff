//! Plain item descriptors passed to list-rendering components, plus the
//! formatting helpers used when rendering them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One selectable option (radio, checkbox, select, tab).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem<V = String> {
    /// Value reported through `on_change`.
    pub value: V,
    /// Visible label.
    pub label: String,
    /// Optional secondary text.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the option can be chosen.
    #[serde(default)]
    pub disabled: bool,
}

impl<V> OptionItem<V> {
    /// Enabled option without a description.
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            description: None,
            disabled: false,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the option as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Coarse file category used for icons and filter chips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Text documents, PDFs, spreadsheets.
    Document,
    /// Raster and vector images.
    Image,
    /// Audio files.
    Audio,
    /// Video files.
    Video,
    /// Compressed archives.
    Archive,
    /// Source code.
    Code,
    /// Anything else.
    #[default]
    Other,
}

impl FileKind {
    /// Guess the kind from a file name's extension.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "pdf" | "doc" | "docx" | "txt" | "md" | "xls" | "xlsx" | "csv" | "ppt" | "pptx" => {
                Self::Document
            }
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" => Self::Image,
            "mp3" | "wav" | "flac" | "ogg" => Self::Audio,
            "mp4" | "mkv" | "mov" | "webm" => Self::Video,
            "zip" | "tar" | "gz" | "7z" | "rar" => Self::Archive,
            "rs" | "ts" | "js" | "py" | "go" | "json" | "toml" | "html" | "css" => Self::Code,
            _ => Self::Other,
        }
    }

    /// Short label used by filter chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Document => "Documents",
            Self::Image => "Images",
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Archive => "Archives",
            Self::Code => "Code",
            Self::Other => "Other",
        }
    }

    /// Iconify icon name for the kind.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Document => "lucide--file-text",
            Self::Image => "lucide--file-image",
            Self::Audio => "lucide--file-audio",
            Self::Video => "lucide--file-video",
            Self::Archive => "lucide--file-archive",
            Self::Code => "lucide--file-code",
            Self::Other => "lucide--file",
        }
    }
}

/// File shown by the file list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    /// Stable identifier reported by `on_select`/`on_remove`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Size in bytes when known.
    #[serde(default)]
    pub size_bytes: Option<u64>,
    /// Last modification time.
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
    /// Explicit kind; derived from the name when absent.
    #[serde(default)]
    pub kind: Option<FileKind>,
}

impl FileItem {
    /// Kind to display, falling back to the extension guess.
    #[must_use]
    pub fn resolved_kind(&self) -> FileKind {
        self.kind.unwrap_or_else(|| FileKind::from_name(&self.name))
    }

    /// Human readable size, or an empty string when unknown.
    #[must_use]
    pub fn size_label(&self) -> String {
        self.size_bytes.map(format_file_size).unwrap_or_default()
    }

    /// Human readable modification date, or an empty string when unknown.
    #[must_use]
    pub fn modified_label(&self) -> String {
        self.modified.as_ref().map(format_modified).unwrap_or_default()
    }
}

/// Direction of change for a stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Increasing.
    Up,
    /// Decreasing.
    Down,
    /// Flat or unknown.
    #[default]
    Neutral,
}

/// Single statistic for stat cards and sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    /// Caption above the value.
    pub label: String,
    /// Pre-formatted value.
    pub value: String,
    /// Secondary text under the value.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional trend indicator.
    #[serde(default)]
    pub trend: Option<Trend>,
}

/// Entry in a timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Headline.
    pub title: String,
    /// Optional body text.
    #[serde(default)]
    pub detail: Option<String>,
    /// Optional pre-formatted time label.
    #[serde(default)]
    pub time: Option<String>,
}

/// Navigation link for headers, footers and breadcrumbs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible text.
    pub label: String,
    /// Target URL.
    pub href: String,
    /// Marks the current page.
    #[serde(default)]
    pub active: bool,
}

/// Titled group of links, as rendered in footer columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkColumn {
    /// Column heading.
    pub title: String,
    /// Links listed under the heading.
    pub links: Vec<NavLink>,
}

/// Binary-unit size formatter (B, KiB, MiB, GiB) with one decimal.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;
    let (unit, label) = if bytes >= GIB {
        (GIB, "GiB")
    } else if bytes >= MIB {
        (MIB, "MiB")
    } else if bytes >= KIB {
        (KIB, "KiB")
    } else {
        return format!("{bytes} B");
    };
    let whole = bytes / unit;
    let tenths = (bytes % unit) * 10 / unit;
    format!("{whole}.{tenths} {label}")
}

/// Short date label such as `Mar 4, 2025`.
#[must_use]
pub fn format_modified(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KiB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MiB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 / 2), "1.5 GiB");
    }

    #[test]
    fn modified_dates_are_short() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).single();
        assert_eq!(ts.as_ref().map(format_modified).as_deref(), Some("Mar 4, 2025"));
    }

    #[test]
    fn file_kind_follows_extension() {
        assert_eq!(FileKind::from_name("report.PDF"), FileKind::Document);
        assert_eq!(FileKind::from_name("photo.jpeg"), FileKind::Image);
        assert_eq!(FileKind::from_name("backup.tar"), FileKind::Archive);
        assert_eq!(FileKind::from_name("README"), FileKind::Other);
    }

    #[test]
    fn explicit_kind_wins_over_extension() {
        let item = FileItem {
            id: "1".into(),
            name: "notes.txt".into(),
            size_bytes: None,
            modified: None,
            kind: Some(FileKind::Code),
        };
        assert_eq!(item.resolved_kind(), FileKind::Code);
        assert_eq!(item.size_label(), "");
    }

    #[test]
    fn option_items_deserialize_with_defaults() -> Result<(), serde_json::Error> {
        let item: OptionItem = serde_json::from_str(r#"{"value":"a","label":"Alpha"}"#)?;
        assert_eq!(item, OptionItem::new("a".to_string(), "Alpha"));
        Ok(())
    }
}
