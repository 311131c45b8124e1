//! Gallery settings and the YAML block parser that produces them.

use std::collections::BTreeSet;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ConfigError;
use crate::path::normalize_path;

/// Which file attribute drives the ordering.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive file name.
    Name,
    /// Creation time.
    #[default]
    #[serde(rename = "ctime", alias = "created", alias = "createdAt")]
    #[strum(to_string = "ctime", serialize = "created", serialize = "createdAt")]
    Created,
    /// Last modification time.
    #[serde(rename = "mtime", alias = "modified", alias = "modifiedAt")]
    #[strum(to_string = "mtime", serialize = "modified", serialize = "modifiedAt")]
    Modified,
    /// Size in bytes.
    Size,
}

/// Final direction applied after sorting and grouping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

/// Clustering applied before the final direction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GroupBy {
    #[default]
    None,
    /// Keep images from the same parent folder adjacent.
    Folder,
}

/// Masonry layout flavour used by the renderer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

/// Platform the gallery is rendered on. Decides the default column count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

const DEFAULT_RADIUS: u32 = 0;
const DEFAULT_GUTTER: u32 = 8;
const DEFAULT_IMAGE_RENDER: &str = "auto";
const DEFAULT_MOBILE_COLUMNS: u32 = 1;
const DEFAULT_DESKTOP_COLUMNS: u32 = 3;
const DEFAULT_HEIGHT: u32 = 260;

/// Fully resolved settings for one gallery block.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GallerySettings {
    /// Vault path of the root folder to collect images from.
    pub path: String,

    /// Masonry layout.
    #[builder(default)]
    #[serde(default)]
    pub layout: Layout,

    /// Corner radius in pixels.
    #[builder(default = "DEFAULT_RADIUS")]
    #[serde(default)]
    pub radius: u32,

    /// Gap between images in pixels.
    #[builder(default = "DEFAULT_GUTTER")]
    #[serde(default = "default_gutter")]
    pub gutter: u32,

    /// Attribute the images are sorted by.
    #[builder(default)]
    #[serde(default)]
    pub sort_by: SortKey,

    /// Final ordering direction.
    #[builder(default)]
    #[serde(default)]
    pub direction: Direction,

    /// Clustering mode.
    #[builder(default)]
    #[serde(default)]
    pub group_by: GroupBy,

    /// CSS `image-rendering` value passed through to the renderer.
    #[builder(default = "DEFAULT_IMAGE_RENDER.to_string()")]
    #[serde(default = "default_image_render")]
    pub image_render: String,

    /// Descend into subfolders.
    #[builder(default = "false")]
    #[serde(default)]
    pub recursive: bool,

    /// Folder paths whose whole subtree is skipped.
    #[builder(default, setter(each(name = "ignore_path", into)))]
    #[serde(default)]
    pub ignore: BTreeSet<String>,

    /// Column count on mobile (vertical layout only).
    #[builder(default = "DEFAULT_MOBILE_COLUMNS")]
    #[serde(default = "default_mobile")]
    pub mobile: u32,

    /// Column count (vertical layout only).
    #[builder(default = "DEFAULT_DESKTOP_COLUMNS")]
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Row height in pixels (horizontal layout only).
    #[builder(default = "DEFAULT_HEIGHT")]
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_gutter() -> u32 {
    DEFAULT_GUTTER
}

fn default_image_render() -> String {
    DEFAULT_IMAGE_RENDER.to_string()
}

fn default_mobile() -> u32 {
    DEFAULT_MOBILE_COLUMNS
}

fn default_columns() -> u32 {
    DEFAULT_DESKTOP_COLUMNS
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl GallerySettingsBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.path {
            Some(ref path) if path.is_empty() => Err("Path cannot be empty".to_string()),
            Some(_) => Ok(()),
            None => Err("Path is required".to_string()),
        }
    }
}

/// Raw shape of a gallery block, before defaults are applied.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    path: Option<String>,
    #[serde(rename = "type")]
    layout: Option<Layout>,
    radius: Option<u32>,
    gutter: Option<u32>,
    sortby: Option<SortKey>,
    sort: Option<Direction>,
    groupby: Option<GroupBy>,
    imagerender: Option<String>,
    subfolders: Option<bool>,
    ignore: Option<OneOrMany>,
    mobile: Option<u32>,
    columns: Option<u32>,
    height: Option<u32>,
}

/// `ignore:` accepts a single path or a list of paths.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_paths(self) -> BTreeSet<String> {
        let raw = match self {
            OneOrMany::One(path) => vec![path],
            OneOrMany::Many(paths) => paths,
        };
        raw.iter()
            .filter(|path| !path.trim().is_empty())
            .map(|path| normalize_path(path))
            .collect()
    }
}

impl GallerySettings {
    /// Create a new settings builder.
    pub fn builder() -> GallerySettingsBuilder {
        GallerySettingsBuilder::default()
    }

    /// Settings for `path` with every other option at its default.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            layout: Layout::default(),
            radius: DEFAULT_RADIUS,
            gutter: DEFAULT_GUTTER,
            sort_by: SortKey::default(),
            direction: Direction::default(),
            group_by: GroupBy::default(),
            image_render: DEFAULT_IMAGE_RENDER.to_string(),
            recursive: false,
            ignore: BTreeSet::new(),
            mobile: DEFAULT_MOBILE_COLUMNS,
            columns: DEFAULT_DESKTOP_COLUMNS,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Parse a YAML gallery block and apply defaults.
    ///
    /// `path` is required and normalized, as are `ignore` entries. On a mobile
    /// platform `columns` always follows `mobile`.
    pub fn from_yaml(src: &str, platform: Platform) -> Result<Self, ConfigError> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(src).map_err(|_| ConfigError::Unparsable)?;
        if value.is_null() {
            return Err(ConfigError::Unparsable);
        }
        if !value.is_mapping() {
            return Err(ConfigError::MissingPath);
        }

        let raw: RawSettings =
            serde_yaml::from_value(value).map_err(|e| ConfigError::InvalidValue {
                message: e.to_string(),
            })?;

        let path = raw
            .path
            .filter(|p| !p.trim().is_empty())
            .ok_or(ConfigError::MissingPath)?;

        let mobile = raw.mobile.unwrap_or(DEFAULT_MOBILE_COLUMNS);
        let columns = match platform {
            Platform::Desktop => raw.columns.unwrap_or(DEFAULT_DESKTOP_COLUMNS),
            Platform::Mobile => mobile,
        };

        Ok(Self {
            path: normalize_path(&path),
            layout: raw.layout.unwrap_or_default(),
            radius: raw.radius.unwrap_or(DEFAULT_RADIUS),
            gutter: raw.gutter.unwrap_or(DEFAULT_GUTTER),
            sort_by: raw.sortby.unwrap_or_default(),
            direction: raw.sort.unwrap_or_default(),
            group_by: raw.groupby.unwrap_or_default(),
            image_render: raw
                .imagerender
                .unwrap_or_else(|| DEFAULT_IMAGE_RENDER.to_string()),
            recursive: raw.subfolders.unwrap_or(false),
            ignore: raw.ignore.map(OneOrMany::into_paths).unwrap_or_default(),
            mobile,
            columns,
            height: raw.height.unwrap_or(DEFAULT_HEIGHT),
        })
    }

    /// Check if a folder path is excluded.
    pub fn is_ignored(&self, folder_path: &str) -> bool {
        self.ignore.contains(folder_path)
    }
}
