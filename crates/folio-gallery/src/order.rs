//! Sorting and folder grouping of collected images.
//!
//! Ordering happens in three steps:
//!
//! 1. Extract a key per file: the upper-cased name, or a stat field.
//! 2. Sort by that key, either across the whole list or inside each parent
//!    folder when grouping by folder.
//! 3. Reverse the whole sequence for [`Direction::Desc`].
//!
//! Step 3 reverses after grouping, so a descending gallery also lists its
//! folders in reverse and reverses the images inside each folder.

use std::time::SystemTime;

use indexmap::IndexMap;
use tracing::{debug, trace};

use folio_core::{Direction, FileNode, GallerySettings, GroupBy, SortKey};

/// Comparison key for one file.
///
/// Missing stat fields are `None`, which orders before every present value.
/// Names compare by Unicode scalar value after upper-casing, so non-ASCII
/// names may order differently than a UTF-16 code-unit comparison would.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Name(String),
    Time(Option<SystemTime>),
    Size(Option<u64>),
}

impl SortValue {
    fn of(file: &FileNode, key: SortKey) -> Self {
        match key {
            SortKey::Name => SortValue::Name(file.name.to_uppercase().to_string()),
            SortKey::Created => SortValue::Time(file.stat.created),
            SortKey::Modified => SortValue::Time(file.stat.modified),
            SortKey::Size => SortValue::Size(file.stat.size),
        }
    }
}

/// Orders a flat image list by key, optional folder grouping and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sorter {
    sort_by: SortKey,
    direction: Direction,
    group_by: GroupBy,
}

impl Sorter {
    /// Create a sorter with explicit options.
    pub fn new(sort_by: SortKey, direction: Direction, group_by: GroupBy) -> Self {
        Self {
            sort_by,
            direction,
            group_by,
        }
    }

    /// Create a sorter from gallery settings.
    pub fn from_settings(settings: &GallerySettings) -> Self {
        Self::new(settings.sort_by, settings.direction, settings.group_by)
    }

    /// Order `files`. Ties keep their discovery order before the final
    /// direction is applied.
    pub fn order<'v>(&self, files: Vec<&'v FileNode>) -> Vec<&'v FileNode> {
        let count = files.len();
        let mut ordered = match self.group_by {
            GroupBy::None => self.sort_flat(files),
            GroupBy::Folder => self.sort_grouped(files),
        };

        if self.direction == Direction::Desc {
            ordered.reverse();
        }

        debug!(
            count,
            sort_by = %self.sort_by,
            direction = %self.direction,
            group_by = %self.group_by,
            "ordered images"
        );
        ordered
    }

    fn sort_flat<'v>(&self, mut files: Vec<&'v FileNode>) -> Vec<&'v FileNode> {
        files.sort_by_cached_key(|file| SortValue::of(file, self.sort_by));
        files
    }

    /// Partition by parent folder in first-seen order, then sort each
    /// partition on its own.
    fn sort_grouped<'v>(&self, files: Vec<&'v FileNode>) -> Vec<&'v FileNode> {
        let mut groups: IndexMap<&'v str, Vec<&'v FileNode>> = IndexMap::new();
        for file in files {
            groups.entry(file.parent_path.as_str()).or_default().push(file);
        }
        trace!(groups = groups.len(), "partitioned by folder");

        groups
            .into_values()
            .flat_map(|group| self.sort_flat(group))
            .collect()
    }
}
