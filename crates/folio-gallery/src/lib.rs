//! Gallery assembly for folio.
//!
//! This crate turns a vault folder and its settings into the ordered list of
//! records a gallery renderer consumes:
//!
//! - **Ordering** - sort by name, creation time, modification time or size,
//!   optionally grouped by parent folder, then apply the direction
//! - **Mapping** - convert file nodes into [`DisplayRecord`]s with vault URIs
//!
//! ```rust,ignore
//! use folio_gallery::build_gallery;
//! use folio_core::Platform;
//! use folio_scan::{DiskScanner, GallerySettings, ScanConfig};
//!
//! let vault = DiskScanner::new().scan_vault(&ScanConfig::new("/path/to/vault")).unwrap();
//! let settings = GallerySettings::from_yaml("path: Photos\nsubfolders: true", Platform::Desktop).unwrap();
//!
//! for record in build_gallery(&vault, &settings.path, &settings).unwrap() {
//!     println!("{} ({})", record.name, record.folder);
//! }
//! ```
//!
//! # Grouping
//!
//! With [`GroupBy::Folder`] images are partitioned by parent folder in the
//! order the folders were first reached during the walk, and each partition
//! is sorted on its own. A descending direction reverses the finished
//! sequence, so folder order flips too.

mod build;
mod mapper;
mod order;

pub use build::build_gallery;
pub use mapper::RecordMapper;
pub use order::Sorter;

// Re-export core types
pub use folio_core::{DisplayRecord, Direction, GalleryError, GallerySettings, GroupBy, SortKey};
