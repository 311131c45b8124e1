//! Image discovery for folio.
//!
//! This crate walks a vault's folder tree and picks out the files that
//! qualify as images.
//!
//! # Overview
//!
//! - [`ImageFilter`] decides whether a file is an image, by exact,
//!   case-sensitive extension match.
//! - [`FileTreeWalker`] collects qualifying files below a folder in discovery
//!   order, honoring the recursion toggle and the ignore set.
//! - [`DiskScanner`] snapshots a real directory into a [`SnapshotVault`]
//!   using jwalk, for callers that have no vault of their own.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_scan::{DiskScanner, FileTreeWalker, GallerySettings, ScanConfig, Vault};
//!
//! let vault = DiskScanner::new()
//!     .scan_vault(&ScanConfig::new("/path/to/vault"))
//!     .unwrap();
//! let settings = GallerySettings::new("/");
//! let images = FileTreeWalker::new(&settings).walk(vault.root());
//!
//! for image in images {
//!     println!("{}", vault.resource_uri(&image.path));
//! }
//! ```

mod filter;
mod scanner;
mod walker;

pub use filter::{IMAGE_EXTENSIONS, ImageFilter, is_image_extension};
pub use scanner::DiskScanner;
pub use walker::FileTreeWalker;

// Re-export core types for convenience
pub use folio_core::{
    FileNode, FileStat, FolderNode, GallerySettings, Node, ScanConfig, ScanError, SnapshotVault,
    Vault,
};
