use folio_scan::{
    DiskScanner, FileNode, FileTreeWalker, FolderNode, GallerySettings, ImageFilter, ScanConfig,
};
use std::fs;
use tempfile::TempDir;

fn paths(files: &[&FileNode]) -> Vec<String> {
    files.iter().map(|f| f.path.to_string()).collect()
}

/// `/g` holds two images of its own plus `/g/sub` with two more.
fn tree_with_sub() -> FolderNode {
    FolderNode::new("g")
        .with_child(FileNode::new("g/top1.png"))
        .with_child(
            FolderNode::new("g/sub")
                .with_child(FileNode::new("g/sub/inner1.jpg"))
                .with_child(FileNode::new("g/sub/inner2.jpg")),
        )
        .with_child(FileNode::new("g/top2.gif"))
}

#[test]
fn test_filter_exactness() {
    let folder = FolderNode::new("g")
        .with_child(FileNode::new("g/a.png"))
        .with_child(FileNode::new("g/b.PNG"))
        .with_child(FileNode::new("g/c.bmp"))
        .with_child(FileNode::new("g/d.jpg"));
    let settings = GallerySettings::new("g");

    let found = FileTreeWalker::new(&settings).walk(&folder);

    assert_eq!(paths(&found), ["g/a.png", "g/d.jpg"]);
    assert!(found.iter().all(|f| ImageFilter::new().accepts(f)));
}

#[test]
fn test_ignore_suppresses_subtree() {
    let settings = GallerySettings::builder()
        .path("g")
        .recursive(true)
        .ignore_path("g/sub")
        .build()
        .unwrap();
    let tree = tree_with_sub();

    let found = FileTreeWalker::new(&settings).walk(&tree);

    assert_eq!(paths(&found), ["g/top1.png", "g/top2.gif"]);
}

#[test]
fn test_ignore_applies_at_any_depth() {
    let tree = FolderNode::new("g").with_child(
        FolderNode::new("g/a")
            .with_child(FileNode::new("g/a/keep.png"))
            .with_child(FolderNode::new("g/a/b").with_child(FileNode::new("g/a/b/drop.png"))),
    );
    let settings = GallerySettings::builder()
        .path("g")
        .recursive(true)
        .ignore_path("g/a/b")
        .build()
        .unwrap();

    let found = FileTreeWalker::new(&settings).walk(&tree);

    assert_eq!(paths(&found), ["g/a/keep.png"]);
}

#[test]
fn test_recursive_off() {
    let settings = GallerySettings::builder()
        .path("g")
        .recursive(false)
        .build()
        .unwrap();
    let tree = tree_with_sub();

    let found = FileTreeWalker::new(&settings).walk(&tree);

    assert_eq!(paths(&found), ["g/top1.png", "g/top2.gif"]);
}

#[test]
fn test_recursive_on_splices_subfolder_in_place() {
    let settings = GallerySettings::builder()
        .path("g")
        .recursive(true)
        .build()
        .unwrap();
    let tree = tree_with_sub();

    let found = FileTreeWalker::new(&settings).walk(&tree);

    assert_eq!(
        paths(&found),
        ["g/top1.png", "g/sub/inner1.jpg", "g/sub/inner2.jpg", "g/top2.gif"]
    );
    assert!(found.len() <= tree.file_count());
}

#[test]
fn test_walk_scanned_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("Photos/2024")).unwrap();
    fs::write(root.join("Photos/a.jpg"), "a").unwrap();
    fs::write(root.join("Photos/b.JPG"), "b").unwrap();
    fs::write(root.join("Photos/readme.txt"), "r").unwrap();
    fs::write(root.join("Photos/2024/c.tiff"), "c").unwrap();

    let vault = DiskScanner::new()
        .scan_vault(&ScanConfig::new(root))
        .unwrap();
    let photos = vault
        .root()
        .find("Photos")
        .and_then(|node| node.as_folder())
        .unwrap();

    let settings = GallerySettings::builder()
        .path("Photos")
        .recursive(true)
        .build()
        .unwrap();
    let found = FileTreeWalker::new(&settings).walk(photos);

    // jwalk sorts by name: "2024" sorts before "a.jpg"
    assert_eq!(paths(&found), ["Photos/2024/c.tiff", "Photos/a.jpg"]);
}
