use folio_core::{FileNode, FileStat, FolderNode, Node, SnapshotVault, Vault};
use folio_gallery::{
    Direction, DisplayRecord, GalleryError, GallerySettings, GroupBy, RecordMapper, SortKey,
    Sorter, build_gallery,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

fn image(path: &str, created: u64) -> FileNode {
    FileNode::new(path).with_stat(FileStat::with_created(at(created)))
}

fn names(records: &[DisplayRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.to_string()).collect()
}

fn settings(sort_by: SortKey, direction: Direction, group_by: GroupBy) -> GallerySettings {
    GallerySettings::builder()
        .path("g")
        .recursive(true)
        .sort_by(sort_by)
        .direction(direction)
        .group_by(group_by)
        .build()
        .unwrap()
}

/// Folder A `[a2, a1]` is discovered before folder B `[b1, b2]`.
fn grouped_vault() -> SnapshotVault {
    let root = FolderNode::root().with_child(
        FolderNode::new("g")
            .with_child(
                FolderNode::new("g/A")
                    .with_child(image("g/A/a2.png", 2))
                    .with_child(image("g/A/a1.png", 1)),
            )
            .with_child(
                FolderNode::new("g/B")
                    .with_child(image("g/B/b1.png", 1))
                    .with_child(image("g/B/b2.png", 2)),
            ),
    );
    SnapshotVault::new(root, "app://local/")
}

fn flat_vault() -> SnapshotVault {
    let root = FolderNode::root().with_child(
        FolderNode::new("g")
            .with_child(FileNode::new("g/b.png"))
            .with_child(FileNode::new("g/c.png"))
            .with_child(FileNode::new("g/a.png")),
    );
    SnapshotVault::new(root, "app://local/")
}

#[test]
fn test_direction_is_full_reversal() {
    let vault = flat_vault();

    let asc = build_gallery(&vault, "g", &settings(SortKey::Name, Direction::Asc, GroupBy::None))
        .unwrap();
    let desc = build_gallery(&vault, "g", &settings(SortKey::Name, Direction::Desc, GroupBy::None))
        .unwrap();

    assert_eq!(names(&asc), ["a.png", "b.png", "c.png"]);
    assert_eq!(names(&desc), ["c.png", "b.png", "a.png"]);
}

#[test]
fn test_descending_reverses_ties_too() {
    // Equal keys: a descending sort would keep x1 before x2, a reversal does not.
    let files = [image("g/x1.png", 7), image("g/x2.png", 7)];
    let refs: Vec<&FileNode> = files.iter().collect();

    let asc = Sorter::new(SortKey::Created, Direction::Asc, GroupBy::None).order(refs.clone());
    let desc = Sorter::new(SortKey::Created, Direction::Desc, GroupBy::None).order(refs);

    let asc: Vec<&str> = asc.iter().map(|f| f.name.as_str()).collect();
    let desc: Vec<&str> = desc.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(asc, ["x1.png", "x2.png"]);
    assert_eq!(desc, ["x2.png", "x1.png"]);
}

#[test]
fn test_group_by_folder_clusters_in_discovery_order() {
    let vault = grouped_vault();
    let records = build_gallery(
        &vault,
        "g",
        &settings(SortKey::Created, Direction::Asc, GroupBy::Folder),
    )
    .unwrap();

    assert_eq!(names(&records), ["a1.png", "a2.png", "b1.png", "b2.png"]);
}

#[test]
fn test_group_by_folder_descending_reverses_groups_and_members() {
    let vault = grouped_vault();
    let records = build_gallery(
        &vault,
        "g",
        &settings(SortKey::Created, Direction::Desc, GroupBy::Folder),
    )
    .unwrap();

    assert_eq!(names(&records), ["b2.png", "b1.png", "a2.png", "a1.png"]);
}

#[test]
fn test_without_grouping_folders_interleave() {
    let vault = grouped_vault();
    let records = build_gallery(
        &vault,
        "g",
        &settings(SortKey::Created, Direction::Asc, GroupBy::None),
    )
    .unwrap();

    assert_eq!(names(&records), ["a1.png", "b1.png", "a2.png", "b2.png"]);
}

#[test]
fn test_grouping_is_deterministic() {
    let vault = grouped_vault();
    let settings = settings(SortKey::Name, Direction::Desc, GroupBy::Folder);

    let first = build_gallery(&vault, "g", &settings).unwrap();
    for _ in 0..10 {
        assert_eq!(build_gallery(&vault, "g", &settings).unwrap(), first);
    }
}

#[test]
fn test_round_trip_three_levels() {
    let root = FolderNode::root().with_child(
        FolderNode::new("g")
            .with_child(image("g/top.jpg", 1))
            .with_child(
                FolderNode::new("g/l1")
                    .with_child(image("g/l1/mid.gif", 2))
                    .with_child(
                        FolderNode::new("g/l1/l2")
                            .with_child(image("g/l1/l2/deep.webp", 3))
                            .with_child(image("g/l1/l2/notes.md", 4))
                            .with_child(
                                FolderNode::new("g/l1/l2/l3")
                                    .with_child(image("g/l1/l2/l3/deepest.tif", 5)),
                            ),
                    ),
            ),
    );
    let vault = SnapshotVault::new(root, "app://local/");
    let settings = settings(SortKey::Created, Direction::Asc, GroupBy::None);

    let records = build_gallery(&vault, "g", &settings).unwrap();

    assert_eq!(records.len(), 4);
    for record in &records {
        let path = if record.folder == "/" {
            record.name.to_string()
        } else {
            format!("{}/{}", record.folder, record.name)
        };
        let source = vault.resolve(&path).and_then(Node::as_file).unwrap();
        assert_eq!(record.name, source.name);
        assert_eq!(record.folder, source.parent_path);
        assert_eq!(record.uri, vault.resource_uri(&source.path));
    }
    assert_eq!(
        names(&records),
        ["top.jpg", "mid.gif", "deep.webp", "deepest.tif"]
    );
}

#[test]
fn test_root_folder_path() {
    let root = FolderNode::root()
        .with_child(image("cover.png", 1))
        .with_child(FolderNode::new("g").with_child(image("g/inner.png", 2)));
    let vault = SnapshotVault::new(root, "");
    let settings = GallerySettings::builder()
        .path("/")
        .direction(Direction::Asc)
        .build()
        .unwrap();

    let records = build_gallery(&vault, "/", &settings).unwrap();

    assert_eq!(names(&records), ["cover.png"]);
    assert_eq!(records[0].folder, "/");
}

#[test]
fn test_missing_root_fails() {
    let vault = flat_vault();
    let err = build_gallery(&vault, "nope", &GallerySettings::new("nope")).unwrap_err();
    assert!(matches!(err, GalleryError::PathResolution { ref path } if path == "nope"));
}

#[test]
fn test_file_root_fails() {
    let vault = flat_vault();
    let err = build_gallery(&vault, "g/a.png", &GallerySettings::new("g/a.png")).unwrap_err();
    assert!(matches!(err, GalleryError::PathResolution { .. }));
}

#[test]
fn test_mapper_through_trait_object() {
    let vault = flat_vault();
    let dyn_vault: &dyn Vault = &vault;
    let file = FileNode::new("g/a.png");

    let record = RecordMapper::new(dyn_vault).record(&file);

    assert_eq!(record.uri, "app://local/g/a.png");
}
