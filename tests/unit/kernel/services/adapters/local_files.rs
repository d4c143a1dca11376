use super::*;
use tempfile::tempdir;

fn host(dir: &Path) -> LocalFileHost {
    LocalFileHost::new(dir.join("downloads"))
}

#[test]
fn open_picker_without_queue_reads_as_cancelled() {
    let dir = tempdir().unwrap();
    let mut host = host(dir.path());

    assert!(matches!(host.open_picker(), Ok(PickOutcome::Cancelled)));
}

#[test]
fn open_picker_resolves_queued_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "hello").unwrap();

    let mut host = host(dir.path());
    host.queue_pick(path.clone());

    let Ok(PickOutcome::Picked(picked)) = host.open_picker() else {
        panic!("expected a pick");
    };
    assert_eq!(picked.name, "notes.txt");
    assert_eq!(host.read_text(picked.handle).unwrap(), "hello");
    assert_eq!(host.handle_path(picked.handle), Some(path.clone()));
}

#[test]
fn save_picker_joins_suggested_name_into_directory() {
    let dir = tempdir().unwrap();
    let mut host = host(dir.path());
    host.queue_pick(dir.path().to_path_buf());

    let Ok(PickOutcome::Picked(handle)) = host.save_picker("export.html") else {
        panic!("expected a pick");
    };
    host.write_through(handle, "<p>hi</p>").unwrap();

    let written = fs::read_to_string(dir.path().join("export.html")).unwrap();
    assert_eq!(written, "<p>hi</p>");
}

#[test]
fn write_through_replaces_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("f.txt");
    fs::write(&path, "old old old").unwrap();

    let mut host = host(dir.path());
    host.queue_pick(path.clone());
    let Ok(PickOutcome::Picked(picked)) = host.open_picker() else {
        panic!("expected a pick");
    };

    host.write_through(picked.handle, "new").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn unknown_handle_is_stale() {
    let dir = tempdir().unwrap();
    let mut host = host(dir.path());

    assert!(matches!(
        host.read_text(ExternalHandle::default()),
        Err(FileError::StaleHandle)
    ));
    assert!(matches!(
        host.write_through(ExternalHandle::default(), "x"),
        Err(FileError::StaleHandle)
    ));
}

#[test]
fn download_fallback_writes_into_download_dir() {
    let dir = tempdir().unwrap();
    let mut host = host(dir.path());

    host.deliver_download("index.html", b"<h1>hi</h1>").unwrap();
    let written = fs::read_to_string(dir.path().join("downloads").join("index.html")).unwrap();
    assert_eq!(written, "<h1>hi</h1>");
}

#[test]
fn download_names_cannot_escape_the_directory() {
    let dir = tempdir().unwrap();
    let mut host = host(dir.path());

    host.deliver_download("../evil.txt", b"x").unwrap();
    assert!(dir.path().join("downloads").join(".._evil.txt").exists());
    assert!(!dir.path().join("evil.txt").exists());
}

#[test]
fn clones_share_pick_queue_and_handles() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("f.txt");
    fs::write(&path, "x").unwrap();

    let queue_side = host(dir.path());
    let mut picker_side = queue_side.clone();
    queue_side.queue_pick(path);

    let Ok(PickOutcome::Picked(picked)) = picker_side.open_picker() else {
        panic!("expected a pick");
    };
    assert!(queue_side.handle_path(picked.handle).is_some());
}

#[test]
fn picker_support_is_feature_probed() {
    let dir = tempdir().unwrap();
    let mut host = LocalFileHost::without_pickers(dir.path().join("downloads"));

    assert!(!host.supports_pickers());
    assert!(matches!(
        host.open_picker(),
        Err(FileError::PickersUnsupported)
    ));
    assert!(matches!(
        host.save_picker("x"),
        Err(FileError::PickersUnsupported)
    ));
}
