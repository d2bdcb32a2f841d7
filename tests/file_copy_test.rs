use anyhow::Result;
use file_collector::file_copy::{copy_all, copy_file, CopyStats};
use file_collector::infrastructure::RealFileSystem;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup() -> Result<(TempDir, PathBuf, PathBuf, Vec<PathBuf>)> {
    let temp = TempDir::new()?;
    let source = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(source.join("sub"))?;
    fs::create_dir_all(&dest)?;
    fs::write(source.join("a.txt"), "alpha")?;
    fs::write(source.join("sub").join("c.txt"), "charlie")?;
    let files = vec![source.join("a.txt"), source.join("sub").join("c.txt")];
    Ok((temp, source, dest, files))
}

#[test]
fn test_copy_flattens_into_destination() -> Result<()> {
    let (_temp, _source, dest, files) = setup()?;

    let stats = copy_all(&RealFileSystem::new(), &files, &dest);

    assert_eq!(stats.files_attempted, 2);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.total_bytes, 12);
    assert_eq!(fs::read_to_string(dest.join("a.txt"))?, "alpha");
    assert_eq!(fs::read_to_string(dest.join("c.txt"))?, "charlie");
    assert!(!dest.join("sub").exists());
    Ok(())
}

#[test]
fn test_copy_overwrites_existing_file() -> Result<()> {
    let (_temp, source, dest, files) = setup()?;
    fs::write(dest.join("a.txt"), "stale content that is longer")?;

    copy_all(&RealFileSystem::new(), &files, &dest);

    assert_eq!(fs::read(dest.join("a.txt"))?, fs::read(source.join("a.txt"))?);
    Ok(())
}

#[test]
fn test_copy_twice_is_idempotent() -> Result<()> {
    let (_temp, _source, dest, files) = setup()?;
    let fs_impl = RealFileSystem::new();

    copy_all(&fs_impl, &files, &dest);
    let mut first: Vec<_> = fs::read_dir(&dest)?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    first.sort();
    let first_contents: Vec<_> = first.iter().map(fs::read).collect::<std::io::Result<_>>()?;

    let stats = copy_all(&fs_impl, &files, &dest);
    let mut second: Vec<_> = fs::read_dir(&dest)?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    second.sort();
    let second_contents: Vec<_> = second.iter().map(fs::read).collect::<std::io::Result<_>>()?;

    assert_eq!(first, second);
    assert_eq!(first_contents, second_contents);
    assert_eq!(stats.files_failed, 0);
    Ok(())
}

#[test]
fn test_copy_failure_continues_with_next_file() -> Result<()> {
    let (_temp, source, dest, mut files) = setup()?;
    // A directory in the way makes the copy of this name fail.
    fs::write(source.join("blocked.txt"), "1234567890")?;
    fs::create_dir_all(dest.join("blocked.txt"))?;
    files.insert(0, source.join("blocked.txt"));

    let stats = copy_all(&RealFileSystem::new(), &files, &dest);

    assert_eq!(stats.files_attempted, 3);
    assert_eq!(stats.files_failed, 1);
    assert_eq!(stats.total_bytes, 22);
    assert_eq!(fs::read_to_string(dest.join("c.txt"))?, "charlie");
    Ok(())
}

#[test]
fn test_copy_onto_itself_is_refused() -> Result<()> {
    let (_temp, source, _dest, _files) = setup()?;
    let mut stats = CopyStats::default();

    let result = copy_file(&RealFileSystem::new(), &source.join("a.txt"), &source, &mut stats);

    assert!(result.is_err());
    assert_eq!(stats.files_failed, 1);
    assert_eq!(fs::read_to_string(source.join("a.txt"))?, "alpha");
    Ok(())
}

#[test]
fn test_same_name_in_different_directories_last_wins() -> Result<()> {
    let (_temp, source, dest, mut files) = setup()?;
    fs::write(source.join("sub").join("a.txt"), "from sub")?;
    files.push(source.join("sub").join("a.txt"));

    let stats = copy_all(&RealFileSystem::new(), &files, &dest);

    assert_eq!(stats.files_attempted, 3);
    assert_eq!(fs::read_to_string(dest.join("a.txt"))?, "from sub");
    Ok(())
}
