//! Tests for flat note discovery.

use std::fs;
use tempfile::TempDir;

use notekeep_io::{IoError, list_files};

fn txt() -> Vec<String> {
    vec!["txt".to_string()]
}

#[test]
fn test_list_files_flat_and_sorted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("b.txt"), "b")?;
    fs::write(dir.path().join("a.TXT"), "a")?;
    fs::write(dir.path().join("c.md"), "c")?;
    fs::create_dir(dir.path().join("nested"))?;
    fs::write(dir.path().join("nested/deep.txt"), "deep")?;

    let files = list_files(dir.path(), &txt())?;
    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    assert_eq!(names, vec!["a.TXT", "b.txt"]);
    Ok(())
}

#[test]
fn test_list_files_skips_directories_named_like_notes() -> Result<(), Box<dyn std::error::Error>>
{
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("archive.txt"))?;
    assert!(list_files(dir.path(), &txt())?.is_empty());
    Ok(())
}

#[test]
fn test_list_files_missing_dir() {
    let result = list_files(std::path::Path::new("/nonexistent/notekeep/dir"), &txt());
    assert!(matches!(result, Err(IoError::NotFound(_))));
}

#[test]
fn test_list_files_on_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = dir.path().join("note.txt");
    fs::write(&file, "x")?;
    assert!(matches!(
        list_files(&file, &txt()),
        Err(IoError::NotADirectory(_))
    ));
    Ok(())
}
