//! Integration tests for folder-level frontmatter injection.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use notekeep_frontmatter::{
    FrontmatterBlock, FrontmatterError, InjectOptions, InjectOutcome, inject_file, inject_folder,
};

fn options(category: &str) -> InjectOptions {
    InjectOptions {
        category: category.to_string(),
        author: "Test Author".to_string(),
        ..InjectOptions::default()
    }
}

fn read(path: &Path) -> Result<String, std::io::Error> {
    fs::read_to_string(path)
}

#[test]
fn test_inject_prepends_block_with_filename_title() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let note = tmp.path().join("groceries.txt");
    fs::write(&note, "milk\neggs\n")?;

    assert_eq!(inject_file(&note, &options("personal"))?, InjectOutcome::Injected);

    let content = read(&note)?;
    assert_eq!(
        content,
        "---\nlayout: general\ntitle: groceries.txt\ncategories: [personal]\ntags: []\nauthor: Test Author\n---\n\nmilk\neggs\n"
    );
    let block = FrontmatterBlock::parse(&content).ok_or("block should parse")?;
    assert_eq!(block.title, "groceries.txt");
    assert_eq!(block.categories, vec!["personal".to_string()]);
    Ok(())
}

#[test]
fn test_inject_leaves_existing_frontmatter_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let note = tmp.path().join("done.txt");
    let original = "---\ntitle: custom\n---\nbody\n";
    fs::write(&note, original)?;

    assert_eq!(
        inject_file(&note, &options("personal"))?,
        InjectOutcome::AlreadyPresent
    );
    assert_eq!(read(&note)?, original);
    Ok(())
}

#[test]
fn test_inject_folder_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("a.txt"), "alpha\n")?;
    fs::write(tmp.path().join("b.txt"), "---\nlayout: general\n---\n\nbeta\n")?;
    fs::write(tmp.path().join("c.txt"), "")?;
    fs::write(tmp.path().join("ignored.md"), "markdown\n")?;

    let first = inject_folder(tmp.path(), &options("work"))?;
    assert_eq!(first.total, 3);
    assert_eq!(first.processed, 2);
    assert_eq!(first.skipped, 1);
    assert!(first.failures.is_empty());

    let snapshot: Vec<String> = ["a.txt", "b.txt", "c.txt", "ignored.md"]
        .iter()
        .map(|name| read(&tmp.path().join(name)))
        .collect::<Result<_, _>>()?;

    let second = inject_folder(tmp.path(), &options("work"))?;
    assert_eq!(second.processed, 0);
    assert_eq!(second.skipped, 3);

    for (name, before) in ["a.txt", "b.txt", "c.txt", "ignored.md"].iter().zip(&snapshot) {
        assert_eq!(&read(&tmp.path().join(name))?, before, "{name} changed");
    }
    assert_eq!(read(&tmp.path().join("ignored.md"))?, "markdown\n");
    Ok(())
}

#[test]
fn test_inject_folder_continues_after_unreadable_note() -> Result<(), Box<dyn std::error::Error>>
{
    let tmp = TempDir::new()?;
    let broken = tmp.path().join("a_latin1.txt");
    fs::write(&broken, [0x63, 0x61, 0x66, 0xe9, 0x0a])?;
    fs::write(tmp.path().join("b_ok.txt"), "fine\n")?;

    let report = inject_folder(tmp.path(), &options("personal"))?;
    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, broken);

    assert_eq!(fs::read(&broken)?, vec![0x63, 0x61, 0x66, 0xe9, 0x0a]);
    assert!(read(&tmp.path().join("b_ok.txt"))?.starts_with("---\n"));
    Ok(())
}

#[test]
fn test_inject_folder_does_not_recurse() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    fs::create_dir(tmp.path().join("sub"))?;
    fs::write(tmp.path().join("sub/nested.txt"), "nested\n")?;

    let report = inject_folder(tmp.path(), &options("personal"))?;
    assert_eq!(report.total, 0);
    assert_eq!(read(&tmp.path().join("sub/nested.txt"))?, "nested\n");
    Ok(())
}

#[test]
fn test_inject_folder_missing() {
    let result = inject_folder(Path::new("/nonexistent/notekeep"), &options("personal"));
    assert!(matches!(result, Err(FrontmatterError::FolderNotFound(_))));
}

#[test]
fn test_inject_folder_on_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let file = tmp.path().join("note.txt");
    fs::write(&file, "x")?;
    assert!(matches!(
        inject_folder(&file, &options("personal")),
        Err(FrontmatterError::NotADirectory(_))
    ));
    Ok(())
}
