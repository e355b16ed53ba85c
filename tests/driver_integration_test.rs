use anyhow::Result;
use fix_lf::core::TargetProvider;
use fix_lf::utils::validation::Validate;
use fix_lf::{Driver, FileOutcome, FixLfError, LocalStorage, RunMode, TomlConfig, DEFAULT_TARGETS};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn storage_for(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_str().unwrap().to_string())
}

fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_end_to_end_single_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("Clarinet.toml"), b"line1\r\nline2\r\n")?;

    let mut out = Vec::new();
    Driver::new(storage_for(&temp_dir)).run(&["Clarinet.toml".to_string()], &mut out)?;

    assert_eq!(fs::read(temp_dir.path().join("Clarinet.toml"))?, b"line1\nline2\n");
    assert_eq!(String::from_utf8(out)?, "Converted Clarinet.toml\n");
    Ok(())
}

#[test]
fn test_mixed_default_targets() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir(root.join("contracts"))?;

    // Clarinet.toml is absent
    let crlf = b"(define-constant owner tx-sender)\r\n(define-map jobs uint bool)\r\n";
    let lf = b"(define-read-only (get-balance) u0)\n";
    fs::write(root.join("contracts/trustwork-marketplace.clar"), crlf)?;
    fs::write(root.join("contracts/usdcx.clar"), lf)?;

    let mut out = Vec::new();
    let report = Driver::new(storage_for(&temp_dir)).run(&default_targets(), &mut out)?;

    assert!(!root.join("Clarinet.toml").exists());
    assert_eq!(
        fs::read(root.join("contracts/trustwork-marketplace.clar"))?,
        b"(define-constant owner tx-sender)\n(define-map jobs uint bool)\n"
    );
    assert_eq!(fs::read(root.join("contracts/usdcx.clar"))?, lf);

    assert_eq!(
        String::from_utf8(out)?,
        "Converted Clarinet.toml\n\
         Converted contracts/trustwork-marketplace.clar\n\
         Converted contracts/usdcx.clar\n"
    );

    assert_eq!(report.files[0].outcome, FileOutcome::Missing);
    assert_eq!(
        report.files[1].outcome,
        FileOutcome::Converted {
            replaced: 2,
            bytes_before: crlf.len(),
            bytes_after: crlf.len() - 2
        }
    );
    assert_eq!(report.files[2].outcome, FileOutcome::Unchanged { bytes: lf.len() });
    Ok(())
}

#[test]
fn test_io_error_aborts_remaining_targets() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::write(root.join("first.clar"), b"a\r\n")?;
    // a directory exists but cannot be read as a file
    fs::create_dir(root.join("second.clar"))?;
    fs::write(root.join("third.clar"), b"c\r\n")?;

    let targets: Vec<String> = ["first.clar", "second.clar", "third.clar"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut out = Vec::new();
    let result = Driver::new(storage_for(&temp_dir)).run(&targets, &mut out);

    match result {
        Err(FixLfError::IoError { path, .. }) => assert!(path.ends_with("second.clar")),
        other => panic!("expected an IO error, got {:?}", other),
    }

    assert_eq!(String::from_utf8(out)?, "Converted first.clar\n");
    assert_eq!(fs::read(root.join("first.clar"))?, b"a\n");
    assert_eq!(fs::read(root.join("third.clar"))?, b"c\r\n");
    Ok(())
}

#[test]
fn test_absolute_target_ignores_root() -> Result<()> {
    let root_dir = TempDir::new()?;
    let other_dir = TempDir::new()?;
    let absolute = other_dir.path().join("abs.clar");
    fs::write(&absolute, b"x\r\ny")?;

    let target = absolute.to_str().unwrap().to_string();
    let mut out = Vec::new();
    Driver::new(storage_for(&root_dir)).run(&[target.clone()], &mut out)?;

    assert_eq!(fs::read(&absolute)?, b"x\ny");
    assert_eq!(String::from_utf8(out)?, format!("Converted {}\n", target));
    Ok(())
}

#[test]
fn test_dry_run_then_apply() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("usdcx.clar");
    fs::write(&path, b"a\r\n\r\nb")?;

    let targets = vec!["usdcx.clar".to_string()];

    let mut out = Vec::new();
    Driver::with_mode(storage_for(&temp_dir), RunMode::DryRun).run(&targets, &mut out)?;
    assert_eq!(String::from_utf8(out)?, "Would convert usdcx.clar\n");
    assert_eq!(fs::read(&path)?, b"a\r\n\r\nb");

    let mut out = Vec::new();
    Driver::new(storage_for(&temp_dir)).run(&targets, &mut out)?;
    assert_eq!(fs::read(&path)?, b"a\n\nb");

    let mut out = Vec::new();
    Driver::with_mode(storage_for(&temp_dir), RunMode::DryRun).run(&targets, &mut out)?;
    assert_eq!(String::from_utf8(out)?, "Unchanged usdcx.clar\n");
    Ok(())
}

#[test]
fn test_targets_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    let normalized_root = root.to_str().unwrap().replace('\\', "/");

    fs::write(root.join("one.clar"), b"1\r\n")?;
    fs::write(root.join("two.clar"), b"2\r\n")?;

    let config_path = root.join("fix-lf.toml");
    fs::write(
        &config_path,
        format!(
            "[targets]\nroot = \"{}\"\nfiles = [\"two.clar\", \"one.clar\"]\n",
            normalized_root
        ),
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let storage = LocalStorage::new(config.root_dir().to_string());
    let mut out = Vec::new();
    Driver::new(storage).run(config.target_files(), &mut out)?;

    assert_eq!(String::from_utf8(out)?, "Converted two.clar\nConverted one.clar\n");
    for name in ["one.clar", "two.clar"] {
        let content = fs::read(Path::new(root).join(name))?;
        assert!(!content.windows(2).any(|w| w == b"\r\n"));
    }
    Ok(())
}
