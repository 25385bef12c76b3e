use assert_cmd::Command;
use calamine::{Reader, Xlsx, open_workbook};
use predicates::prelude::*;

#[test]
fn empty_title_list_writes_header_only_report() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.xlsx");
    std::fs::write(&input, "\n   \n")?;

    let out = Command::cargo_bin("cinefiche")?
        .env("NO_COLOR", "1")
        .arg(&input)
        .arg(&output)
        .output()?;
    assert!(out.status.success());
    let stderr = String::from_utf8(strip_ansi_escapes::strip(out.stderr))?;
    assert!(
        stderr.contains("✓ 0") && stderr.contains("✗ 0"),
        "stderr summary mismatch. stderr=\n{}",
        stderr
    );

    let mut book: Xlsx<_> = open_workbook(&output)?;
    let range = book.worksheet_range("Movies")?;
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 14);
    assert_eq!(rows[0][0], "Name");
    assert_eq!(rows[0][13], "Production Country");
    Ok(())
}

#[test]
fn french_header_in_csv() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.csv");
    std::fs::write(&input, "")?;

    Command::cargo_bin("cinefiche")?
        .env("NO_COLOR", "1")
        .arg(&input)
        .arg(&output)
        .args(["--header-language", "fr", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Report written to"));

    let text = std::fs::read_to_string(&output)?;
    assert!(text.starts_with("Nom,Note,Remarques,Réalisateur,Style/Genre"));
    assert_eq!(text.lines().count(), 1);
    Ok(())
}

#[test]
fn missing_input_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("output.xlsx");

    Command::cargo_bin("cinefiche")?
        .env("NO_COLOR", "1")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read titles from"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn rejects_unknown_locale() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("cinefiche")?
        .args(["--locale", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported locale: de"));
    Ok(())
}
