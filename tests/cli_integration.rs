use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn curio(catalog: &Path) -> Command {
    let mut cmd = Command::cargo_bin("curio").unwrap();
    cmd.arg("--file").arg(catalog);
    cmd
}

#[test]
fn add_then_list_shows_the_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .args(["add", "Starry Night", "1889", "Van Gogh", "Post-Impressionism"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added record #1"));

    curio(&catalog)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Starry Night"))
        .stdout(predicates::str::contains("Van Gogh"));
}

#[test]
fn duplicate_add_fails_with_nonzero_exit() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Surrealism"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Duplicate record"));
}

#[test]
fn non_integer_year_is_rejected_before_the_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .args(["add", "Guernica", "nineteen37", "Picasso", "Cubism"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Year must be an integer"));

    curio(&catalog)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No records found."));
}

#[test]
fn search_matches_exact_field_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .args(["add", "Starry Night", "1889", "Van Gogh", "Post-Impressionism"])
        .assert()
        .success();
    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog)
        .args(["search", "artist", "Picasso"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Guernica"))
        .stdout(predicates::str::contains("Starry Night").not());

    curio(&catalog)
        .args(["search", "artist", "Pica"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No records found."));

    curio(&catalog)
        .args(["search", "painter", "Picasso"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown field"));
}

#[test]
fn clear_keeps_the_id_counter_going() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .args(["add", "Starry Night", "1889", "Van Gogh", "Post-Impressionism"])
        .assert()
        .success();
    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog).arg("clear").assert().success();

    curio(&catalog)
        .args(["add", "Nighthawks", "1942", "Hopper", "Realism"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added record #3"));
}

#[test]
fn create_resets_the_counter_too() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog).arg("create").assert().success();

    curio(&catalog)
        .args(["add", "Nighthawks", "1942", "Hopper", "Realism"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added record #1"));
}

#[test]
fn edit_changes_fields_but_not_the_id() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog)
        .args(["edit", "1", "Guernica", "1937", "Picasso", "Surrealism"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Updated record #1"));

    curio(&catalog)
        .args(["search", "style", "Surrealism"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Guernica"));
}

#[test]
fn delete_removes_by_key_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .args(["add", "Starry Night", "1889", "Van Gogh", "Post-Impressionism"])
        .assert()
        .success();
    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog)
        .args(["delete", "2", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Starry Night"))
        .stdout(predicates::str::contains("Guernica").not());

    curio(&catalog)
        .args(["delete", "1", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Record not found"));
}

#[test]
fn export_writes_header_and_rows() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    let csv_path = temp_dir.path().join("export.csv");

    curio(&catalog)
        .args(["add", "Starry Night", "1889", "Van Gogh", "Post-Impressionism"])
        .assert()
        .success();
    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "id,title,year,artist,style");
    assert_eq!(lines[1], "1,Starry Night,1889,Van Gogh,Post-Impressionism");
    assert_eq!(lines[2], "2,Guernica,1937,Picasso,Cubism");
}

#[test]
fn backup_then_restore_prints_the_saved_records() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    let backup = temp_dir.path().join("backup.json");

    curio(&catalog)
        .args(["add", "Guernica", "1937", "Picasso", "Cubism"])
        .assert()
        .success();

    curio(&catalog).arg("backup").arg(&backup).assert().success();
    curio(&catalog).arg("clear").assert().success();

    // Restore reads the backup and reports its contents.
    curio(&catalog)
        .arg("restore")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicates::str::contains("Guernica"));

    // The backup file itself is a full catalog and can be listed directly.
    curio(&backup)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Guernica"));
}

#[test]
fn restore_from_missing_file_fails_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");

    curio(&catalog)
        .arg("restore")
        .arg(temp_dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("IO error"));
}

#[test]
fn open_of_garbage_file_reports_a_parse_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    let garbage = temp_dir.path().join("garbage.json");
    std::fs::write(&garbage, "{definitely not json").unwrap();

    curio(&catalog)
        .arg("open")
        .arg(&garbage)
        .assert()
        .failure()
        .stderr(predicates::str::contains("Parse error"));
}
