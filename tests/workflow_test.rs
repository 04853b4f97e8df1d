use std::fs::{self, File, create_dir_all};
use std::io::Write;
use std::path::Path;

use file_rename::config::{Config, load_config};
use file_rename::workflow::{ProcessingOptions, process_files};
use tempfile::tempdir;

fn create_collection(dir: &Path, names: &[&str]) {
    create_dir_all(dir).expect("Failed to create input directory");
    for name in names {
        let mut file = File::create(dir.join(name)).expect("Failed to create test file");
        write!(file, "{name}").expect("Failed to write to test file");
    }
}

fn options(inp_dir: &Path, out_dir: &Path, pattern: &str, out_pattern: &str, dry_run: bool) -> ProcessingOptions {
    ProcessingOptions {
        config: Config {
            inp_dir: Some(inp_dir.to_path_buf()),
            out_dir: Some(out_dir.to_path_buf()),
            file_pattern: Some(pattern.to_string()),
            out_file_pattern: Some(out_pattern.to_string()),
        },
        dry_run,
    }
}

#[test]
fn test_rename_collection() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let inp_dir = temp_dir.path().join("images");
    let out_dir = temp_dir.path().join("renamed");
    create_collection(
        &inp_dir,
        &[
            "img_x01_y01_DAPI.tif",
            "img_x01_y02_GFP.tif",
            "img_x02_y01_DAPI.tif",
            "notes.txt",
        ],
    );

    let context = process_files(options(
        &inp_dir,
        &out_dir,
        "img_x{row:dd}_y{col:dd}_{channel:c+}.tif",
        "new_x{row:ddd}_y{col:ddd}_c{channel:ddd}.tif",
        false,
    ))
    .expect("Failed to process files");

    assert_eq!(context.stats.files_scanned, 4);
    assert_eq!(context.stats.files_renamed, 3);
    assert_eq!(context.stats.files_copied, 3);
    assert_eq!(context.stats.files_unmatched, 1);
    assert_eq!(context.stats.errors, 0);
    assert_eq!(context.skipped_files, vec!["notes.txt".to_string()]);

    let copied = out_dir.join("new_x001_y002_c002.tif");
    assert_eq!(fs::read_to_string(copied).unwrap(), "img_x01_y02_GFP.tif");
    assert!(out_dir.join("new_x001_y001_c001.tif").exists());
    assert!(out_dir.join("new_x002_y001_c001.tif").exists());
    assert!(!out_dir.join("notes.txt").exists());

    // inputs are copied, never moved
    assert!(inp_dir.join("img_x01_y02_GFP.tif").exists());
}

#[test]
fn test_dry_run_copies_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let inp_dir = temp_dir.path().join("images");
    let out_dir = temp_dir.path().join("renamed");
    create_collection(&inp_dir, &["img_x07.tif", "img_x08.tif"]);

    let context = process_files(options(
        &inp_dir,
        &out_dir,
        "img_x{row:dd}.tif",
        "img_x{row:dddd}.tif",
        true,
    ))
    .expect("Failed to process files");

    assert_eq!(context.stats.files_renamed, 2);
    assert_eq!(context.stats.files_copied, 0);
    assert_eq!(context.planned_operations.len(), 2);
    assert_eq!(context.planned_operations[0].source, inp_dir.join("img_x07.tif"));
    assert_eq!(context.planned_operations[0].destination, out_dir.join("img_x0007.tif"));
    assert!(!out_dir.exists());
}

#[test]
fn test_width_overflow_aborts_before_copying() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let inp_dir = temp_dir.path().join("images");
    let out_dir = temp_dir.path().join("renamed");
    let names: Vec<String> = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]
        .iter()
        .map(|well| format!("well_{well}.tif"))
        .collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    create_collection(&inp_dir, &names);

    let result = process_files(options(
        &inp_dir,
        &out_dir,
        "well_{well:c+}.tif",
        "well_{well:d}.tif",
        false,
    ));

    let message = format!("{:#}", result.expect_err("expected a width overflow"));
    assert!(message.contains("'j' was assigned 10"), "{message}");
    assert!(!out_dir.exists());
}

#[test]
fn test_colliding_targets_are_counted() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let inp_dir = temp_dir.path().join("images");
    let out_dir = temp_dir.path().join("renamed");
    create_collection(&inp_dir, &["x01.tif", "x1.tif"]);

    let context = process_files(options(
        &inp_dir,
        &out_dir,
        "x{row:d+}.tif",
        "x{row:dd}.tif",
        false,
    ))
    .expect("Failed to process files");

    assert_eq!(context.stats.collisions, 1);
    assert_eq!(context.stats.files_copied, 2);
    // the later file in sorted order wins
    assert_eq!(fs::read_to_string(out_dir.join("x01.tif")).unwrap(), "x1.tif");
}

#[test]
fn test_unmatched_text_is_carried_into_the_copy() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let inp_dir = temp_dir.path().join("images");
    let out_dir = temp_dir.path().join("renamed");
    create_collection(&inp_dir, &["plate1_x07_extra.tif"]);

    let context = process_files(options(&inp_dir, &out_dir, "x{row:dd}", "y{row:ddd}", false))
        .expect("Failed to process files");

    assert_eq!(context.stats.files_copied, 1);
    assert!(out_dir.join("plate1_y007_extra.tif").exists());
}

#[test]
fn test_incomplete_configuration() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let options = ProcessingOptions {
        config: Config {
            inp_dir: Some(temp_dir.path().to_path_buf()),
            ..Config::default()
        },
        dry_run: true,
    };

    let message = process_files(options).unwrap_err().to_string();
    assert!(message.contains("No output directory specified"), "{message}");
}

#[test]
fn test_config_file_drives_the_run() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let inp_dir = temp_dir.path().join("images");
    let out_dir = temp_dir.path().join("renamed");
    create_collection(&inp_dir, &["p01_GFP.tif", "p01_DAPI.tif"]);

    let config_path = temp_dir.path().join("rename.yaml");
    let config_content = format!(
        r#"
inpDir: "{}"
outDir: "{}"
filePattern: "p{{plate:dd}}_{{channel:c+}}.tif"
outFilePattern: "plate{{plate:d+}}_c{{channel:dd}}.tif"
"#,
        inp_dir.to_string_lossy().replace('\\', "\\\\"),
        out_dir.to_string_lossy().replace('\\', "\\\\"),
    );
    fs::write(&config_path, config_content).expect("Failed to write config file");

    let config = load_config(&config_path).expect("Failed to load config");
    let context = process_files(ProcessingOptions {
        config,
        dry_run: false,
    })
    .expect("Failed to process files");

    assert_eq!(context.stats.files_copied, 2);
    assert!(out_dir.join("plate1_c01.tif").exists());
    assert!(out_dir.join("plate1_c02.tif").exists());
}
