use std::fs;
use std::path::Path;

use mediaindex_lib::{
    CollapseJob, CollapseMode, CompareJob, CompareOptions, ExtractJob, ExtractOptions,
    FixQuotesJob, IndexError, ListFormat, difference_output_path, run_collapse, run_compare,
    run_extract, run_fix_quotes,
};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_json(path: &Path) -> Vec<String> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// -- extract --

#[test]
fn extract_writes_sorted_csv() {
    let tmp = TempDir::new().unwrap();
    let input = write(
        tmp.path(),
        "lib.xml",
        r#"<MPL>
  <Item><Field Name="Filename">b.flac</Field></Item>
  <Item><Field Name="Artist">x</Field></Item>
  <Item><Field Name="Filename">A.flac</Field></Item>
</MPL>"#,
    );
    let output = tmp.path().join("lib.csv");

    let job = ExtractJob {
        input,
        output: output.clone(),
        format: None,
        options: ExtractOptions::default(),
    };
    let report = run_extract(&job, &|_| {}).unwrap();

    assert_eq!(report.items_processed, 3);
    assert_eq!(fs::read_to_string(&output).unwrap(), "Filename\nA.flac\nb.flac\n");
}

#[test]
fn extract_malformed_xml_creates_no_output() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "lib.xml", "<MPL><Item></MPL>");
    let output = tmp.path().join("lib.json");

    let job = ExtractJob {
        input,
        output: output.clone(),
        format: None,
        options: ExtractOptions::default(),
    };
    let result = run_extract(&job, &|_| {});

    assert!(matches!(result, Err(IndexError::Read { .. })));
    assert!(!output.exists());
}

#[test]
fn extract_then_collapse_twice_is_stable() {
    let tmp = TempDir::new().unwrap();
    let input = write(
        tmp.path(),
        "lib.xml",
        r#"<MPL>
  <Item><Field Name="Filename">Disc.iso;2</Field></Item>
  <Item><Field Name="Filename">Disc.iso;1</Field></Item>
  <Item><Field Name="Filename">single.flac</Field></Item>
</MPL>"#,
    );
    let list = tmp.path().join("lib.json");
    run_extract(
        &ExtractJob {
            input,
            output: list.clone(),
            format: None,
            options: ExtractOptions::default(),
        },
        &|_| {},
    )
    .unwrap();

    let job = CollapseJob {
        input: list.clone(),
        output: None,
        format: None,
        mode: CollapseMode::Strict,
    };
    run_collapse(&job).unwrap();
    let first = read_json(&list);
    let second_report = run_collapse(&job).unwrap();

    assert_eq!(first, vec!["Disc.iso", "single.flac"]);
    assert_eq!(read_json(&list), first);
    assert_eq!(second_report.collapsed, 0);
}

// -- collapse --

#[test]
fn collapse_csv_in_place() {
    let tmp = TempDir::new().unwrap();
    let input = write(
        tmp.path(),
        "lib.csv",
        "Filename\nAlbum;2\nb.flac\nAlbum;1\nAlbum;x\n",
    );

    let report = run_collapse(&CollapseJob {
        input: input.clone(),
        output: None,
        format: None,
        mode: CollapseMode::Strict,
    })
    .unwrap();

    assert_eq!(report.input_count, 4);
    assert_eq!(report.collapsed, 1);
    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        "Filename\nAlbum\nAlbum;x\nb.flac\n"
    );
}

#[test]
fn collapse_text_to_separate_output() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "lib.txt", "Mix;a\nMix;1\n");
    let output = tmp.path().join("collapsed.txt");

    run_collapse(&CollapseJob {
        input: input.clone(),
        output: Some(output.clone()),
        format: None,
        mode: CollapseMode::AnySuffix,
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Mix\n");
    assert_eq!(fs::read_to_string(&input).unwrap(), "Mix;a\nMix;1\n");
}

#[test]
fn collapse_missing_input_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = run_collapse(&CollapseJob {
        input: tmp.path().join("missing.csv"),
        output: None,
        format: Some(ListFormat::Csv),
        mode: CollapseMode::Strict,
    });
    assert!(matches!(result, Err(IndexError::NotFound(_))));
}

// -- compare --

#[test]
fn compare_saves_each_nonempty_difference() {
    let tmp = TempDir::new().unwrap();
    let left = write(
        tmp.path(),
        "lib.json",
        r#"["/Music/A.flac", "/Music/B.flac", "/Music/x.LOG"]"#,
    );
    let right = write(
        tmp.path(),
        "file_paths.json",
        r#"["/music/a.flac", "/music/c.flac", "/music/cover.jpg"]"#,
    );

    let outcome = run_compare(&CompareJob {
        left: left.clone(),
        right: right.clone(),
        out_dir: tmp.path().to_path_buf(),
        options: CompareOptions::default(),
    })
    .unwrap();

    assert_eq!(outcome.report.left_filtered, 1);
    assert_eq!(outcome.report.right_filtered, 1);
    assert_eq!(outcome.report.common, 1);

    let left_out = outcome.left_output.unwrap();
    let right_out = outcome.right_output.unwrap();
    assert_eq!(left_out, tmp.path().join("only_in_lib.txt"));
    assert_eq!(right_out, tmp.path().join("only_in_file_paths.txt"));
    assert_eq!(fs::read_to_string(left_out).unwrap(), "/Music/B.flac\n");
    assert_eq!(fs::read_to_string(right_out).unwrap(), "/music/c.flac\n");
}

#[test]
fn compare_identical_lists_write_nothing() {
    let tmp = TempDir::new().unwrap();
    let left = write(tmp.path(), "a.json", r#"["x.flac"]"#);
    let right = write(tmp.path(), "b.json", r#"["X.FLAC"]"#);

    let outcome = run_compare(&CompareJob {
        left: left.clone(),
        right: right.clone(),
        out_dir: tmp.path().to_path_buf(),
        options: CompareOptions::default(),
    })
    .unwrap();

    assert!(outcome.report.is_identical());
    assert!(outcome.left_output.is_none());
    assert!(!difference_output_path(tmp.path(), &left).exists());
    assert!(!difference_output_path(tmp.path(), &right).exists());
}

#[test]
fn compare_same_stem_gets_distinct_outputs() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("old")).unwrap();
    fs::create_dir(tmp.path().join("new")).unwrap();
    let left = write(&tmp.path().join("old"), "lib.json", r#"["a.flac"]"#);
    let right = write(&tmp.path().join("new"), "lib.json", r#"["b.flac"]"#);

    let outcome = run_compare(&CompareJob {
        left,
        right,
        out_dir: tmp.path().to_path_buf(),
        options: CompareOptions::default(),
    })
    .unwrap();

    assert_eq!(outcome.left_output.unwrap(), tmp.path().join("only_in_lib.txt"));
    assert_eq!(outcome.right_output.unwrap(), tmp.path().join("only_in_lib_2.txt"));
}

#[test]
fn compare_malformed_json_fails() {
    let tmp = TempDir::new().unwrap();
    let left = write(tmp.path(), "a.json", "[\"unterminated");
    let right = write(tmp.path(), "b.json", "[]");

    let result = run_compare(&CompareJob {
        left,
        right,
        out_dir: tmp.path().to_path_buf(),
        options: CompareOptions::default(),
    });
    assert!(matches!(result, Err(IndexError::Read { .. })));
}

// -- fix quotes --

#[test]
fn fix_quotes_rewrites_in_place() {
    let tmp = TempDir::new().unwrap();
    let input = write(
        tmp.path(),
        "lib.csv",
        "Filename\n\"D:\\\\Music\\\\a.flac\"\n\nplain.flac\n",
    );

    let fixed = run_fix_quotes(&FixQuotesJob {
        input: input.clone(),
        output: None,
    })
    .unwrap();

    assert_eq!(fixed.len(), 2);
    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        "Filename\nD:\\Music\\a.flac\nplain.flac\n"
    );
}
