use std::cell::RefCell;

use super::*;

const SAMPLE_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>
<MPL Version="2.0" Title="Library">
    <Item>
        <Field Name="Artist">Miles Davis</Field>
        <Field Name="Filename">D:\Music\Miles Davis\So What.flac</Field>
    </Item>
    <Item>
        <Field Name="Filename">d:\Music\Bill Evans\Peace Piece.flac</Field>
        <Field Name="Filename">ignored second match</Field>
    </Item>
    <Item>
        <Field Name="Artist">No filename here</Field>
    </Item>
    <Item>
        <Field Name="Filename"></Field>
    </Item>
    <Item>
        <Field Name="Filename">C:\SACD\Kind of Blue.iso;3</Field>
    </Item>
</MPL>"#;

fn extract(xml: &str) -> Result<ExtractReport, ListError> {
    extract_filenames(xml.as_bytes(), &ExtractOptions::default(), &|_| {})
}

#[test]
fn test_extract_sorted_filenames() {
    let report = extract(SAMPLE_EXPORT).unwrap();
    assert_eq!(report.items_processed, 5);
    assert_eq!(
        report.filenames,
        vec![
            r"C:\SACD\Kind of Blue.iso;3",
            r"d:\Music\Bill Evans\Peace Piece.flac",
            r"D:\Music\Miles Davis\So What.flac",
        ]
    );
}

#[test]
fn test_entities_and_cdata() {
    let xml = r#"<Items>
        <Item><Field Name="Filename">Tom &amp; Jerry.flac</Field></Item>
        <Item><Field Name="Filename"><![CDATA[R&B <live>.flac]]></Field></Item>
    </Items>"#;
    let report = extract(xml).unwrap();
    assert_eq!(report.filenames, vec!["R&B <live>.flac", "Tom & Jerry.flac"]);
}

#[test]
fn test_self_closing_field_ends_search() {
    let xml = r#"<Items>
        <Item><Field Name="Filename"/><Field Name="Filename">late.flac</Field></Item>
        <Item/>
    </Items>"#;
    let report = extract(xml).unwrap();
    assert!(report.filenames.is_empty());
    assert_eq!(report.items_processed, 2);
}

#[test]
fn test_nested_field_is_not_a_direct_child() {
    let xml = r#"<Items>
        <Item><Group><Field Name="Filename">nested.flac</Field></Group></Item>
    </Items>"#;
    let report = extract(xml).unwrap();
    assert!(report.filenames.is_empty());
    assert_eq!(report.items_processed, 1);
}

#[test]
fn test_custom_field_names() {
    let xml = r#"<library>
        <track><attr key="path">/music/a.flac</attr></track>
        <track><attr key="path">/music/B.flac</attr></track>
    </library>"#;
    let options = ExtractOptions {
        record_element: "track".to_string(),
        field_element: "attr".to_string(),
        name_attribute: "key".to_string(),
        field: "path".to_string(),
    };
    let report = extract_filenames(xml.as_bytes(), &options, &|_| {}).unwrap();
    assert_eq!(report.filenames, vec!["/music/a.flac", "/music/B.flac"]);
}

#[test]
fn test_progress_reported_every_interval() {
    let mut xml = String::from("<Items>");
    for i in 0..(EXTRACT_PROGRESS_INTERVAL * 2 + 5) {
        xml.push_str(&format!("<Item><Field Name=\"Filename\">{i}.flac</Field></Item>"));
    }
    xml.push_str("</Items>");

    let updates = RefCell::new(Vec::new());
    let report = extract_filenames(xml.as_bytes(), &ExtractOptions::default(), &|p| {
        updates.borrow_mut().push(p)
    })
    .unwrap();

    let updates = updates.into_inner();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].items_processed, EXTRACT_PROGRESS_INTERVAL);
    assert_eq!(updates[0].filenames_found, EXTRACT_PROGRESS_INTERVAL);
    assert_eq!(report.items_processed, EXTRACT_PROGRESS_INTERVAL * 2 + 5);
}

#[test]
fn test_mismatched_tags_fail() {
    let xml = r#"<Items><Item><Field Name="Filename">a.flac</Item></Items>"#;
    assert!(extract(xml).is_err());
}

#[test]
fn test_empty_document_fails() {
    assert!(extract("").is_err());
}
