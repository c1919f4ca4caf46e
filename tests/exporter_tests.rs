use std::io::{Cursor, Read};

use zip::ZipArchive;

use viewharvest::data_models::{ResultRow, XLSX_MIME_TYPE};
use viewharvest::exporter::{self, HEADERS};

fn rows(n: usize) -> Vec<ResultRow> {
    (1..=n)
        .map(|i| ResultRow::new(i, format!("Title {i}"), Some(format!("https://blog.naver.com/{i}"))))
        .collect()
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_row_count_is_rows_plus_header() {
    for n in [0, 1, 7, 30] {
        let artifact = exporter::export("rust", &rows(n)).unwrap();
        let sheet = read_part(&artifact.bytes, "xl/worksheets/sheet1.xml");
        assert_eq!(sheet.matches("<row ").count(), n + 1, "n={n}");
    }
}

#[test]
fn test_archive_has_workbook_parts() {
    let artifact = exporter::export("rust", &rows(1)).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(&artifact.bytes)).unwrap();
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/worksheets/sheet1.xml",
    ] {
        assert!(archive.by_name(part).is_ok(), "missing {part}");
    }
    assert!(read_part(&artifact.bytes, "xl/workbook.xml").contains(r#"name="Sheet1""#));
}

#[test]
fn test_columns_in_order_with_numeric_index() {
    let artifact = exporter::export("rust", &rows(2)).unwrap();
    let sheet = read_part(&artifact.bytes, "xl/worksheets/sheet1.xml");

    let header_pos: Vec<usize> = HEADERS.iter().map(|h| sheet.find(h).unwrap()).collect();
    assert!(header_pos[0] < header_pos[1] && header_pos[1] < header_pos[2]);

    assert!(sheet.contains(r#"<c r="A2"><v>1</v></c>"#));
    assert!(sheet.contains(r#"<c r="B2" t="inlineStr"><is><t xml:space="preserve">Title 1</t></is></c>"#));
    assert!(sheet.contains(r#"<c r="C3" t="inlineStr"><is><t xml:space="preserve">https://blog.naver.com/2</t></is></c>"#));
}

#[test]
fn test_text_is_escaped() {
    let rows = vec![ResultRow::new(1, "Tom & Jerry <3".into(), Some("https://x/?a=1&b=2".into()))];
    let artifact = exporter::export("rust", &rows).unwrap();
    let sheet = read_part(&artifact.bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("Tom &amp; Jerry &lt;3"));
    assert!(sheet.contains("https://x/?a=1&amp;b=2"));
}

#[test]
fn test_artifact_name_and_mime() {
    let artifact = exporter::export("맛집", &rows(1)).unwrap();
    assert_eq!(artifact.file_name, "맛집_views_data.xlsx");
    assert_eq!(artifact.mime_type(), XLSX_MIME_TYPE);
    assert!(artifact.data_uri().starts_with(
        "data:application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;base64,UEsD"
    ));
}
