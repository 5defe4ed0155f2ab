//! Integration test: normalize an address, render both documents, write them, read them back.

use chrono::NaiveDate;
use owui_urls_core::origin::Origin;
use owui_urls_core::output::{self, OutputFormat, DEFAULT_FILE_PREFIX};
use owui_urls_core::render::json::UrlDocument;
use owui_urls_core::render::{json, markdown};
use std::fs;
use tempfile::tempdir;

#[test]
fn both_documents_describe_the_same_urls() {
    let origin = Origin::normalize("chat.example.com:8080/workspace?tab=1#x");
    assert_eq!(origin.as_str(), "https://chat.example.com:8080");
    let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();

    let dir = tempdir().unwrap();
    let md_path = output::write_document(
        dir.path(),
        DEFAULT_FILE_PREFIX,
        &origin,
        OutputFormat::Markdown,
        &markdown::render(&origin, date),
    )
    .unwrap();
    let json_path = output::write_document(
        dir.path(),
        DEFAULT_FILE_PREFIX,
        &origin,
        OutputFormat::Json,
        &json::render(&origin, date).unwrap(),
    )
    .unwrap();

    assert_eq!(
        md_path.file_name().unwrap(),
        "owui-urls-chat.example.com-8080.md"
    );
    assert_eq!(
        json_path.file_name().unwrap(),
        "owui-urls-chat.example.com-8080.json"
    );

    let md = fs::read_to_string(&md_path).unwrap();
    let doc: UrlDocument = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(doc.base_url, "https://chat.example.com:8080");
    assert_eq!(doc.metadata.last_updated, "2025-01-31");
    assert!(md.contains("*Generated on: 2025-01-31*"));

    for section in &doc.sections {
        for endpoint in &section.endpoints {
            assert!(
                md.contains(&format!("| {} | `{}` |", endpoint.function, endpoint.full_url)),
                "markdown row missing for {}",
                endpoint.function
            );
            assert_eq!(endpoint.expand(&doc.base_url), endpoint.full_url);
        }
    }
}
