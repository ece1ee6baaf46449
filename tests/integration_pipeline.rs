//! Integration tests for a full summarize run over files on disk

use std::fs;

use customer_summary::handlers::SummarizeHandler;
use customer_summary::projection::{MemorySink, PurchaseLine};
use customer_summary::ErrorKind;

mod common;

use common::{event, Fixture};

fn starter() -> Fixture {
    Fixture::new()
        .customers("customer_id,loyalty_score\nC1,5\nC2,3\n")
        .products("product_id,product_description,product_category\nP1,A novel,Books\nP2,Rake,Garden\n")
}

fn line(product_id: &str, category: &str, count: u64) -> PurchaseLine {
    PurchaseLine {
        product_id: product_id.into(),
        product_category: category.to_string(),
        purchase_count: count.into(),
    }
}

#[test]
fn test_resolves_known_and_unknown_products() {
    let fixture = Fixture::new()
        .customers("customer_id,loyalty_score\nC1,5\n")
        .products("product_id,product_category\nP1,Books\n")
        .transactions(
            "day1.jsonl",
            &[
                r#"{"customer_id":"C1","product_id":"P1","purchase_count":2}"#,
                r#"{"customer_id":"C1","product_id":"P9","purchase_count":1}"#,
            ],
        );

    let report = SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(report.documents_written, 1);
    assert_eq!(report.unresolved_products, 1);
    let doc = fixture.read_output("C1");
    assert_eq!(doc.customer_id, "C1");
    assert_eq!(doc.loyalty_score, "5");
    assert_eq!(doc.purchases, vec![line("P1", "Books", 2), line("P9", "", 1)]);
}

#[test]
fn test_unknown_customer_is_silently_dropped() {
    let fixture = starter().transactions(
        "day1.jsonl",
        &[&event("C99", "P1", 4), &event("C1", "P2", 1)],
    );

    let report = SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(report.events_read, 2);
    assert_eq!(report.events_dropped, 1);
    assert_eq!(
        fixture.output_files(),
        vec!["customer_C1.json", "customer_C2.json"]
    );
    assert_eq!(fixture.read_output("C1").purchases, vec![line("P2", "Garden", 1)]);
    assert!(fixture.read_output("C2").purchases.is_empty());
}

#[test]
fn test_customer_without_events_gets_empty_document() {
    let fixture = starter();

    let report = SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(report.sources, 0);
    assert_eq!(report.documents_written, 2);
    let text = fs::read_to_string(fixture.output_file("C2")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["purchases"], serde_json::json!([]));
    assert_eq!(value["loyalty_score"], "3");
}

#[test]
fn test_purchases_keep_encounter_order_across_sources() {
    let fixture = starter()
        .transactions("b.jsonl", &[&event("C1", "P2", 3), &event("C2", "P1", 1)])
        .transactions("a.jsonl", &[&event("C1", "P1", 1), &event("C1", "P9", 7)]);

    let report = SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(report.sources, 2);
    assert_eq!(
        fixture.read_output("C1").purchases,
        vec![line("P1", "Books", 1), line("P9", "", 7), line("P2", "Garden", 3)]
    );
    assert_eq!(fixture.read_output("C2").purchases, vec![line("P1", "Books", 1)]);
}

#[test]
fn test_repeated_events_are_not_merged() {
    let fixture = starter().transactions(
        "day1.jsonl",
        &[&event("C1", "P1", 1), &event("C1", "P1", 1), &event("C1", "P1", 1)],
    );

    SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(fixture.read_output("C1").purchases.len(), 3);
}

#[test]
fn test_non_source_files_are_skipped() {
    let fixture = starter()
        .transactions("notes.txt", &["this is not json"])
        .transactions("old.json", &["{"])
        .transactions("day1.jsonl", &[&event("C1", "P1", 2)]);
    fs::create_dir(fixture.path("transactions").join("nested.jsonl")).unwrap();

    let report = SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(report.sources, 1);
    assert_eq!(fixture.read_output("C1").purchases.len(), 1);
}

#[test]
fn test_purchase_count_passes_through() {
    let fixture = starter().transactions(
        "day1.jsonl",
        &[r#"{"customer_id":"C1","product_id":"P1","purchase_count":2.5}"#],
    );

    SummarizeHandler::new().execute(&fixture.command()).unwrap();

    let text = fs::read_to_string(fixture.output_file("C1")).unwrap();
    assert!(text.contains("\"purchase_count\": 2.5"));
}

#[test]
fn test_string_purchase_count_passes_through() {
    let fixture = starter().transactions(
        "day1.jsonl",
        &[r#"{"customer_id":"C1","product_id":"P1","purchase_count":"2"}"#],
    );

    SummarizeHandler::new().execute(&fixture.command()).unwrap();

    let text = fs::read_to_string(fixture.output_file("C1")).unwrap();
    assert!(text.contains("\"purchase_count\": \"2\""));
}

#[test]
fn test_large_purchase_count_is_written_exactly() {
    let fixture = starter().transactions(
        "day1.jsonl",
        &[r#"{"customer_id":"C1","product_id":"P1","purchase_count":123456789012345678901234}"#],
    );

    SummarizeHandler::new().execute(&fixture.command()).unwrap();

    let text = fs::read_to_string(fixture.output_file("C1")).unwrap();
    assert!(text.contains("\"purchase_count\": 123456789012345678901234"));
}

#[test]
fn test_non_string_customer_id_is_dropped() {
    let fixture = Fixture::new()
        .customers("customer_id,loyalty_score\n7,5\n")
        .products("product_id,product_category\nP1,Books\n")
        .transactions(
            "day1.jsonl",
            &[r#"{"customer_id":7,"product_id":"P1","purchase_count":1}"#],
        );

    let report = SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(report.events_read, 1);
    assert_eq!(report.events_dropped, 1);
    assert!(fixture.read_output("7").purchases.is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_source_is_read() {
    let fixture = starter().transactions("day1.jsonl", &[&event("C1", "P1", 1)]);
    let target = fixture.path("archive.jsonl");
    fs::write(&target, format!("{}\n", event("C2", "P2", 4))).unwrap();
    std::os::unix::fs::symlink(&target, fixture.path("transactions").join("day2.jsonl"))
        .unwrap();

    let report = SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(report.sources, 2);
    assert_eq!(fixture.read_output("C2").purchases, vec![line("P2", "Garden", 4)]);
}

#[test]
fn test_reference_rows_with_extra_fields_are_accepted() {
    let fixture = Fixture::new()
        .customers("customer_id,loyalty_score\nC1,5,gold\n")
        .products("product_id,product_category\nP1,Books,2024\n")
        .transactions("day1.jsonl", &[&event("C1", "P1", 2)]);

    SummarizeHandler::new().execute(&fixture.command()).unwrap();

    let doc = fixture.read_output("C1");
    assert_eq!(doc.loyalty_score, "5");
    assert_eq!(doc.purchases, vec![line("P1", "Books", 2)]);
}

#[test]
fn test_rerun_is_byte_identical() {
    let fixture = starter().transactions(
        "day1.jsonl",
        &[&event("C1", "P1", 2), &event("C2", "P9", 1), &event("C1", "P2", 5)],
    );
    let handler = SummarizeHandler::new();

    handler.execute(&fixture.command()).unwrap();
    let first: Vec<Vec<u8>> = ["C1", "C2"]
        .iter()
        .map(|id| fs::read(fixture.output_file(id)).unwrap())
        .collect();

    handler.execute(&fixture.command()).unwrap();
    let second: Vec<Vec<u8>> = ["C1", "C2"]
        .iter()
        .map(|id| fs::read(fixture.output_file(id)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_execute_into_memory_sink() {
    let fixture = starter().transactions("day1.jsonl", &[&event("C2", "P2", 1)]);

    let (report, sink) = SummarizeHandler::new()
        .execute_into(&fixture.command(), MemorySink::new())
        .unwrap();

    assert_eq!(report.documents_written, 2);
    assert_eq!(sink.keys().collect::<Vec<_>>(), vec!["C1", "C2"]);
    assert_eq!(sink.get("C2").unwrap().purchases, vec![line("P2", "Garden", 1)]);
    assert!(!fixture.output_dir().exists());
}

// =========================================================================
// Failure kinds
// =========================================================================

#[test]
fn test_missing_customer_table_is_reference_error() {
    let fixture = Fixture::new().products("product_id,product_category\nP1,Books\n");

    let err = SummarizeHandler::new().execute(&fixture.command()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Reference);
    assert!(!fixture.output_dir().exists());
}

#[test]
fn test_malformed_product_table_is_reference_error() {
    let fixture = Fixture::new()
        .customers("customer_id,loyalty_score\nC1,5\n")
        .products("product_id,description\nP1,Books\n")
        .transactions("day1.jsonl", &[&event("C1", "P1", 1)]);

    let err = SummarizeHandler::new().execute(&fixture.command()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Reference);
    assert!(err.to_string().contains("products"));
}

#[test]
fn test_bad_event_line_aborts_run() {
    let fixture = starter()
        .transactions("a.jsonl", &[&event("C1", "P1", 1), "{\"customer_id\":\"C1\""])
        .transactions("b.jsonl", &[&event("C2", "P1", 1)]);

    let err = SummarizeHandler::new().execute(&fixture.command()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EventDecode);
    assert!(err.to_string().contains("a.jsonl:2"));
    assert!(!fixture.output_dir().exists());
}

#[test]
fn test_event_missing_field_aborts_run() {
    let fixture = starter().transactions(
        "day1.jsonl",
        &[r#"{"customer_id":"C1","product_id":"P1"}"#],
    );

    let err = SummarizeHandler::new().execute(&fixture.command()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EventDecode);
}

#[test]
fn test_missing_transactions_dir_is_event_error() {
    let fixture = starter();
    fs::remove_dir(fixture.path("transactions")).unwrap();

    let err = SummarizeHandler::new().execute(&fixture.command()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EventDecode);
}

#[test]
fn test_unwritable_output_is_output_error() {
    let fixture = starter();
    fs::write(fixture.path("outputs"), "occupied").unwrap();

    let err = SummarizeHandler::new().execute(&fixture.command()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::OutputWrite);
}

#[test]
fn test_unsafe_customer_id_is_output_error() {
    let fixture = Fixture::new()
        .customers("customer_id,loyalty_score\n../escape,5\n")
        .products("product_id,product_category\n");

    let err = SummarizeHandler::new().execute(&fixture.command()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::OutputWrite);
    assert!(!fixture.path("escape.json").exists());
    assert!(!fixture.root.path().join("customer_..").exists());
}

#[test]
fn test_document_lengths_match_matched_events() {
    let customers = ["C1", "C2", "C3"];
    let mut lines = Vec::new();
    let mut expected = [0usize; 3];
    for i in 0..60u64 {
        let slot = (i * 7 % 5) as usize;
        let customer_id = if slot < 3 { customers[slot].to_string() } else { format!("X{}", i) };
        if slot < 3 {
            expected[slot] += 1;
        }
        lines.push(event(&customer_id, &format!("P{}", i % 4), i % 3 + 1));
    }
    let split = lines.len() / 2;
    let first: Vec<&str> = lines[..split].iter().map(String::as_str).collect();
    let second: Vec<&str> = lines[split..].iter().map(String::as_str).collect();

    let fixture = Fixture::new()
        .customers("customer_id,loyalty_score\nC1,1\nC2,2\nC3,3\n")
        .products("product_id,product_category\nP0,Books\nP1,Music\n")
        .transactions("1.jsonl", &first)
        .transactions("2.jsonl", &second);

    let report = SummarizeHandler::new().execute(&fixture.command()).unwrap();

    assert_eq!(report.events_read, 60);
    assert_eq!(report.events_applied, expected.iter().sum::<usize>());
    for (customer_id, count) in customers.iter().zip(expected) {
        let doc = fixture.read_output(customer_id);
        assert_eq!(doc.purchases.len(), count, "{customer_id}");
        for purchase in &doc.purchases {
            let category = match purchase.product_id.as_str() {
                Some("P0") => "Books",
                Some("P1") => "Music",
                _ => "",
            };
            assert_eq!(purchase.product_category, category);
        }
    }
    assert_eq!(fixture.output_files().len(), 3);
}
