use chrono::NaiveDate;
use serde_json::json;
use slicer_rs::api::{EngineSnapshot, SlicerEngine, SlicerEngineConfig};
use slicer_rs::core::snapshot::{CategoryColumn, DataSnapshot};
use slicer_rs::core::SelectionMode;
use slicer_rs::host::NullFilterSink;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn engine() -> SlicerEngine<NullFilterSink> {
    SlicerEngine::new(NullFilterSink::default(), SlicerEngineConfig::default()).expect("engine")
}

fn seed_snapshot() -> DataSnapshot {
    DataSnapshot {
        category: Some(CategoryColumn {
            display_name: "Order Date".to_owned(),
            query_name: "Sales.OrderDate".to_owned(),
            values: vec![json!("2024-01-01"), json!("2024-06-30")],
        }),
        ..DataSnapshot::default()
    }
}

#[test]
fn snapshot_reflects_selection_and_input_constraints() {
    let mut engine = engine();
    engine.update(&seed_snapshot()).expect("seed update");
    engine
        .edit_start_date(Some(date(2024, 2, 1)))
        .expect("edit");

    let snap = engine.snapshot();
    assert_eq!(snap.header_title, "Order Date");
    assert_eq!(snap.mode, SelectionMode::Fallback);
    assert_eq!(snap.start_input.value, Some(date(2024, 2, 1)));
    assert_eq!(snap.start_input.min, Some(date(2024, 1, 1)));
    // The start picker may not pass the chosen end.
    assert_eq!(snap.start_input.max, Some(date(2024, 6, 30)));
    assert_eq!(snap.end_input.value, Some(date(2024, 6, 30)));
    // The end picker may not precede the chosen start.
    assert_eq!(snap.end_input.min, Some(date(2024, 2, 1)));
    assert_eq!(snap.end_input.max, Some(date(2024, 6, 30)));
    assert_eq!(snap.update_cycles, 1);
}

#[test]
fn fresh_engine_snapshot_is_all_unset() {
    let engine = engine();
    let snap = engine.snapshot();
    assert_eq!(snap.start_input.value, None);
    assert_eq!(snap.start_input.min, None);
    assert_eq!(snap.end_input.max, None);
    assert_eq!(snap.bounds, None);
    assert_eq!(snap.target, None);
    assert_eq!(snap.update_cycles, 0);
    assert_eq!(snap.pushed_filters, 0);
    assert_eq!(snap.dropped_filters, 0);
}

#[test]
fn repeated_snapshots_are_identical_without_intervening_activity() {
    let mut engine = engine();
    engine.update(&seed_snapshot()).expect("seed update");
    assert_eq!(engine.snapshot(), engine.snapshot());
}

#[test]
fn snapshot_counters_agree_with_the_sink() {
    let mut engine = engine();
    engine.update(&seed_snapshot()).expect("seed update");
    engine
        .edit_start_date(Some(date(2024, 3, 1)))
        .expect("edit");
    engine.clear_filter().expect("clear");

    let snap = engine.snapshot();
    let sink = engine.into_sink();
    assert_eq!(snap.pushed_filters, sink.apply_count as u64);
    assert_eq!(snap.dropped_filters, sink.remove_count as u64);
    assert_eq!(snap.pushed_filters, 2);
    assert_eq!(snap.dropped_filters, 1);
}

#[test]
fn snapshot_roundtrips_through_pretty_json() {
    let mut engine = engine();
    engine.update(&seed_snapshot()).expect("seed update");
    engine
        .edit_end_date(Some(date(2024, 5, 15)))
        .expect("edit");

    let json = engine.snapshot_json_pretty().expect("serialize snapshot");
    let parsed: EngineSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(parsed, engine.snapshot());
}
