use chrono::NaiveDate;
use serde_json::json;
use slicer_rs::api::{SlicerEngine, SlicerEngineConfig};
use slicer_rs::core::snapshot::{
    CategoryColumn, DataSnapshot, MeasureColumn, RestoredCondition, RestoredFilter,
};
use slicer_rs::core::{FilterDirective, SelectionMode};
use slicer_rs::host::NullFilterSink;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn engine() -> SlicerEngine<NullFilterSink> {
    SlicerEngine::new(NullFilterSink::default(), SlicerEngineConfig::default()).expect("engine")
}

fn base_snapshot() -> DataSnapshot {
    DataSnapshot {
        category: Some(CategoryColumn {
            display_name: "Order Date".to_owned(),
            query_name: "Sales.OrderDate".to_owned(),
            values: vec![json!("2024-01-01"), json!("2024-12-31")],
        }),
        ..DataSnapshot::default()
    }
}

fn condition(operator: &str, value: serde_json::Value) -> RestoredCondition {
    RestoredCondition {
        operator: operator.to_owned(),
        value,
    }
}

#[test]
fn restored_range_mirrors_host_state_without_re_emitting() {
    let mut engine = engine();
    let mut snapshot = base_snapshot();
    snapshot.restored_filters = vec![RestoredFilter {
        conditions: vec![
            condition("GreaterThanOrEqual", json!("2024-03-01T00:00:00")),
            condition("LessThanOrEqual", json!("2024-04-30T00:00:00")),
        ],
    }];

    let directive = engine.update(&snapshot).expect("update");
    assert_eq!(directive, FilterDirective::Keep);

    let selection = engine.selection();
    assert_eq!(selection.start, Some(date(2024, 3, 1)));
    assert_eq!(selection.end, Some(date(2024, 4, 30)));
    assert_eq!(selection.mode, SelectionMode::Restored);

    // The host already holds this filter; the sink must stay untouched.
    let sink = engine.into_sink();
    assert_eq!(sink.apply_count, 0);
    assert_eq!(sink.remove_count, 0);
}

#[test]
fn repeated_restored_snapshots_stay_silent() {
    let mut engine = engine();
    let mut snapshot = base_snapshot();
    snapshot.restored_filters = vec![RestoredFilter {
        conditions: vec![condition("GreaterThanOrEqual", json!("2024-03-01T00:00:00"))],
    }];

    engine.update(&snapshot).expect("first update");
    let second = engine.update(&snapshot).expect("second update");
    let third = engine.update(&snapshot).expect("third update");
    assert_eq!(second, FilterDirective::Keep);
    assert_eq!(third, FilterDirective::Keep);
    assert_eq!(engine.selection_mode(), SelectionMode::Restored);
}

#[test]
fn one_sided_restore_replaces_the_selection_wholesale() {
    let mut engine = engine();
    // Establish a two-sided selection first via fallback fill.
    engine.update(&base_snapshot()).expect("fallback update");
    assert!(engine.selection().range().is_some());

    let mut snapshot = base_snapshot();
    snapshot.restored_filters = vec![RestoredFilter {
        conditions: vec![condition("LessThanOrEqual", json!("2024-06-30T00:00:00"))],
    }];
    engine.update(&snapshot).expect("restore update");

    let selection = engine.selection();
    assert_eq!(selection.start, None);
    assert_eq!(selection.end, Some(date(2024, 6, 30)));
    assert_eq!(selection.mode, SelectionMode::Restored);
}

#[test]
fn unparseable_restored_operand_leaves_that_side_unset() {
    let mut engine = engine();
    let mut snapshot = base_snapshot();
    snapshot.restored_filters = vec![RestoredFilter {
        conditions: vec![
            condition("GreaterThanOrEqual", json!("garbage")),
            condition("LessThanOrEqual", json!("2024-06-30T00:00:00")),
        ],
    }];

    let directive = engine.update(&snapshot).expect("update");
    assert_eq!(directive, FilterDirective::Keep);
    assert_eq!(engine.selection().start, None);
    assert_eq!(engine.selection().end, Some(date(2024, 6, 30)));
}

#[test]
fn restore_wins_over_measure_defaults_in_the_same_cycle() {
    let mut engine = engine();
    let mut snapshot = base_snapshot();
    snapshot.measures = vec![
        MeasureColumn {
            values: vec![json!("2024-02-01")],
        },
        MeasureColumn {
            values: vec![json!("2024-02-28")],
        },
    ];
    snapshot.restored_filters = vec![RestoredFilter {
        conditions: vec![
            condition("GreaterThanOrEqual", json!("2024-03-01T00:00:00")),
            condition("LessThanOrEqual", json!("2024-04-30T00:00:00")),
        ],
    }];

    let directive = engine.update(&snapshot).expect("update");
    assert_eq!(directive, FilterDirective::Keep);
    assert_eq!(engine.selection().start, Some(date(2024, 3, 1)));
    assert_eq!(engine.selection_mode(), SelectionMode::Restored);

    // Dropping the restored filter lets the untouched defaults take over.
    snapshot.restored_filters.clear();
    let directive = engine.update(&snapshot).expect("post-restore update");
    assert!(matches!(directive, FilterDirective::Apply(_)));
    assert_eq!(engine.selection().start, Some(date(2024, 2, 1)));
    assert_eq!(engine.selection().end, Some(date(2024, 2, 28)));
    assert_eq!(engine.selection_mode(), SelectionMode::TrackingDefaults);
}

#[test]
fn reversed_restored_range_is_normalized() {
    let mut engine = engine();
    let mut snapshot = base_snapshot();
    snapshot.restored_filters = vec![RestoredFilter {
        conditions: vec![
            condition("GreaterThanOrEqual", json!("2024-09-01T00:00:00")),
            condition("LessThanOrEqual", json!("2024-02-01T00:00:00")),
        ],
    }];

    engine.update(&snapshot).expect("update");
    let (start, end) = engine.selection().range().expect("normalized range");
    assert!(start <= end);
}
