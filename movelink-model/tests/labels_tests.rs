use movelink_model::{COMBO_CHART, EntryLabels, UNKNOWN_LABEL, known_label};

#[test]
fn known_labels_cover_base_combo() {
    for index in [300, 301, 302, 303, 304, 340, 341, 342, 343] {
        assert!(known_label(index).is_some(), "missing label for {index}");
        assert!(COMBO_CHART.contains(&index.to_string()));
    }
}

#[test]
fn unknown_index_falls_back() {
    let labels = EntryLabels::new();
    assert_eq!(labels.label(9999), UNKNOWN_LABEL);
    assert_eq!(labels.describe(9999), "9999: Unknown");
}

#[test]
fn overrides_win_over_compiled_in_table() {
    let labels = EntryLabels::new().with_label(300, "OPENER").with_label(5, "ENTRY5");
    assert_eq!(labels.label(300), "OPENER");
    assert_eq!(labels.label(5), "ENTRY5");
    assert_eq!(labels.label(301), "LIGHT_2");
}

#[test]
fn labels_deserialize_from_index_map() {
    let labels: EntryLabels = serde_json::from_str(r#"{"12": "TAUNT"}"#).unwrap();
    assert_eq!(labels.label(12), "TAUNT");
}
