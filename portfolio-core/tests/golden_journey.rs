use std::fs;

use portfolio_core::{MilestoneList, SUMMARY_HEADER};
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn journey_matches_golden() {
    let actual = serde_json::to_value(MilestoneList::journey()).expect("Không serialize danh sách");

    let expected = fs::read_to_string(fixture_path("journey.json"))
        .expect("Không đọc được golden journey");
    let expected_value: Value = serde_json::from_str(&expected).expect("Golden không hợp lệ");

    assert_eq!(actual, expected_value);
}

#[test]
fn golden_file_loads_back_into_the_same_list() {
    let data = fs::read_to_string(fixture_path("journey.json"))
        .expect("Không đọc được golden journey");
    let list = MilestoneList::from_json_str(&data).expect("Golden phải hợp lệ");

    assert_eq!(list, MilestoneList::journey());
}

#[test]
fn lesson_summary_lists_every_role_in_order() {
    let journey = MilestoneList::journey();
    let summary = journey.lesson_summary();

    assert_eq!(SUMMARY_HEADER, "Quick lessons summary:");
    assert_eq!(summary.len(), journey.len());
    assert_eq!(
        summary[0],
        "Java House - Barista -> Customer-first thinking is the foundation of product design."
    );
    assert_eq!(
        summary[5],
        "JuaKazi - Founder (building) -> Solve clear problems for real people."
    );
}
