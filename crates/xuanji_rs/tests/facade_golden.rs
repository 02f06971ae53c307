//! Facade calls under the default configuration.

use xuanji_rs::*;

fn clock() -> FixedClock {
    FixedClock(CivilDateTime::new(2024, 3, 15, 10, 30, 0.0))
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[test]
fn new_year_dates() {
    for (year, month, day) in [(2024, 2, 10), (2025, 1, 29), (2023, 1, 22), (1990, 1, 27)] {
        let d = lunar_new_year(year).unwrap();
        assert_eq!((d.month, d.day), (month, day), "{year}");
    }
}

#[test]
fn terms_cover_year() {
    let terms = solar_terms(2024).unwrap();
    assert_eq!(terms.len(), 24);
    assert_eq!(terms[0].term, SolarTerm::XiaoHan);
    assert!(matches!(solar_terms(2100), Err(XuanjiError::Search(_))));
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn form_to_charts() {
    let birth = birth_from_form("1990", "5", "17", "14", "male").unwrap();
    let req = DivinationRequest {
        category: Category::Career,
        question: "明年是否适合创业".into(),
        birth_data: Some(birth),
        divine_data: None,
    };
    let vd = divine_with_clock(&req, clock()).unwrap();
    let chart = vd.bazi.unwrap();
    assert_eq!(chart.day_master, chart.day.heavenly_stem.element());
    assert_eq!(chart.element_balance.total(), 8);
    assert!(vd.qimen.is_some());
    assert!(vd.hexagram.is_some());
}

#[test]
fn number_mode_request_json() {
    let req: DivinationRequest = serde_json::from_str(
        r#"{"category":"情感婚姻","question":"q",
            "divineData":{"method":"number","number1":"1","number2":"1"}}"#,
    )
    .unwrap();
    let vd = divine_with_clock(&req, clock()).unwrap();
    let h = vd.hexagram.unwrap();
    assert_eq!(h.result, "兑乾");
    assert_eq!(h.changing, 2);
}

#[test]
fn out_of_range_birth() {
    let req = DivinationRequest {
        category: Category::Health,
        question: "q".into(),
        birth_data: Some(birth_from_form("1850", "1", "1", "", "").unwrap()),
        divine_data: None,
    };
    assert!(matches!(
        divine_with_clock(&req, clock()),
        Err(XuanjiError::Divination(DivinationError::CalendricalRange(_)))
    ));
}
