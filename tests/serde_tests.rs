use aztro_lite::{compute_positions, Body, BirthInfo, Chart, ChartMode, Location, PositionSet};
use chrono::{TimeZone, Utc};

#[test]
fn test_position_set_serializes_as_flat_map() {
    let positions: PositionSet = [(Body::Sun, 10.5), (Body::Moon, 200.0)]
        .into_iter()
        .collect();

    let json = serde_json::to_string(&positions).unwrap();
    assert_eq!(json, r#"{"Sun":10.5,"Moon":200.0}"#);
}

#[test]
fn test_position_set_round_trips_in_order() {
    let date_time = Utc.with_ymd_and_hms(2020, 7, 14, 12, 30, 0).unwrap();
    let original = compute_positions(date_time, &Location::mumbai()).unwrap();

    let json = serde_json::to_string(&original).unwrap();
    let parsed: PositionSet = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, original);
}

#[test]
fn test_unknown_body_name_is_rejected() {
    let result: Result<PositionSet, _> = serde_json::from_str(r#"{"Pluto":12.0}"#);
    assert!(result.is_err());
}

#[test]
fn test_chart_serializes_signs_by_name() {
    let positions: PositionSet = [
        (Body::Sun, 10.0),
        (Body::Moon, 95.0),
        (Body::Ascendant, 185.0),
    ]
    .into_iter()
    .collect();
    let chart = Chart::build(&positions, ChartMode::Full).unwrap();

    let value = serde_json::to_value(&chart).unwrap();
    assert_eq!(value["sun_sign"], "Aries");
    assert_eq!(value["moon_sign"], "Cancer");
    assert_eq!(value["rising_sign"], "Libra");
    assert_eq!(value["dominant_element"], "Fire");
    assert_eq!(value["positions"]["Sun"], 10.0);
}

#[test]
fn test_unknown_rising_serializes_as_null() {
    let positions: PositionSet = [(Body::Sun, 10.0), (Body::Moon, 95.0)]
        .into_iter()
        .collect();
    let chart = Chart::build(&positions, ChartMode::Full).unwrap();

    let value = serde_json::to_value(&chart).unwrap();
    assert!(value["rising_sign"].is_null());
}

#[test]
fn test_birth_info_round_trips() {
    let birth = BirthInfo {
        date_time: Utc.with_ymd_and_hms(1991, 6, 18, 7, 10, 0).unwrap(),
        location: Location::kochi(),
    };

    let json = serde_json::to_string(&birth).unwrap();
    let parsed: BirthInfo = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, birth);
}
