#![allow(dead_code)]

use metar_quiz_core::{ReportId, WeatherReport};
use serde_json::{json, Value};

/// Parsed KJFK report with three cloud layers, rain and remarks
pub fn sample_json() -> Value {
    json!({
        "station": "KJFK",
        "time": {"repr": "1551", "dt": "2024-03-12T15:51:00Z"},
        "wind_direction": {"repr": "350", "value": 350},
        "wind_speed": {"repr": "21", "value": 21},
        "wind_gust": {"repr": "29", "value": 29},
        "altimeter": {"repr": "A2966", "value": 29.66},
        "temperature": {"repr": "10", "value": 10},
        "dewpoint": {"repr": "07", "value": 7},
        "visibility": {"repr": "10", "value": 10},
        "units": {
            "altimeter": "inHg",
            "altitude": "ft",
            "temperature": "C",
            "visibility": "sm",
            "wind_speed": "kt"
        },
        "clouds": [
            {"repr": "FEW024", "type": "FEW", "altitude": 2400},
            {"repr": "BKN036", "type": "BKN", "altitude": 3600},
            {"repr": "OVC046", "type": "OVC", "altitude": 4600}
        ],
        "wx_codes": [
            {"repr": "-RA", "value": "-RA"}
        ],
        "remarks_info": {
            "codes": [
                {"repr": "AO2", "value": "AO2"},
                {"repr": "P0000", "value": "Trace amount of rain in the last hour"},
                {"repr": "RAB10", "value": "Rain began at :10"}
            ],
            "temperature_decimal": {"repr": "T01000067", "value": 10},
            "dewpoint_decimal": {"repr": "T01000067", "value": 6.7},
            "sea_level_pressure": {"repr": "SLP042", "value": 1004.2}
        }
    })
}

/// Layers with repeated covers, in report order
pub fn duplicate_clouds() -> Value {
    json!([
        {"type": "FEW", "altitude": 2400},
        {"type": "FEW", "altitude": 5000},
        {"type": "SCT", "altitude": 9800},
        {"type": "BKN", "altitude": 3600},
        {"type": "OVC", "altitude": 4600},
        {"type": "OVC", "altitude": 9000},
        {"type": "OVC", "altitude": 7000}
    ])
}

pub fn report(id: i64, data: Value) -> WeatherReport {
    WeatherReport::new(ReportId(id), data)
}

pub fn sample(id: i64) -> WeatherReport {
    report(id, sample_json())
}

/// Sample report with one value replaced, addressed by a JSON pointer
pub fn sample_with(pointer: &str, value: Value) -> WeatherReport {
    let mut data = sample_json();
    *data.pointer_mut(pointer).expect("pointer into sample") = value;
    report(1, data)
}

/// Sample report with the key at `pointer` removed from its parent object
pub fn sample_without(pointer: &str) -> WeatherReport {
    let mut data = sample_json();
    let (parent, key) = pointer.rsplit_once('/').expect("pointer with a parent");
    data.pointer_mut(parent)
        .and_then(Value::as_object_mut)
        .expect("parent object")
        .remove(key)
        .expect("key present in sample");
    report(1, data)
}
