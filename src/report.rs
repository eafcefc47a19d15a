//! Read-only access to a parsed METAR report
//!
//! The report arrives as nested JSON from the upstream parser. Every lookup
//! goes through [`Field`], which tracks the dotted path walked so far and
//! reports the three extraction failures:
//!
//! * a missing key is [`ExtractError::FieldNotFound`]
//! * stepping into `null` or a scalar is [`ExtractError::MalformedShape`]
//! * a terminal `null`, `""` or empty list is [`ExtractError::UnusableData`]

use serde_json::Value;

use crate::error::ExtractError;
use crate::models::ReportId;

/// One parsed METAR plus the id of the row that owns it
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    id: ReportId,
    data: Value,
}

impl WeatherReport {
    pub fn new(id: ReportId, data: Value) -> Self {
        Self { id, data }
    }

    /// Parse the JSON produced by the METAR parser
    pub fn from_json(id: ReportId, json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(id, serde_json::from_str(json)?))
    }

    pub fn id(&self) -> ReportId {
        self.id
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn root(&self) -> Field<'_> {
        Field {
            value: &self.data,
            path: String::new(),
        }
    }

    /// Walk a chain of object keys from the root
    pub fn field(&self, path: &[&str]) -> Result<Field<'_>, ExtractError> {
        path.iter().try_fold(self.root(), |field, key| field.get(key))
    }

    /// Rendered scalar at `path`
    pub fn text(&self, path: &[&str]) -> Result<String, ExtractError> {
        self.field(path)?.text()
    }

    /// Unit string for a measured field, taken from the sibling `units` map
    pub fn units(&self, field: &str) -> Result<String, ExtractError> {
        self.text(&["units", field])
    }

    /// `"<value> <units>"` for a `{value, repr}` field
    pub fn measured(&self, path: &[&str], units_field: &str) -> Result<String, ExtractError> {
        let value = self.text(path)?;
        let units = self.units(units_field)?;
        Ok(format!("{} {}", value, units))
    }
}

/// A position inside the report
#[derive(Debug, Clone)]
pub struct Field<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Field<'a> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Step into an object key
    pub fn get(&self, key: &str) -> Result<Field<'a>, ExtractError> {
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        };

        match self.value {
            Value::Object(map) => match map.get(key) {
                Some(value) => Ok(Field { value, path }),
                None => Err(ExtractError::FieldNotFound { path }),
            },
            other => Err(ExtractError::MalformedShape {
                path,
                expected: "object",
                found: kind(other),
            }),
        }
    }

    /// Render a terminal value as answer text
    pub fn text(&self) -> Result<String, ExtractError> {
        match self.value {
            Value::Null => Err(ExtractError::unusable(&self.path, "value is null")),
            Value::String(s) if s.is_empty() => {
                Err(ExtractError::unusable(&self.path, "value is empty"))
            }
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(ExtractError::MalformedShape {
                path: self.path.clone(),
                expected: "string or number",
                found: kind(other),
            }),
        }
    }

    /// Elements of a non-empty list
    pub fn items(&self) -> Result<Vec<Field<'a>>, ExtractError> {
        match self.value {
            Value::Null => Err(ExtractError::unusable(&self.path, "list is null")),
            Value::Array(items) if items.is_empty() => {
                Err(ExtractError::unusable(&self.path, "list is empty"))
            }
            Value::Array(items) => Ok(items
                .iter()
                .enumerate()
                .map(|(i, value)| Field {
                    value,
                    path: format!("{}[{}]", self.path, i),
                })
                .collect()),
            other => Err(ExtractError::MalformedShape {
                path: self.path.clone(),
                expected: "list",
                found: kind(other),
            }),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(data: Value) -> WeatherReport {
        WeatherReport::new(ReportId(1), data)
    }

    #[test]
    fn renders_strings_and_numbers() {
        let r = report(json!({
            "station": "KJFK",
            "altimeter": {"value": 29.66},
            "temperature": {"value": 10},
        }));
        assert_eq!(r.text(&["station"]).unwrap(), "KJFK");
        assert_eq!(r.text(&["altimeter", "value"]).unwrap(), "29.66");
        assert_eq!(r.text(&["temperature", "value"]).unwrap(), "10");
    }

    #[test]
    fn missing_key_is_field_not_found() {
        let r = report(json!({"wind_direction": {"repr": "350"}}));
        let err = r.text(&["wind_direction", "value"]).unwrap_err();
        assert_eq!(
            err,
            ExtractError::FieldNotFound {
                path: "wind_direction.value".to_string()
            }
        );
    }

    #[test]
    fn stepping_into_null_is_malformed() {
        let r = report(json!({"wind_direction": null}));
        let err = r.text(&["wind_direction", "value"]).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MalformedShape { found: "null", .. }
        ));
        assert_eq!(err.path(), "wind_direction.value");
    }

    #[test]
    fn stepping_into_scalar_is_malformed() {
        let r = report(json!({"units": "kt"}));
        let err = r.units("wind_speed").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MalformedShape { found: "string", .. }
        ));
    }

    #[test]
    fn null_and_empty_values_are_unusable() {
        let r = report(json!({"station": null, "time": {"repr": ""}}));
        assert!(matches!(
            r.text(&["station"]),
            Err(ExtractError::UnusableData { .. })
        ));
        assert!(matches!(
            r.text(&["time", "repr"]),
            Err(ExtractError::UnusableData { .. })
        ));
    }

    #[test]
    fn container_as_terminal_is_malformed() {
        let r = report(json!({"time": {"repr": {"nested": true}}}));
        assert!(matches!(
            r.text(&["time", "repr"]),
            Err(ExtractError::MalformedShape { .. })
        ));
    }

    #[test]
    fn list_items_carry_indexed_paths() {
        let r = report(json!({"clouds": [{"type": "FEW"}, null]}));
        let items = r.field(&["clouds"]).unwrap().items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("type").unwrap().text().unwrap(), "FEW");

        let err = items[1].get("type").unwrap_err();
        assert_eq!(err.path(), "clouds[1].type");
        assert!(matches!(err, ExtractError::MalformedShape { .. }));
    }

    #[test]
    fn empty_or_null_lists_are_unusable() {
        let r = report(json!({"clouds": [], "wx_codes": null, "remarks_info": {"codes": "AO2"}}));
        assert!(matches!(
            r.field(&["clouds"]).unwrap().items(),
            Err(ExtractError::UnusableData { .. })
        ));
        assert!(matches!(
            r.field(&["wx_codes"]).unwrap().items(),
            Err(ExtractError::UnusableData { .. })
        ));
        assert!(matches!(
            r.field(&["remarks_info", "codes"]).unwrap().items(),
            Err(ExtractError::MalformedShape { .. })
        ));
    }

    #[test]
    fn measured_joins_value_and_units() {
        let r = report(json!({
            "wind_speed": {"value": 21},
            "units": {"wind_speed": "kt"},
        }));
        assert_eq!(r.measured(&["wind_speed", "value"], "wind_speed").unwrap(), "21 kt");
    }

    #[test]
    fn parses_json_text() {
        let r = WeatherReport::from_json(ReportId(7), r#"{"station": "EGLL"}"#).unwrap();
        assert_eq!(r.id(), ReportId(7));
        assert_eq!(r.text(&["station"]).unwrap(), "EGLL");
    }
}
