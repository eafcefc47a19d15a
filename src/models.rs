//! Answer and question records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the stored METAR a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(pub i64);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answer text, shared by every question that offers it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A question about one METAR with its answers in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub report: ReportId,
    pub text: String,
    pub category: QuestionType,
    pub answers: Vec<Answer>,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn answer_texts(&self) -> Vec<&str> {
        self.answers.iter().map(|a| a.text.as_str()).collect()
    }
}

/// Question category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Airport,
    Time,
    WindDirection,
    WindSpeed,
    WindGust,
    Altimeter,
    Temperature,
    Dewpoint,
    Visibility,
    CloudCoverage,
    CloudHeightIndividual,
    CloudHeightCollective,
    WeatherCodes,
    RemarksCodes,
    RemarksTemperatureDecimal,
    RemarksDewpointDecimal,
    RemarksSeaLevelPressure,
}

impl QuestionType {
    pub const ALL: [QuestionType; 17] = [
        QuestionType::Airport,
        QuestionType::Time,
        QuestionType::WindDirection,
        QuestionType::WindSpeed,
        QuestionType::WindGust,
        QuestionType::Altimeter,
        QuestionType::Temperature,
        QuestionType::Dewpoint,
        QuestionType::Visibility,
        QuestionType::CloudCoverage,
        QuestionType::CloudHeightIndividual,
        QuestionType::CloudHeightCollective,
        QuestionType::WeatherCodes,
        QuestionType::RemarksCodes,
        QuestionType::RemarksTemperatureDecimal,
        QuestionType::RemarksDewpointDecimal,
        QuestionType::RemarksSeaLevelPressure,
    ];

    /// Tag stored alongside the question
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Airport => "airport",
            QuestionType::Time => "time",
            QuestionType::WindDirection => "wind_direction",
            QuestionType::WindSpeed => "wind_speed",
            QuestionType::WindGust => "wind_gust",
            QuestionType::Altimeter => "altimeter",
            QuestionType::Temperature => "temperature",
            QuestionType::Dewpoint => "dewpoint",
            QuestionType::Visibility => "visibility",
            QuestionType::CloudCoverage => "cloud_coverage",
            QuestionType::CloudHeightIndividual => "cloud_height_individual",
            QuestionType::CloudHeightCollective => "cloud_height_collective",
            QuestionType::WeatherCodes => "weather_codes",
            QuestionType::RemarksCodes => "remarks_codes",
            QuestionType::RemarksTemperatureDecimal => "remarks_temperature_decimal",
            QuestionType::RemarksDewpointDecimal => "remarks_dewpoint_decimal",
            QuestionType::RemarksSeaLevelPressure => "remarks_sea_level_pressure",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_tags() {
        assert_eq!(
            QuestionType::from_tag("cloud_height_individual"),
            Some(QuestionType::CloudHeightIndividual)
        );
        assert_eq!(QuestionType::from_tag("Airport"), None);
        assert_eq!(QuestionType::from_tag("pressure_altitude"), None);
    }
}
