//! Per-field question generators
//!
//! Each generator reads one field (or a small cluster) of the report and
//! files at most one question per key. Failures are returned to the caller
//! untouched; the orchestrator decides what to do with them.

use crate::codes::{translate_remark, translate_weather, CloudCover};
use crate::collector::QuestionCollector;
use crate::error::{ExtractError, GenerateError};
use crate::models::QuestionType;
use crate::questions::{cloud_collective_key, cloud_individual_key};
use crate::report::Field;
use crate::store::QuizStore;

/// Answer offered when the report carries a null gust
pub const NOT_GUSTING: &str = "The wind is not currently gusting.";

type GenerateResult = Result<(), GenerateError>;

fn cloud_cover(layer: &Field<'_>) -> Result<CloudCover, ExtractError> {
    let field = layer.get("type")?;
    let code = field.text()?;
    CloudCover::from_code(&code).ok_or_else(|| {
        ExtractError::unusable(field.path(), format!("unrecognised cloud type `{}`", code))
    })
}

fn cloud_layer(layer: &Field<'_>) -> Result<(CloudCover, String), ExtractError> {
    let cover = cloud_cover(layer)?;
    let altitude = layer.get("altitude")?.text()?;
    Ok((cover, altitude))
}

/// Text of every `{value}` entry in a list
fn list_values(list: Field<'_>) -> Result<Vec<String>, ExtractError> {
    list.items()?
        .iter()
        .map(|item| item.get("value")?.text())
        .collect()
}

impl<'s, S: QuizStore + ?Sized> QuestionCollector<'s, S> {
    fn ask_measured(
        &mut self,
        key: &str,
        text: &str,
        path: &[&str],
        units_field: &str,
        category: QuestionType,
    ) -> GenerateResult {
        let answer = self.report().measured(path, units_field)?;
        self.ask(key, text, vec![answer], category)
    }

    pub fn generate_airport_question(&mut self) -> GenerateResult {
        let station = self.report().text(&["station"])?;
        self.ask(
            "airport",
            "What is the airport ICAO?",
            vec![station],
            QuestionType::Airport,
        )
    }

    pub fn generate_time_question(&mut self) -> GenerateResult {
        let time = self.report().text(&["time", "repr"])?;
        self.ask(
            "time",
            "What is time was this METAR report made?",
            vec![format!("{} ZULU", time)],
            QuestionType::Time,
        )
    }

    pub fn generate_wind_direction_question(&mut self) -> GenerateResult {
        let direction = self.report().text(&["wind_direction", "value"])?;
        self.ask(
            "wind_direction",
            "What is the wind direction?",
            vec![format!("{} degrees", direction)],
            QuestionType::WindDirection,
        )
    }

    pub fn generate_wind_speed_question(&mut self) -> GenerateResult {
        self.ask_measured(
            "wind_speed",
            "What is the wind speed?",
            &["wind_speed", "value"],
            "wind_speed",
            QuestionType::WindSpeed,
        )
    }

    /// A null gust is a valid answer; only an absent one is an error
    pub fn generate_wind_gust_question(&mut self) -> GenerateResult {
        let gust = self.report().field(&["wind_gust"])?;
        let answer = if gust.is_null() {
            NOT_GUSTING.to_string()
        } else {
            let value = gust.get("value")?.text()?;
            format!("{} {}", value, self.report().units("wind_speed")?)
        };
        self.ask(
            "wind_gust",
            "What is the wind gusting to?",
            vec![answer],
            QuestionType::WindGust,
        )
    }

    pub fn generate_altimeter_question(&mut self) -> GenerateResult {
        self.ask_measured(
            "altimeter",
            "What is the altimeter?",
            &["altimeter", "value"],
            "altimeter",
            QuestionType::Altimeter,
        )
    }

    pub fn generate_temperature_question(&mut self) -> GenerateResult {
        self.ask_measured(
            "temperature",
            "What is the temperature?",
            &["temperature", "value"],
            "temperature",
            QuestionType::Temperature,
        )
    }

    pub fn generate_dewpoint_question(&mut self) -> GenerateResult {
        self.ask_measured(
            "dewpoint",
            "What is the dewpoint?",
            &["dewpoint", "value"],
            "temperature",
            QuestionType::Dewpoint,
        )
    }

    pub fn generate_visibility_question(&mut self) -> GenerateResult {
        self.ask_measured(
            "visibility",
            "What is the visibility?",
            &["visibility", "value"],
            "visibility",
            QuestionType::Visibility,
        )
    }

    /// Distinct cover phrases in first-seen order
    pub fn generate_cloud_coverage_question(&mut self) -> GenerateResult {
        let mut answers: Vec<String> = Vec::new();
        for layer in self.report().field(&["clouds"])?.items()? {
            let phrase = cloud_cover(&layer)?.coverage();
            if !answers.iter().any(|a| a == phrase) {
                answers.push(phrase.to_string());
            }
        }
        self.ask(
            "cloud_coverage",
            "What is the reported cloud coverage?",
            answers,
            QuestionType::CloudCoverage,
        )
    }

    /// One question per usable layer
    ///
    /// Bad layers are skipped so the rest still get asked; the first layer
    /// error is returned once the loop is done. Keys are numbered by the
    /// layers actually filed.
    pub fn generate_cloud_height_individual_questions(&mut self) -> GenerateResult {
        let units = self.report().units("altitude")?;
        let layers: Vec<_> = self
            .report()
            .field(&["clouds"])?
            .items()?
            .iter()
            .map(cloud_layer)
            .collect();

        let mut first_error = None;
        let mut filed = 0;
        for layer in layers {
            match layer {
                Ok((cover, altitude)) => {
                    let text = format!(
                        "What kind of clouds have a height of {} {}?",
                        altitude, units
                    );
                    self.ask(
                        &cloud_individual_key(cover.name(), filed),
                        &text,
                        vec![cover.title()],
                        QuestionType::CloudHeightIndividual,
                    )?;
                    filed += 1;
                }
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Heights of every layer with the given cover, in report order
    pub fn generate_cloud_height_collective_question(&mut self, cover: CloudCover) -> GenerateResult {
        let units = self.report().units("altitude")?;
        let mut answers = Vec::new();
        for layer in self.report().field(&["clouds"])?.items()? {
            let (layer_cover, altitude) = cloud_layer(&layer)?;
            if layer_cover == cover {
                answers.push(format!("{} {}", altitude, units));
            }
        }
        if answers.is_empty() {
            return Err(ExtractError::unusable(
                "clouds",
                format!("no {} layers reported", cover.code()),
            )
            .into());
        }

        let text = format!("What is the height of the {} clouds?", cover.name());
        self.ask(
            &cloud_collective_key(cover.name()),
            &text,
            answers,
            QuestionType::CloudHeightCollective,
        )
    }

    pub fn generate_weather_codes_question(&mut self) -> GenerateResult {
        let codes = list_values(self.report().field(&["wx_codes"])?)?;
        let answers = codes.iter().map(|code| translate_weather(code)).collect();
        self.ask(
            "weather_codes",
            "What are the reported weather codes?",
            answers,
            QuestionType::WeatherCodes,
        )
    }

    pub fn generate_remarks_codes_question(&mut self) -> GenerateResult {
        let codes = list_values(self.report().field(&["remarks_info", "codes"])?)?;
        let answers = codes.iter().map(|code| translate_remark(code)).collect();
        self.ask(
            "remarks_codes",
            "What are the reported remarks codes?",
            answers,
            QuestionType::RemarksCodes,
        )
    }

    pub fn generate_remarks_temperature_decimal_question(&mut self) -> GenerateResult {
        self.ask_measured(
            "remarks_temperature_decimal",
            "What is the remarks decimal temperature?",
            &["remarks_info", "temperature_decimal", "value"],
            "temperature",
            QuestionType::RemarksTemperatureDecimal,
        )
    }

    pub fn generate_remarks_dewpoint_decimal_question(&mut self) -> GenerateResult {
        self.ask_measured(
            "remarks_dewpoint_decimal",
            "What is the remarks decimal dewpoint?",
            &["remarks_info", "dewpoint_decimal", "value"],
            "temperature",
            QuestionType::RemarksDewpointDecimal,
        )
    }

    pub fn generate_remarks_sea_level_pressure_question(&mut self) -> GenerateResult {
        let pressure = self
            .report()
            .text(&["remarks_info", "sea_level_pressure", "value"])?;
        self.ask(
            "remarks_sea_level_pressure",
            "What is the remarks sea level pressure?",
            vec![format!("{} hPa", pressure)],
            QuestionType::RemarksSeaLevelPressure,
        )
    }
}
