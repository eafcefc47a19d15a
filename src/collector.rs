//! Question collector: the keyed question set for one report and the orchestrator

use tracing::{debug, error, info, warn};

use crate::codes::CloudCover;
use crate::error::{ExtractError, GenerateError};
use crate::models::{Question, QuestionType};
use crate::questions::create_question;
use crate::report::WeatherReport;
use crate::store::QuizStore;

/// One step of a full generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
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
    CloudHeightCollective(CloudCover),
    WeatherCodes,
    RemarksCodes,
    RemarksTemperatureDecimal,
    RemarksDewpointDecimal,
    RemarksSeaLevelPressure,
}

/// Order in which `generate_questions` runs the generators
pub const GENERATION_ORDER: [Generator; 20] = [
    Generator::Airport,
    Generator::Time,
    Generator::WindDirection,
    Generator::WindSpeed,
    Generator::WindGust,
    Generator::Altimeter,
    Generator::Temperature,
    Generator::Dewpoint,
    Generator::Visibility,
    Generator::CloudCoverage,
    Generator::CloudHeightIndividual,
    Generator::CloudHeightCollective(CloudCover::Few),
    Generator::CloudHeightCollective(CloudCover::Scattered),
    Generator::CloudHeightCollective(CloudCover::Broken),
    Generator::CloudHeightCollective(CloudCover::Overcast),
    Generator::WeatherCodes,
    Generator::RemarksCodes,
    Generator::RemarksTemperatureDecimal,
    Generator::RemarksDewpointDecimal,
    Generator::RemarksSeaLevelPressure,
];

impl Generator {
    pub fn name(self) -> &'static str {
        match self {
            Generator::Airport => "airport",
            Generator::Time => "time",
            Generator::WindDirection => "wind_direction",
            Generator::WindSpeed => "wind_speed",
            Generator::WindGust => "wind_gust",
            Generator::Altimeter => "altimeter",
            Generator::Temperature => "temperature",
            Generator::Dewpoint => "dewpoint",
            Generator::Visibility => "visibility",
            Generator::CloudCoverage => "cloud_coverage",
            Generator::CloudHeightIndividual => "cloud_height_individual",
            Generator::CloudHeightCollective(_) => "cloud_height_collective",
            Generator::WeatherCodes => "weather_codes",
            Generator::RemarksCodes => "remarks_codes",
            Generator::RemarksTemperatureDecimal => "remarks_temperature_decimal",
            Generator::RemarksDewpointDecimal => "remarks_dewpoint_decimal",
            Generator::RemarksSeaLevelPressure => "remarks_sea_level_pressure",
        }
    }
}

/// Builds the questions for a single report against a store
pub struct QuestionCollector<'s, S: QuizStore + ?Sized> {
    report: WeatherReport,
    store: &'s mut S,
    questions: Vec<(String, Question)>,
}

impl<'s, S: QuizStore + ?Sized> QuestionCollector<'s, S> {
    pub fn new(report: WeatherReport, store: &'s mut S) -> Self {
        Self {
            report,
            store,
            questions: Vec::new(),
        }
    }

    pub fn report(&self) -> &WeatherReport {
        &self.report
    }

    /// Question registered under `key` so far
    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, question)| question)
    }

    /// Keys in registration order
    pub fn keys(&self) -> Vec<&str> {
        self.questions.iter().map(|(k, _)| k.as_str()).collect()
    }

    fn register(&mut self, key: &str, question: Question) {
        match self.questions.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some(entry) => entry.1 = question,
            None => self.questions.push((key.to_string(), question)),
        }
    }

    /// Resolve a question for this report and file it under `key`
    pub(crate) fn ask(
        &mut self,
        key: &str,
        text: &str,
        answers: Vec<String>,
        category: QuestionType,
    ) -> Result<(), GenerateError> {
        let question = create_question(&mut *self.store, self.report.id(), text, &answers, category)?;
        self.register(key, question);
        Ok(())
    }

    /// Run a single generator
    pub fn run(&mut self, generator: Generator) -> Result<(), GenerateError> {
        match generator {
            Generator::Airport => self.generate_airport_question(),
            Generator::Time => self.generate_time_question(),
            Generator::WindDirection => self.generate_wind_direction_question(),
            Generator::WindSpeed => self.generate_wind_speed_question(),
            Generator::WindGust => self.generate_wind_gust_question(),
            Generator::Altimeter => self.generate_altimeter_question(),
            Generator::Temperature => self.generate_temperature_question(),
            Generator::Dewpoint => self.generate_dewpoint_question(),
            Generator::Visibility => self.generate_visibility_question(),
            Generator::CloudCoverage => self.generate_cloud_coverage_question(),
            Generator::CloudHeightIndividual => self.generate_cloud_height_individual_questions(),
            Generator::CloudHeightCollective(cover) => {
                self.generate_cloud_height_collective_question(cover)
            }
            Generator::WeatherCodes => self.generate_weather_codes_question(),
            Generator::RemarksCodes => self.generate_remarks_codes_question(),
            Generator::RemarksTemperatureDecimal => {
                self.generate_remarks_temperature_decimal_question()
            }
            Generator::RemarksDewpointDecimal => self.generate_remarks_dewpoint_decimal_question(),
            Generator::RemarksSeaLevelPressure => {
                self.generate_remarks_sea_level_pressure_question()
            }
        }
    }

    /// Run every generator in order and return the questions produced
    ///
    /// A failing generator only drops its own question; this never fails.
    pub fn generate_questions(&mut self) -> Vec<Question> {
        let report = self.report.id();
        for generator in GENERATION_ORDER {
            if let Err(err) = self.run(generator) {
                let name = generator.name();
                match &err {
                    GenerateError::Extract(ExtractError::UnusableData { path, reason }) => {
                        debug!(%report, generator = name, path = %path, reason = %reason, "skipped question")
                    }
                    GenerateError::Extract(ExtractError::FieldNotFound { path }) => {
                        info!(%report, generator = name, path = %path, "field missing from report")
                    }
                    GenerateError::Extract(ExtractError::MalformedShape { path, .. }) => {
                        warn!(%report, generator = name, path = %path, error = %err, "malformed report field")
                    }
                    GenerateError::Store(store_err) => {
                        error!(%report, generator = name, error = %store_err, "store failed")
                    }
                }
            }
        }

        let questions: Vec<Question> = self.questions.iter().map(|(_, q)| q.clone()).collect();
        info!(%report, count = questions.len(), "generated questions");
        questions
    }
}
