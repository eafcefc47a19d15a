//! METAR quiz core - question extraction for parsed METAR reports
//!
//! Walks one parsed report, turns each usable field into a question with its
//! answers, and stores them through an answer/question store (SQLite or in
//! memory). Built with the `python` feature it doubles as the extension
//! module loaded by the web application.

pub mod codes;
pub mod collector;
pub mod config;
pub mod db;
pub mod error;
mod generators;
pub mod logging;
pub mod models;
pub mod questions;
pub mod report;
pub mod store;

#[cfg(feature = "python")]
mod python;

pub use codes::{translate_remark, translate_weather, CloudCover};
pub use collector::{Generator, QuestionCollector, GENERATION_ORDER};
pub use config::Config;
pub use db::{init_database, SqliteStore};
pub use error::{ExtractError, GenerateError, StoreError, StoreResult};
pub use generators::NOT_GUSTING;
pub use models::{Answer, Question, QuestionType, ReportId};
pub use questions::{cloud_collective_key, cloud_individual_key, create_answers, create_question};
pub use report::{Field, WeatherReport};
pub use store::{AnswerStore, MemoryStore, QuestionStore, QuizStore};
