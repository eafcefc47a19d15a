//! Python bindings used by the web application

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::collector::QuestionCollector;
use crate::config::Config;
use crate::db::{self, SqliteStore};
use crate::models::{Question, ReportId};
use crate::report::WeatherReport;

/// A stored question as seen from Python
#[pyclass]
#[derive(Debug, Clone)]
pub struct GeneratedQuestion {
    /// Collector key; `None` for questions read back from the database
    #[pyo3(get)]
    pub key: Option<String>,
    #[pyo3(get)]
    pub id: i64,
    #[pyo3(get)]
    pub metar_id: i64,
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub category: String,
    #[pyo3(get)]
    pub answers: Vec<String>,
}

#[pymethods]
impl GeneratedQuestion {
    fn __repr__(&self) -> String {
        format!(
            "GeneratedQuestion(id={}, metar_id={}, category='{}', text='{}')",
            self.id, self.metar_id, self.category, self.text
        )
    }
}

impl GeneratedQuestion {
    fn from_question(key: Option<&str>, question: &Question) -> Self {
        Self {
            key: key.map(str::to_string),
            id: question.id,
            metar_id: question.report.0,
            text: question.text.clone(),
            category: question.category.as_str().to_string(),
            answers: question.answers.iter().map(|a| a.text.clone()).collect(),
        }
    }
}

fn open_store(db_path: Option<&str>) -> PyResult<SqliteStore> {
    let path = match db_path {
        Some(path) => path.to_string(),
        None => Config::from_env().database_path,
    };
    SqliteStore::open(&path).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

#[pyfunction]
#[pyo3(name = "init_database")]
pub fn py_init_database(db_path: &str) -> PyResult<()> {
    db::init_database(db_path)
        .map(|_| ())
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to initialise database: {}", e)))
}

/// Generate (or fetch) every question for one parsed METAR
#[pyfunction]
#[pyo3(name = "generate_questions", signature = (metar_id, metar_json, db_path=None))]
pub fn py_generate_questions(
    metar_id: i64,
    metar_json: &str,
    db_path: Option<&str>,
) -> PyResult<Vec<GeneratedQuestion>> {
    let report = WeatherReport::from_json(ReportId(metar_id), metar_json)
        .map_err(|e| PyValueError::new_err(format!("Invalid METAR JSON: {}", e)))?;
    let mut store = open_store(db_path)?;

    let mut collector = QuestionCollector::new(report, &mut store);
    collector.generate_questions();

    let generated = collector
        .keys()
        .into_iter()
        .filter_map(|key| {
            collector
                .question(key)
                .map(|q| GeneratedQuestion::from_question(Some(key), q))
        })
        .collect();
    Ok(generated)
}

#[pyfunction]
#[pyo3(name = "get_questions", signature = (metar_id, db_path=None))]
pub fn py_get_questions(metar_id: i64, db_path: Option<&str>) -> PyResult<Vec<GeneratedQuestion>> {
    let store = open_store(db_path)?;
    let questions = store
        .get_questions_for_report(ReportId(metar_id))
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    Ok(questions
        .iter()
        .map(|q| GeneratedQuestion::from_question(None, q))
        .collect())
}

/// METAR quiz core Python module
#[pymodule]
fn metar_quiz_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    crate::logging::init(&Config::from_env().log_filter);

    m.add_function(wrap_pyfunction!(py_init_database, m)?)?;
    m.add_function(wrap_pyfunction!(py_generate_questions, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_questions, m)?)?;

    m.add_class::<GeneratedQuestion>()?;

    Ok(())
}
