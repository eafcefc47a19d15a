mod common;

use common::{sample, sample_with};
use metar_quiz_core::{
    init_database, AnswerStore, QuestionCollector, QuestionType, ReportId, SqliteStore,
};
use serde_json::json;

fn texts(questions: &[metar_quiz_core::Question]) -> Vec<(String, Vec<String>)> {
    questions
        .iter()
        .map(|q| {
            (
                q.text.clone(),
                q.answers.iter().map(|a| a.text.clone()).collect(),
            )
        })
        .collect()
}

#[test]
fn pipeline_persists_questions() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let generated = QuestionCollector::new(sample(1), &mut store).generate_questions();

    assert_eq!(generated.len(), 21);
    assert_eq!(store.count_questions().unwrap(), 21);

    let stored = store.get_questions_for_report(ReportId(1)).unwrap();
    assert_eq!(texts(&stored), texts(&generated));
    assert_eq!(stored[0].category, QuestionType::Airport);
    assert_eq!(
        stored[9].answer_texts(),
        ["Few Clouds", "Broken Clouds", "Overcast Clouds"]
    );
}

#[test]
fn pipeline_is_idempotent() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let first = QuestionCollector::new(sample(1), &mut store).generate_questions();
    let answers = store.count_answers().unwrap();

    let second = QuestionCollector::new(sample(1), &mut store).generate_questions();
    let first_ids: Vec<i64> = first.iter().map(|q| q.id).collect();
    let second_ids: Vec<i64> = second.iter().map(|q| q.id).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(texts(&first), texts(&second));
    assert_eq!(store.count_answers().unwrap(), answers);
    assert_eq!(store.count_questions().unwrap(), 21);
}

#[test]
fn reports_share_answers() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    QuestionCollector::new(sample(1), &mut store).generate_questions();
    let answers = store.count_answers().unwrap();

    let other = sample_with("/temperature/value", json!(12));
    let other = metar_quiz_core::WeatherReport::new(ReportId(2), other.data().clone());
    QuestionCollector::new(other, &mut store).generate_questions();

    // only "12 C" is new
    assert_eq!(store.count_answers().unwrap(), answers + 1);
    assert_eq!(store.count_questions().unwrap(), 42);

    let kjfk = store.find_answer("KJFK").unwrap().unwrap();
    for report in [ReportId(1), ReportId(2)] {
        let questions = store.get_questions_for_report(report).unwrap();
        assert_eq!(questions[0].answers[0].id, kjfk.id);
    }
}

#[test]
fn database_file_survives_reopen() {
    let path = std::env::temp_dir().join(format!("metar_quiz_core_{}.sqlite3", std::process::id()));
    let path = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);

    init_database(&path).unwrap();
    {
        let mut store = SqliteStore::open(&path).unwrap();
        QuestionCollector::new(sample(5), &mut store).generate_questions();
    }

    let store = SqliteStore::open(&path).unwrap();
    let questions = store.get_questions_for_report(ReportId(5)).unwrap();
    assert_eq!(questions.len(), 21);
    assert_eq!(questions[1].answer_texts(), ["1551 ZULU"]);
    assert!(store.get_questions_for_report(ReportId(6)).unwrap().is_empty());

    drop(store);
    let _ = std::fs::remove_file(&path);
}
