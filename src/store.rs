//! Storage collaborators consumed by the question collector

use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::models::{Answer, Question, QuestionType, ReportId};

/// Lookup and creation of answers by exact text
pub trait AnswerStore {
    fn find_answer(&self, text: &str) -> StoreResult<Option<Answer>>;

    /// Validate and persist a new answer
    fn create_answer(&mut self, text: &str) -> StoreResult<Answer>;
}

/// Lookup and creation of questions by (report, exact text)
pub trait QuestionStore {
    fn find_question(&self, report: ReportId, text: &str) -> StoreResult<Option<Question>>;

    /// Validate and persist a new question, attaching `answers` in the given order
    fn create_question(
        &mut self,
        report: ReportId,
        text: &str,
        category: QuestionType,
        answers: &[Answer],
    ) -> StoreResult<Question>;
}

/// Everything the collector needs from storage
pub trait QuizStore: AnswerStore + QuestionStore {}

impl<T: AnswerStore + QuestionStore + ?Sized> QuizStore for T {}

pub(crate) fn validate_text(what: &str, text: &str) -> StoreResult<()> {
    if text.is_empty() {
        return Err(StoreError::Validation {
            message: format!("{} text must not be empty", what),
        });
    }
    Ok(())
}

/// In-memory store, used for tests and for callers that do not persist
#[derive(Debug, Default)]
pub struct MemoryStore {
    answers: Vec<Answer>,
    questions: Vec<Question>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl AnswerStore for MemoryStore {
    fn find_answer(&self, text: &str) -> StoreResult<Option<Answer>> {
        Ok(self.answers.iter().find(|a| a.text == text).cloned())
    }

    fn create_answer(&mut self, text: &str) -> StoreResult<Answer> {
        validate_text("Answer", text)?;
        let answer = Answer {
            id: self.answers.len() as i64 + 1,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.answers.push(answer.clone());
        Ok(answer)
    }
}

impl QuestionStore for MemoryStore {
    fn find_question(&self, report: ReportId, text: &str) -> StoreResult<Option<Question>> {
        Ok(self
            .questions
            .iter()
            .find(|q| q.report == report && q.text == text)
            .cloned())
    }

    fn create_question(
        &mut self,
        report: ReportId,
        text: &str,
        category: QuestionType,
        answers: &[Answer],
    ) -> StoreResult<Question> {
        validate_text("Question", text)?;
        let question = Question {
            id: self.questions.len() as i64 + 1,
            report,
            text: text.to_string(),
            category,
            answers: answers.to_vec(),
            created_at: Utc::now(),
        };
        self.questions.push(question.clone());
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_found_by_exact_text() {
        let mut store = MemoryStore::new();
        let created = store.create_answer("10 C").unwrap();
        assert_eq!(store.find_answer("10 C").unwrap(), Some(created));
        assert_eq!(store.find_answer("10 c").unwrap(), None);
        assert_eq!(store.find_answer("10 C ").unwrap(), None);
    }

    #[test]
    fn questions_are_scoped_to_their_report() {
        let mut store = MemoryStore::new();
        store
            .create_question(ReportId(1), "What is the dewpoint?", QuestionType::Dewpoint, &[])
            .unwrap();
        assert!(store.find_question(ReportId(1), "What is the dewpoint?").unwrap().is_some());
        assert!(store.find_question(ReportId(2), "What is the dewpoint?").unwrap().is_none());
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.create_answer(""),
            Err(StoreError::Validation { .. })
        ));
        assert!(matches!(
            store.create_question(ReportId(1), "", QuestionType::Airport, &[]),
            Err(StoreError::Validation { .. })
        ));
        assert!(store.answers().is_empty());
        assert!(store.questions().is_empty());
    }
}
