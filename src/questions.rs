//! Answer and question resolution, plus the keys questions are filed under

use tracing::debug;

use crate::error::StoreResult;
use crate::models::{Answer, Question, QuestionType, ReportId};
use crate::store::{AnswerStore, QuestionStore, QuizStore};

/// Resolve each answer text to a stored answer, creating the missing ones
///
/// Output order matches input order. Repeated texts are resolved one by one
/// and therefore come back as the same stored answer.
pub fn create_answers<S>(store: &mut S, texts: &[String]) -> StoreResult<Vec<Answer>>
where
    S: AnswerStore + ?Sized,
{
    let mut answers = Vec::with_capacity(texts.len());
    for text in texts {
        let answer = match store.find_answer(text)? {
            Some(existing) => existing,
            None => {
                let created = store.create_answer(text)?;
                debug!(answer = created.id, text = %created.text, "created answer");
                created
            }
        };
        answers.push(answer);
    }
    Ok(answers)
}

/// Fetch the question for (report, text), or create it with `answers`
///
/// An existing question is returned untouched; the candidate answers are not
/// merged into it.
pub fn create_question<S>(
    store: &mut S,
    report: ReportId,
    text: &str,
    answers: &[String],
    category: QuestionType,
) -> StoreResult<Question>
where
    S: QuizStore + ?Sized,
{
    if let Some(existing) = store.find_question(report, text)? {
        return Ok(existing);
    }

    let answers = create_answers(store, answers)?;
    let question = store.create_question(report, text, category, &answers)?;
    debug!(
        question = question.id,
        report = %report,
        category = %category,
        "created question"
    );
    Ok(question)
}

fn key_name(cloud_name: &str) -> String {
    cloud_name.replace(' ', "_")
}

/// Key for the "which clouds are at this height" question of one layer
pub fn cloud_individual_key(cloud_name: &str, index: usize) -> String {
    format!("cloud_{}_height_individual_{}", key_name(cloud_name), index)
}

/// Key for the "how high are the <cover> clouds" question
pub fn cloud_collective_key(cloud_name: &str) -> String {
    format!("cloud_{}_heights_collective", key_name(cloud_name))
}
