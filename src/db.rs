//! SQLite storage for answers and questions

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{Answer, Question, QuestionType, ReportId};
use crate::store::{validate_text, AnswerStore, QuestionStore};

/// Create the schema on an open connection
pub fn create_schema(conn: &Connection) -> SqliteResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS answers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            metar_id INTEGER NOT NULL,
            text TEXT NOT NULL,
            category TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE (metar_id, text)
        )",
        [],
    )?;

    // position keeps answers in the order they were offered
    conn.execute(
        "CREATE TABLE IF NOT EXISTS question_answers (
            question_id INTEGER NOT NULL REFERENCES questions(id),
            answer_id INTEGER NOT NULL REFERENCES answers(id),
            position INTEGER NOT NULL,
            PRIMARY KEY (question_id, position)
        )",
        [],
    )?;

    Ok(())
}

/// Open (or create) a database file with the schema in place
pub fn init_database(db_path: &str) -> SqliteResult<Connection> {
    let conn = Connection::open(db_path)?;
    create_schema(&conn)?;
    Ok(conn)
}

struct QuestionRow {
    id: i64,
    metar_id: i64,
    text: String,
    category: String,
    created_at: DateTime<Utc>,
}

/// Answer and question store backed by SQLite
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap an existing connection, creating the schema if needed
    pub fn new(conn: Connection) -> StoreResult<Self> {
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open(db_path: &str) -> StoreResult<Self> {
        Ok(Self {
            conn: init_database(db_path)?,
        })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn count_answers(&self) -> StoreResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM answers", [], |row| row.get(0))?)
    }

    pub fn count_questions(&self) -> StoreResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?)
    }

    /// All questions for a report, oldest first
    pub fn get_questions_for_report(&self, report: ReportId) -> StoreResult<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, metar_id, text, category, created_at FROM questions
             WHERE metar_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![report.0], read_question_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        rows.into_iter().map(|row| self.load_question(row)).collect()
    }

    fn answers_for_question(&self, question_id: i64) -> StoreResult<Vec<Answer>> {
        let mut stmt = self.conn.prepare(
            "SELECT a.id, a.text, a.created_at FROM question_answers qa
             JOIN answers a ON a.id = qa.answer_id
             WHERE qa.question_id = ?1
             ORDER BY qa.position",
        )?;
        let answers = stmt
            .query_map(params![question_id], read_answer_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(answers)
    }

    fn load_question(&self, row: QuestionRow) -> StoreResult<Question> {
        let category = QuestionType::from_tag(&row.category)
            .ok_or_else(|| StoreError::UnknownCategory(row.category.clone()))?;
        Ok(Question {
            id: row.id,
            report: ReportId(row.metar_id),
            text: row.text,
            category,
            answers: self.answers_for_question(row.id)?,
            created_at: row.created_at,
        })
    }
}

fn read_answer_row(row: &rusqlite::Row<'_>) -> SqliteResult<Answer> {
    Ok(Answer {
        id: row.get(0)?,
        text: row.get(1)?,
        created_at: row.get(2)?,
    })
}

fn read_question_row(row: &rusqlite::Row<'_>) -> SqliteResult<QuestionRow> {
    Ok(QuestionRow {
        id: row.get(0)?,
        metar_id: row.get(1)?,
        text: row.get(2)?,
        category: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl AnswerStore for SqliteStore {
    fn find_answer(&self, text: &str) -> StoreResult<Option<Answer>> {
        let answer = self
            .conn
            .query_row(
                "SELECT id, text, created_at FROM answers WHERE text = ?1",
                params![text],
                read_answer_row,
            )
            .optional()?;
        Ok(answer)
    }

    fn create_answer(&mut self, text: &str) -> StoreResult<Answer> {
        validate_text("Answer", text)?;
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO answers (text, created_at) VALUES (?1, ?2)",
            params![text, created_at],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(answer = id, "inserted answer");
        Ok(Answer {
            id,
            text: text.to_string(),
            created_at,
        })
    }
}

impl QuestionStore for SqliteStore {
    fn find_question(&self, report: ReportId, text: &str) -> StoreResult<Option<Question>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, metar_id, text, category, created_at FROM questions
                 WHERE metar_id = ?1 AND text = ?2",
                params![report.0, text],
                read_question_row,
            )
            .optional()?;

        row.map(|row| self.load_question(row)).transpose()
    }

    fn create_question(
        &mut self,
        report: ReportId,
        text: &str,
        category: QuestionType,
        answers: &[Answer],
    ) -> StoreResult<Question> {
        validate_text("Question", text)?;
        let created_at = Utc::now();

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO questions (metar_id, text, category, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![report.0, text, category.as_str(), created_at],
        )?;
        let id = tx.last_insert_rowid();
        for (position, answer) in answers.iter().enumerate() {
            tx.execute(
                "INSERT INTO question_answers (question_id, answer_id, position) VALUES (?1, ?2, ?3)",
                params![id, answer.id, position as i64],
            )?;
        }
        tx.commit()?;
        debug!(question = id, report = %report, "inserted question");

        Ok(Question {
            id,
            report,
            text: text.to_string(),
            category,
            answers: answers.to_vec(),
            created_at,
        })
    }
}
