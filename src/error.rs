use thiserror::Error;
use uuid::Uuid;

/// Errors raised at the engine boundary. The scoring functions themselves are
/// total over validated input.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid competency score {score} for {subject}: expected 1-4")]
    InvalidScore { subject: String, score: i64 },

    #[error("invalid competency score {score}: expected 1-4")]
    ScoreOutOfRange { score: i64 },

    #[error("invalid term {term}: expected 1-3")]
    InvalidTerm { term: i64 },

    #[error("duplicate {subject} score for student {student_id} in {year} term {term}")]
    DuplicateScore {
        student_id: Uuid,
        year: i32,
        term: u8,
        subject: String,
    },

    #[error("no assessments found for student {0}")]
    UnknownStudent(Uuid),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
