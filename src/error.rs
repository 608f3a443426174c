use sea_orm::{DbErr, SqlErr};

/// An error from an unsuccessful schema operation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A declared constraint rejected the write
    #[error("Constraint Violation ({kind}): {message}")]
    ConstraintViolation {
        /// Which family of constraint fired
        kind: ConstraintKind,
        /// The message reported by the database
        message: String,
    },
    /// The addressed row does not exist
    #[error("RecordNotFound Error: no {entity} with id {id}")]
    NotFound {
        /// Table name of the missing row
        entity: &'static str,
        /// Primary key that was looked up
        id: i32,
    },
    /// The configuration could not be read
    #[error("Config Error: {key}: {message}")]
    Config {
        /// The offending environment key
        key: &'static str,
        /// What was wrong with it
        message: String,
    },
    /// Any other database error, passed through unmodified
    #[error(transparent)]
    Db(DbErr),
}

/// The family of a constraint violation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ConstraintKind {
    /// A `UNIQUE` or primary key constraint
    Unique,
    /// A foreign key target is absent
    ForeignKey,
    /// A required column was left empty
    NotNull,
}

impl Error {
    /// Returns the constraint kind if this error is a constraint violation
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Self::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns true if this error is [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn foreign_key(message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            kind: ConstraintKind::ForeignKey,
            message: message.into(),
        }
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::ConstraintViolation {
                kind: ConstraintKind::Unique,
                message,
            },
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => Self::ConstraintViolation {
                kind: ConstraintKind::ForeignKey,
                message,
            },
            _ => match not_null_violation(&err) {
                Some(message) => Self::ConstraintViolation {
                    kind: ConstraintKind::NotNull,
                    message,
                },
                None => Self::Db(err),
            },
        }
    }
}

// sqlx does not classify not-null failures, so match on the driver message
fn not_null_violation(err: &DbErr) -> Option<String> {
    const PATTERNS: [&str; 3] = [
        // SQLite
        "NOT NULL constraint failed",
        // Postgres
        "violates not-null constraint",
        // MySQL
        "cannot be null",
    ];
    let message = err.to_string();
    PATTERNS
        .iter()
        .any(|pattern| message.contains(pattern))
        .then_some(message)
}
