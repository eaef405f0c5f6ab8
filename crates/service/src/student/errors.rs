use models::errors::ModelError;
use thiserror::Error;

/// Every way a student operation can fail. Display text is end-user facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    #[error("All fields are required.")]
    MissingField,
    #[error("Invalid email format.")]
    InvalidEmailFormat,
    #[error("Invalid phone number (e.g., +1234567890).")]
    InvalidPhoneFormat,
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Email already registered.")]
    DuplicateEmail,
    #[error("Student not found.")]
    NotFound,
    #[error("repository error: {0}")]
    Repository(String),
}

impl StudentError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            StudentError::MissingField => 1001,
            StudentError::InvalidEmailFormat => 1002,
            StudentError::InvalidPhoneFormat => 1003,
            StudentError::NameTooShort => 1004,
            StudentError::DuplicateEmail => 1101,
            StudentError::NotFound => 1102,
            StudentError::Repository(_) => 1200,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StudentError::MissingField => "MissingField",
            StudentError::InvalidEmailFormat => "InvalidEmailFormat",
            StudentError::InvalidPhoneFormat => "InvalidPhoneFormat",
            StudentError::NameTooShort => "NameTooShort",
            StudentError::DuplicateEmail => "DuplicateEmail",
            StudentError::NotFound => "NotFound",
            StudentError::Repository(_) => "Repository",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StudentError::MissingField
                | StudentError::InvalidEmailFormat
                | StudentError::InvalidPhoneFormat
                | StudentError::NameTooShort
        )
    }
}

impl From<ModelError> for StudentError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound(_) => StudentError::NotFound,
            ModelError::Duplicate(_) => StudentError::DuplicateEmail,
            ModelError::Db(msg) => StudentError::Repository(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_student_kinds() {
        assert_eq!(StudentError::from(ModelError::NotFound("student 3".into())), StudentError::NotFound);
        assert_eq!(StudentError::from(ModelError::Duplicate("a@b.c".into())), StudentError::DuplicateEmail);
        assert_eq!(
            StudentError::from(ModelError::Db("disk I/O error".into())),
            StudentError::Repository("disk I/O error".into())
        );
    }

    #[test]
    fn only_field_rules_are_validation() {
        assert!(StudentError::NameTooShort.is_validation());
        assert!(!StudentError::DuplicateEmail.is_validation());
        assert!(!StudentError::NotFound.is_validation());
    }
}
