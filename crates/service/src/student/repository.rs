use async_trait::async_trait;

use super::domain::{StudentInput, StudentRecord};
use super::errors::StudentError;

/// Persistence abstraction for student records.
///
/// Implementations own the email uniqueness rule: `insert` must reject an
/// email already present (exact, case-sensitive) with `DuplicateEmail`, and
/// must leave storage untouched when it does.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn insert(&self, input: &StudentInput) -> Result<StudentRecord, StudentError>;
    /// Ascending by id.
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StudentError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<StudentRecord>, StudentError>;
    /// Overwrites the five caller-supplied fields; `NotFound` if `id` is absent.
    async fn update_by_id(&self, id: i32, input: &StudentInput) -> Result<StudentRecord, StudentError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), StudentError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i32, StudentRecord>,
        last_id: i32,
    }

    impl Rows {
        fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
            self.by_id.values().any(|r| r.email == email && Some(r.id) != except)
        }
    }

    #[derive(Default)]
    pub struct MockStudentRepository {
        rows: Mutex<Rows>,
    }

    impl MockStudentRepository {
        fn lock(&self) -> Result<MutexGuard<'_, Rows>, StudentError> {
            self.rows.lock().map_err(|e| StudentError::Repository(e.to_string()))
        }

        pub fn len(&self) -> usize {
            self.rows.lock().map(|r| r.by_id.len()).unwrap_or(0)
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn insert(&self, input: &StudentInput) -> Result<StudentRecord, StudentError> {
            let mut rows = self.lock()?;
            if rows.email_taken(&input.email, None) {
                return Err(StudentError::DuplicateEmail);
            }
            rows.last_id += 1;
            let record = StudentRecord {
                id: rows.last_id,
                name: input.name.clone(),
                email: input.email.clone(),
                phone: input.phone.clone(),
                course: input.course.clone(),
                address: input.address.clone(),
                created_at: Utc::now(),
            };
            rows.by_id.insert(record.id, record.clone());
            Ok(record)
        }

        async fn list_all(&self) -> Result<Vec<StudentRecord>, StudentError> {
            Ok(self.lock()?.by_id.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<StudentRecord>, StudentError> {
            Ok(self.lock()?.by_id.get(&id).cloned())
        }

        async fn update_by_id(&self, id: i32, input: &StudentInput) -> Result<StudentRecord, StudentError> {
            let mut rows = self.lock()?;
            if !rows.by_id.contains_key(&id) {
                return Err(StudentError::NotFound);
            }
            // mirrors the unique index on the real table
            if rows.email_taken(&input.email, Some(id)) {
                return Err(StudentError::DuplicateEmail);
            }
            let record = rows.by_id.get_mut(&id).ok_or(StudentError::NotFound)?;
            record.name = input.name.clone();
            record.email = input.email.clone();
            record.phone = input.phone.clone();
            record.course = input.course.clone();
            record.address = input.address.clone();
            Ok(record.clone())
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), StudentError> {
            self.lock()?.by_id.remove(&id).map(|_| ()).ok_or(StudentError::NotFound)
        }
    }
}
