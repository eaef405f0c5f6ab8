use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{StudentInput, StudentRecord};
use super::errors::StudentError;
use super::repository::StudentRepository;
use super::validator;

/// Student registration service independent of web framework
pub struct StudentService<R: StudentRepository> {
    repo: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate a candidate and, if it passes, insert it.
    ///
    /// # Examples
    /// ```
    /// use service::student::{StudentService, StudentError, domain::StudentInput, repository::mock::MockStudentRepository};
    /// use std::sync::Arc;
    /// let svc = StudentService::new(Arc::new(MockStudentRepository::default()));
    /// let input = StudentInput::new("Ann Lee", "ann@x.com", "+12345678901", "CS", "1 Main St");
    /// let student = tokio_test::block_on(svc.register(input.clone())).unwrap();
    /// assert_eq!(student.id, 1);
    /// let again = tokio_test::block_on(svc.register(input));
    /// assert_eq!(again.unwrap_err(), StudentError::DuplicateEmail);
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: StudentInput) -> Result<StudentRecord, StudentError> {
        if let Err(e) = validator::validate(&input) {
            debug!(kind = e.kind(), "registration rejected");
            return Err(e);
        }
        let student = self.repo.insert(&input).await?;
        info!(student_id = student.id, email = %student.email, "Student registered successfully!");
        Ok(student)
    }

    pub async fn list_all(&self) -> Result<Vec<StudentRecord>, StudentError> {
        self.repo.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<StudentRecord, StudentError> {
        self.repo.find_by_id(id).await?.ok_or(StudentError::NotFound)
    }

    /// Overwrite all five fields of an existing student.
    ///
    /// Field formats are not checked here; only creation is validated.
    #[instrument(skip(self, input))]
    pub async fn update_by_id(&self, id: i32, input: StudentInput) -> Result<StudentRecord, StudentError> {
        let student = self.repo.update_by_id(id, &input).await?;
        info!(student_id = student.id, "Student updated successfully!");
        Ok(student)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<(), StudentError> {
        self.repo.delete_by_id(id).await?;
        info!(student_id = id, "Student deleted successfully!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::repository::mock::MockStudentRepository;
    use crate::student::repo::seaorm::SeaOrmStudentRepository;
    use crate::test_support::get_db;

    fn ann() -> StudentInput {
        StudentInput::new("Ann Lee", "ann@x.com", "+12345678901", "CS", "1 Main St")
    }

    fn mock_service() -> (Arc<MockStudentRepository>, StudentService<MockStudentRepository>) {
        let repo = Arc::new(MockStudentRepository::default());
        (repo.clone(), StudentService::new(repo))
    }

    #[tokio::test]
    async fn invalid_candidates_never_reach_the_store() {
        let (repo, svc) = mock_service();
        let cases = [
            (StudentInput { address: String::new(), ..ann() }, StudentError::MissingField),
            (StudentInput { email: "not-an-email".into(), ..ann() }, StudentError::InvalidEmailFormat),
            (StudentInput { phone: "123".into(), ..ann() }, StudentError::InvalidPhoneFormat),
            (StudentInput { name: "A".into(), ..ann() }, StudentError::NameTooShort),
        ];
        for (input, expected) in cases {
            assert_eq!(svc.register(input).await, Err(expected));
        }
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_and_count_unchanged() {
        let (repo, svc) = mock_service();
        svc.register(ann()).await.unwrap();
        let err = svc.register(StudentInput { name: "Ann Other".into(), ..ann() }).await.unwrap_err();
        assert_eq!(err, StudentError::DuplicateEmail);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn get_round_trips_caller_fields() {
        let (_, svc) = mock_service();
        let created = svc.register(ann()).await.unwrap();
        let fetched = svc.get_by_id(created.id).await.unwrap();
        assert!(fetched.has_fields_of(&ann()));
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_skips_validation() {
        let (_, svc) = mock_service();
        let created = svc.register(ann()).await.unwrap();
        let sloppy = StudentInput::new("A", "nope", "1", "", "");
        let updated = svc.update_by_id(created.id, sloppy.clone()).await.unwrap();
        assert!(updated.has_fields_of(&sloppy));
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_store_unchanged() {
        let (repo, svc) = mock_service();
        let created = svc.register(ann()).await.unwrap();
        let err = svc.update_by_id(created.id + 1, StudentInput { name: "Zed Zed".into(), ..ann() }).await;
        assert_eq!(err, Err(StudentError::NotFound));
        assert_eq!(repo.len(), 1);
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (_, svc) = mock_service();
        let created = svc.register(ann()).await.unwrap();
        svc.delete_by_id(created.id).await.unwrap();
        assert_eq!(svc.get_by_id(created.id).await, Err(StudentError::NotFound));
        assert_eq!(svc.delete_by_id(created.id).await, Err(StudentError::NotFound));
    }

    /// Ann Lee registers once, the same email is refused, one student remains.
    #[tokio::test]
    async fn registration_scenario_against_sqlite() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmStudentRepository::new(get_db().await?));
        let svc = StudentService::new(repo);

        let created = svc.register(ann()).await?;
        assert_eq!(created.id, 1);
        assert_eq!(svc.register(ann()).await, Err(StudentError::DuplicateEmail));

        let all = svc.list_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].email, "ann@x.com");
        Ok(())
    }
}
