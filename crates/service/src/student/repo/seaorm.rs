use sea_orm::DatabaseConnection;

use models::student;
use crate::student::domain::{StudentInput, StudentRecord};
use crate::student::errors::StudentError;
use crate::student::repository::StudentRepository;

pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn insert(&self, input: &StudentInput) -> Result<StudentRecord, StudentError> {
        let created = student::create(&self.db, input.fields()).await?;
        Ok(created.into())
    }

    async fn list_all(&self) -> Result<Vec<StudentRecord>, StudentError> {
        let rows = student::list_all(&self.db).await?;
        Ok(rows.into_iter().map(StudentRecord::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StudentRecord>, StudentError> {
        Ok(student::find(&self.db, id).await?.map(StudentRecord::from))
    }

    async fn update_by_id(&self, id: i32, input: &StudentInput) -> Result<StudentRecord, StudentError> {
        let updated = student::overwrite(&self.db, id, input.fields()).await?;
        Ok(updated.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), StudentError> {
        student::hard_delete(&self.db, id).await?;
        Ok(())
    }
}
