//! The `students` table and its row-level operations.
//!
//! These helpers know nothing about field formats; callers validate first.

use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub course: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The five caller-supplied columns.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub course: &'a str,
    pub address: &'a str,
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Exact, case-sensitive match.
pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Insert a row, assigning `id` and `created_at`.
///
/// The email lookup gives a clean error in the common case; the unique index
/// still catches a concurrent insert and surfaces it as `Duplicate` too.
pub async fn create(db: &DatabaseConnection, fields: Fields<'_>) -> Result<Model, ModelError> {
    if find_by_email(db, fields.email).await?.is_some() {
        return Err(ModelError::Duplicate(fields.email.to_string()));
    }
    let am = ActiveModel {
        name: Set(fields.name.to_string()),
        email: Set(fields.email.to_string()),
        phone: Set(fields.phone.to_string()),
        course: Set(fields.course.to_string()),
        address: Set(fields.address.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Replace all five mutable columns of an existing row.
pub async fn overwrite(db: &DatabaseConnection, id: i32, fields: Fields<'_>) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find(db, id)
        .await?
        .ok_or_else(|| ModelError::NotFound(format!("student {id}")))?
        .into();
    am.name = Set(fields.name.to_string());
    am.email = Set(fields.email.to_string());
    am.phone = Set(fields.phone.to_string());
    am.course = Set(fields.course.to_string());
    am.address = Set(fields.address.to_string());
    Ok(am.update(db).await?)
}

pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(format!("student {id}")));
    }
    Ok(())
}
