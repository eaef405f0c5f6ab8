use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use models::student::{Fields, Model};

/// Caller-supplied values, not yet validated or persisted.
///
/// Absent keys deserialize to empty strings so they surface as a missing field
/// rather than a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub address: String,
}

impl StudentInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        course: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            course: course.into(),
            address: address.into(),
        }
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields {
            name: &self.name,
            email: &self.email,
            phone: &self.phone,
            course: &self.course,
            address: &self.address,
        }
    }
}

/// A stored student (business view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl StudentRecord {
    /// True when every caller-supplied field equals `input`.
    pub fn has_fields_of(&self, input: &StudentInput) -> bool {
        self.name == input.name
            && self.email == input.email
            && self.phone == input.phone
            && self.course == input.course
            && self.address == input.address
    }
}

impl From<Model> for StudentRecord {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            course: m.course,
            address: m.address,
            created_at: m.created_at,
        }
    }
}
