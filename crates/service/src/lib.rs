//! Service layer for student registration.
//! - Validates candidates before anything touches storage.
//! - Hides persistence behind `StudentRepository` so handlers stay storage-agnostic.
//! - Reuses the entity definitions in the `models` crate.

pub mod student;
#[cfg(test)]
pub mod test_support;
