//! Student module: three-layer architecture (domain, repository, service).
//!
//! The validator is a pure leaf; the repository owns uniqueness and row
//! lifecycle; the service ties the two together.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod repo;
pub mod service;
pub mod validator;

pub use errors::StudentError;
pub use service::StudentService;
