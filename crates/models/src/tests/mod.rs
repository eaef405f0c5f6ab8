/// Database connection and schema tests
pub mod db_tests;
