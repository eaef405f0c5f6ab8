//! Pieces shared by every crate in the registry: log setup and small
//! response types that do not belong to the student domain.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_from_str() {
        let m = types::Message::new("Student deleted successfully!");
        assert_eq!(m.message, "Student deleted successfully!");
    }
}
