/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Generate the externally visible identifier for a newly created record.
///
/// Identifiers are random UUID v4 strings, distinct from the numeric primary
/// key, and are never supplied by clients.
pub fn new_identifier() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identifiers_are_uuid_shaped_and_distinct() {
        let ids: HashSet<String> = (0..100).map(|_| new_identifier()).collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| id.len() == 36));
    }
}
