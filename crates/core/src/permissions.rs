//! Permission names carried in the `permissions` claim of access tokens,
//! and the permission sets the identity provider grants each role.
//!
//! The role sets must match the API permissions configured on the identity
//! provider's side; this service never assigns roles itself.

pub const GET_ACTORS: &str = "get:actors";
pub const ADD_ACTORS: &str = "add:actors";
pub const MODIFY_ACTORS: &str = "modify:actors";
pub const DELETE_ACTORS: &str = "delete:actors";

pub const GET_MOVIE: &str = "get:movie";
pub const ADD_MOVIE: &str = "add:movie";
pub const MODIFY_MOVIE: &str = "modify:movie";
pub const DELETE_MOVIE: &str = "delete:movie";

/// Casting assistant: read-only access.
pub const ASSISTANT: &[&str] = &[GET_ACTORS, GET_MOVIE];

/// Casting director: assistant, plus actor management and movie edits.
pub const DIRECTOR: &[&str] = &[
    GET_ACTORS,
    GET_MOVIE,
    ADD_ACTORS,
    DELETE_ACTORS,
    MODIFY_ACTORS,
    MODIFY_MOVIE,
];

/// Executive producer: everything.
pub const PRODUCER: &[&str] = &[
    GET_ACTORS,
    GET_MOVIE,
    ADD_ACTORS,
    DELETE_ACTORS,
    MODIFY_ACTORS,
    MODIFY_MOVIE,
    ADD_MOVIE,
    DELETE_MOVIE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_strictly_nested() {
        assert!(ASSISTANT.iter().all(|p| DIRECTOR.contains(p)));
        assert!(DIRECTOR.iter().all(|p| PRODUCER.contains(p)));
        assert!(!DIRECTOR.contains(&ADD_MOVIE));
        assert!(!DIRECTOR.contains(&DELETE_MOVIE));
        assert!(!ASSISTANT.contains(&ADD_ACTORS));
    }
}
