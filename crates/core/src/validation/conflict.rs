//! Name conflict detection within a scope.

use crate::error::CoreError;
use crate::naming::{normalize, same_name};
use crate::scene::Scene;

/// Find the scene in `scope` whose name matches `name` after normalization.
pub fn find_by_name<'a>(scope: &'a [Scene], name: &str) -> Option<&'a Scene> {
    scope.iter().find(|scene| same_name(&scene.name, name))
}

/// Fail with [`CoreError::DuplicateName`] if `name` is already taken in `scope`.
pub fn ensure_unique_name(scope: &[Scene], name: &str) -> Result<(), CoreError> {
    match find_by_name(scope, name) {
        Some(_) => Err(CoreError::DuplicateName {
            name: normalize(name),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ScenePayload;
    use assert_matches::assert_matches;

    fn scene(name: &str) -> Scene {
        Scene {
            id: format!("id-{name}"),
            name: normalize(name),
            payload: ScenePayload::default(),
        }
    }

    #[test]
    fn finds_case_and_whitespace_insensitively() {
        let scope = vec![scene("tavern"), scene("forest")];
        let found = find_by_name(&scope, "  Forest ").unwrap();
        assert_eq!(found.id, "id-forest");
    }

    #[test]
    fn duplicate_reports_normalized_name() {
        let scope = vec![scene("tavern")];
        assert_matches!(
            ensure_unique_name(&scope, " taVern"),
            Err(CoreError::DuplicateName { name }) if name == "TAVERN"
        );
    }

    #[test]
    fn empty_scope_never_conflicts() {
        assert!(ensure_unique_name(&[], "anything").is_ok());
    }

    #[test]
    fn distinct_names_pass() {
        let scope = vec![scene("zone 1")];
        assert!(ensure_unique_name(&scope, "zone 2").is_ok());
    }
}
