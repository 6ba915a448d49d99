//! Project file lookup by absolute path
//!
//! Compilers and build backends report absolute on-disk paths, while the
//! host tool tracks files by project-relative path. Linked resources live
//! outside the project root, so stripping the root prefix cannot recover
//! the resource. This walks the tree and matches on the resolved location
//! of each file instead.

use std::ops::ControlFlow;

use crate::model::{FileResource, Resource, ResourceTree};

/// Find the project file whose resolved absolute path equals `absolute_path`.
///
/// Visits the tree in its traversal order, skipping folders and any file
/// that cannot be resolved, and returns the first file whose resolved
/// location equals `absolute_path` byte-for-byte (no normalization, no case
/// folding). Traversal stops at the first match.
///
/// `absolute_path` must be an absolute, OS-native filesystem path; relative
/// or partial paths never match anything.
///
/// This function never fails. If the tree read itself errors mid-walk, the
/// error is logged and the result accumulated so far is returned; that is
/// `fallback` unless a match was already found. With no match and no
/// fallback the result is `None`.
pub fn find_file<'a, T>(
    tree: &'a T,
    absolute_path: &str,
    fallback: Option<&'a FileResource>,
) -> Option<&'a FileResource>
where
    T: ResourceTree + ?Sized,
{
    let root = tree.root();
    let mut found = fallback;

    let outcome = tree.accept(&mut |resource| {
        let Resource::File(file) = resource else {
            return ControlFlow::Continue(());
        };

        // A candidate that cannot resolve never matches and never aborts
        // the search.
        let Ok(location) = file.resolve(root) else {
            return ControlFlow::Continue(());
        };

        if location.to_str() == Some(absolute_path) {
            found = Some(file);
            return ControlFlow::Break(());
        }

        ControlFlow::Continue(())
    });

    if let Err(err) = outcome {
        tracing::warn!(
            error = %err,
            path = absolute_path,
            "project tree walk failed, returning best-effort result"
        );
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Folder, ProjectTree};

    fn sample_tree() -> ProjectTree {
        ProjectTree::new("/proj").with(
            Folder::new("src")
                .with(FileResource::linked("src/Main", "/abs/src/Main.tex"))
                .with(FileResource::linked("src/Lib", "/abs/src/Lib.tex")),
        )
    }

    #[test]
    fn finds_file_by_resolved_path() {
        let tree = sample_tree();
        let hit = find_file(&tree, "/abs/src/Lib.tex", None).unwrap();
        assert_eq!(hit.path(), "src/Lib");
    }

    #[test]
    fn finds_rooted_file_under_project_root() {
        let tree = ProjectTree::new("/proj").with(FileResource::rooted("src/main.tex"));
        let hit = find_file(&tree, "/proj/src/main.tex", None).unwrap();
        assert_eq!(hit.path(), "src/main.tex");
    }

    #[test]
    fn returns_none_when_nothing_matches() {
        let tree = sample_tree();
        assert!(find_file(&tree, "/abs/src/Missing.tex", None).is_none());
    }

    #[test]
    fn returns_fallback_when_nothing_matches() {
        let tree = sample_tree();
        let fallback = FileResource::linked("src/Lib", "/abs/src/Lib.tex");
        let hit = find_file(&tree, "/abs/src/Missing.tex", Some(&fallback)).unwrap();
        assert_eq!(hit, &fallback);
    }

    #[test]
    fn match_replaces_fallback() {
        let tree = sample_tree();
        let fallback = FileResource::unresolved("old");
        let hit = find_file(&tree, "/abs/src/Main.tex", Some(&fallback)).unwrap();
        assert_eq!(hit.path(), "src/Main");
    }

    #[test]
    fn folders_never_match() {
        // A folder whose path literally equals the target string must not
        // be returned; only leaf files are eligible.
        let tree = ProjectTree::new("/proj")
            .with(Folder::new("/abs/src/Main.tex"))
            .with(FileResource::linked("src/Main", "/abs/src/Main.tex"));
        let hit = find_file(&tree, "/abs/src/Main.tex", None).unwrap();
        assert!(matches!(hit.location(), crate::model::Location::Linked(_)));
        assert_eq!(hit.path(), "src/Main");
    }

    #[test]
    fn unresolvable_candidate_is_skipped_not_fatal() {
        let tree = ProjectTree::new("/proj")
            .with(FileResource::unresolved("broken"))
            .with(FileResource::linked("relative", "not/absolute"))
            .with(FileResource::linked("good", "/abs/good.tex"));
        let hit = find_file(&tree, "/abs/good.tex", None).unwrap();
        assert_eq!(hit.path(), "good");
    }

    #[test]
    fn first_duplicate_in_preorder_wins() {
        // Two distinct linked resources pointing at the same target: the
        // earlier one in preorder is returned.
        let tree = ProjectTree::new("/proj")
            .with(FileResource::linked("first", "/abs/shared.tex"))
            .with(FileResource::linked("second", "/abs/shared.tex"));
        let hit = find_file(&tree, "/abs/shared.tex", None).unwrap();
        assert_eq!(hit.path(), "first");
    }

    #[test]
    fn relative_target_matches_nothing() {
        let tree = ProjectTree::new("/proj").with(FileResource::rooted("src/main.tex"));
        assert!(find_file(&tree, "src/main.tex", None).is_none());
    }
}
