//! projfind - map absolute filesystem paths back to project file resources
//!
//! External tools such as compilers and build backends report absolute
//! on-disk paths, while an editor or build-integration layer tracks files by
//! project-relative path. projfind provides:
//! - An in-memory project resource model: folders, files, and linked files
//!   whose storage lives outside the project root
//! - A traversal capability ([`ResourceTree`]) so host tools can walk their
//!   own project model instead
//! - [`find_file`]: look up the tracked file resource whose resolved
//!   absolute path equals a reported path exactly
//!
//! ```
//! use projfind::{find_file, FileResource, Folder, ProjectTree};
//!
//! let tree = ProjectTree::new("/work/thesis").with(
//!     Folder::new("src")
//!         .with(FileResource::rooted("src/main.tex"))
//!         .with(FileResource::linked("src/shared.tex", "/opt/texmf/shared.tex")),
//! );
//!
//! let hit = find_file(&tree, "/opt/texmf/shared.tex", None).unwrap();
//! assert_eq!(hit.path(), "src/shared.tex");
//!
//! assert!(find_file(&tree, "/work/thesis/missing.tex", None).is_none());
//! ```

pub mod error;
pub mod finder;
pub mod model;
pub mod paths;

pub use error::{ResolveError, TraversalError};
pub use finder::find_file;
pub use model::{FileResource, Folder, Location, ProjectTree, Resource, ResourceTree};
