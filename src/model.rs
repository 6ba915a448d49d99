//! Project resource model
//!
//! A project tree is a hierarchy of folders and files owned by the host
//! tool. Files carry a project-relative path (always '/'-separated) and a
//! storage [`Location`], which for linked resources may point outside the
//! project root entirely. The finder only needs the [`ResourceTree`]
//! traversal capability, so host-backed models can plug in their own
//! implementation; [`ProjectTree`] is the concrete in-memory form.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, TraversalError};
use crate::paths::{join_relative, make_relative, normalize_str};

/// Where a file resource is actually stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Stored under the project root at the resource's relative path
    Rooted,
    /// Linked resource whose storage lives at an explicit target path
    Linked(PathBuf),
    /// Broken link or non-file storage; can never be resolved
    Unresolved,
}

/// A leaf file tracked by the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResource {
    /// Path relative to the project root, using '/' as separator
    path: String,
    /// Storage location of the file
    location: Location,
}

impl FileResource {
    /// Create a file stored under the project root at its relative path
    pub fn rooted(path: impl Into<String>) -> Self {
        Self {
            path: normalize_str(&path.into()),
            location: Location::Rooted,
        }
    }

    /// Create a linked file whose storage lives at `target`
    pub fn linked(path: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            path: normalize_str(&path.into()),
            location: Location::Linked(target.into()),
        }
    }

    /// Create a file whose storage location is unknown (e.g. a broken link)
    pub fn unresolved(path: impl Into<String>) -> Self {
        Self {
            path: normalize_str(&path.into()),
            location: Location::Unresolved,
        }
    }

    /// Project-relative path, '/'-separated
    pub fn path(&self) -> &str {
        &self.path
    }

    /// File name (the last path segment)
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Storage location of this file
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Resolve the absolute on-disk path of this file.
    ///
    /// Rooted files resolve to `root` joined with their relative path;
    /// linked files resolve to their stored target. Resolution is a model
    /// operation and performs no filesystem I/O.
    ///
    /// # Errors
    /// Returns [`ResolveError`] if this file has no resolvable location, if
    /// a link target is not absolute, or if `root` itself is not absolute.
    pub fn resolve(&self, root: &Path) -> Result<PathBuf, ResolveError> {
        match &self.location {
            Location::Rooted => {
                if !root.is_absolute() {
                    return Err(ResolveError::RelativeRoot);
                }
                Ok(join_relative(root, &self.path))
            }
            Location::Linked(target) => {
                if target.is_absolute() {
                    Ok(target.clone())
                } else {
                    Err(ResolveError::RelativeLinkTarget(self.path.clone()))
                }
            }
            Location::Unresolved => Err(ResolveError::Unresolved(self.path.clone())),
        }
    }
}

/// A folder containing child resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Path relative to the project root, using '/' as separator
    path: String,
    /// Child resources in insertion order
    children: Vec<Resource>,
}

impl Folder {
    /// Create an empty folder
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: normalize_str(&path.into()),
            children: Vec::new(),
        }
    }

    /// Add a child resource, builder style
    pub fn with(mut self, child: impl Into<Resource>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add a child resource
    pub fn push(&mut self, child: impl Into<Resource>) {
        self.children.push(child.into());
    }

    /// Project-relative path, '/'-separated
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Child resources in insertion order
    pub fn children(&self) -> &[Resource] {
        &self.children
    }
}

/// A resource in the project tree: a folder or a leaf file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Folder(Folder),
    File(FileResource),
}

impl Resource {
    /// Project-relative path of the resource
    pub fn path(&self) -> &str {
        match self {
            Resource::Folder(folder) => folder.path(),
            Resource::File(file) => file.path(),
        }
    }

    /// The file resource, if this is a leaf file
    pub fn as_file(&self) -> Option<&FileResource> {
        match self {
            Resource::File(file) => Some(file),
            Resource::Folder(_) => None,
        }
    }
}

impl From<FileResource> for Resource {
    fn from(file: FileResource) -> Self {
        Resource::File(file)
    }
}

impl From<Folder> for Resource {
    fn from(folder: Folder) -> Self {
        Resource::Folder(folder)
    }
}

/// Traversal capability over a project resource tree.
///
/// The finder is generic over this trait so host tools can walk their own
/// project model. An implementation invokes the visitor once per resource in
/// its traversal order, stops as soon as the visitor returns
/// [`ControlFlow::Break`], and reports a read failure by returning
/// [`TraversalError`] (the walk stops there; resources visited before the
/// failure stand).
pub trait ResourceTree {
    /// Absolute on-disk root of the project
    fn root(&self) -> &Path;

    /// Visit every resource in traversal order until the visitor breaks
    ///
    /// # Errors
    /// Returns [`TraversalError`] if the underlying tree read fails.
    fn accept<'a>(
        &'a self,
        visitor: &mut dyn FnMut(&'a Resource) -> ControlFlow<()>,
    ) -> Result<(), TraversalError>;
}

/// Concrete in-memory project tree
///
/// Traversal is depth-first preorder in insertion order, so lookups over
/// duplicate resolved paths are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTree {
    /// Absolute on-disk root of the project
    root: PathBuf,
    /// Top-level resources in insertion order
    resources: Vec<Resource>,
}

impl ProjectTree {
    /// Create an empty tree rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            resources: Vec::new(),
        }
    }

    /// Add a top-level resource, builder style
    pub fn with(mut self, resource: impl Into<Resource>) -> Self {
        self.resources.push(resource.into());
        self
    }

    /// Add a top-level resource
    pub fn push(&mut self, resource: impl Into<Resource>) {
        self.resources.push(resource.into());
    }

    /// Top-level resources in insertion order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Create a rooted file resource from its absolute on-disk path.
    ///
    /// The path must lie under the tree's root; returns `None` otherwise.
    /// The resource's relative path is derived from the root prefix, so the
    /// file resolves back to the same on-disk location.
    pub fn rooted_file(&self, on_disk: &Path) -> Option<FileResource> {
        make_relative(on_disk, &self.root).map(FileResource::rooted)
    }
}

impl ResourceTree for ProjectTree {
    fn root(&self) -> &Path {
        &self.root
    }

    fn accept<'a>(
        &'a self,
        visitor: &mut dyn FnMut(&'a Resource) -> ControlFlow<()>,
    ) -> Result<(), TraversalError> {
        let _ = visit_all(&self.resources, visitor);
        Ok(())
    }
}

fn visit_all<'a>(
    resources: &'a [Resource],
    visitor: &mut dyn FnMut(&'a Resource) -> ControlFlow<()>,
) -> ControlFlow<()> {
    for resource in resources {
        visitor(resource)?;
        if let Resource::Folder(folder) = resource {
            visit_all(folder.children(), visitor)?;
        }
    }
    ControlFlow::Continue(())
}
