//! Stable element handles.
//!
//! Handles are plain indices into the owning mesh's element arrays. They stay valid for the
//! lifetime of the mesh because elements are only ever appended.

use std::fmt;

/// Index of a vertex within its mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertId(pub usize);

/// Index of an edge within its mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Index of a face within its mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub usize);

macro_rules! impl_handle {
    ($name:ident) => {
        impl $name {
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                $name(index)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_handle!(VertId);
impl_handle!(EdgeId);
impl_handle!(FaceId);

/// Any mesh element.
///
/// Used wherever a routine accepts a mix of element kinds (stop sets, element lists for
/// extraction, selection state) so the kind is part of the value rather than inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Vert(VertId),
    Edge(EdgeId),
    Face(FaceId),
}

impl From<VertId> for Element {
    fn from(v: VertId) -> Self {
        Element::Vert(v)
    }
}

impl From<EdgeId> for Element {
    fn from(e: EdgeId) -> Self {
        Element::Edge(e)
    }
}

impl From<FaceId> for Element {
    fn from(f: FaceId) -> Self {
        Element::Face(f)
    }
}
