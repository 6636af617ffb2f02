//! Structural description of a destination container.
//!
//! `#[derive(Flags)]` implements [`FlagContainer`] by listing every field of
//! the struct in declaration order. The group applies its naming rules to
//! that list at run time, so the derive stays a faithful mirror of the source
//! and never decides on its own which fields become options.

use crate::{Destination, Tag};

/// Visibility of a field as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisibility {
    /// `pub`.
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in path)`.
    Restricted,
    /// No visibility modifier.
    Private,
}

/// One field of a container as seen by the scan.
#[derive(Debug)]
pub struct FieldEntry<'a> {
    /// Field identifier, or its position for anonymous fields.
    pub name: String,
    /// Source visibility.
    pub visibility: FieldVisibility,
    /// `true` for positional fields without an identifier.
    pub anonymous: bool,
    /// Raw annotation data.
    pub tag: Tag,
    /// Binding to the field's storage. Present whenever the field carries a
    /// `long` or `short` annotation.
    pub destination: Option<Destination<'a>>,
}

impl<'a> FieldEntry<'a> {
    /// Describes a named field.
    #[must_use]
    pub fn named(
        name: impl Into<String>,
        visibility: FieldVisibility,
        tag: Tag,
        destination: Option<Destination<'a>>,
    ) -> Self {
        Self {
            name: name.into(),
            visibility,
            anonymous: false,
            tag,
            destination,
        }
    }

    /// Describes a positional field of a tuple struct.
    #[must_use]
    pub fn anonymous(index: usize, visibility: FieldVisibility, tag: Tag) -> Self {
        Self {
            name: index.to_string(),
            visibility,
            anonymous: true,
            tag,
            destination: None,
        }
    }
}

/// Shape reported by a container.
#[derive(Debug)]
pub enum Shape<'a> {
    /// A struct and its fields in declaration order.
    Struct(Vec<FieldEntry<'a>>),
    /// Anything that is not a struct, such as an enum.
    Opaque,
}

/// Containers whose fields can be scanned into a [`Group`](crate::Group).
///
/// Normally implemented with `#[derive(Flags)]`.
pub trait FlagContainer {
    /// Borrows every field for the duration of the returned shape.
    fn shape(&mut self) -> Shape<'_>;
}
