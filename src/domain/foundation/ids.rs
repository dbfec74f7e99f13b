//! Strongly-typed identifier value objects.
//!
//! Identifiers are prefixed strings (`idea-…`, `proj-…`) so that seed data
//! and previously persisted snapshots keep their ids verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used for freshly generated ids.
            pub const PREFIX: &'static str = $prefix;

            /// Generates a new unique id.
            pub fn generate() -> Self {
                Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4().simple()))
            }

            /// Wraps an existing id, rejecting blank values.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::empty_field(stringify!($name)));
                }
                Ok(Self(value))
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

prefixed_id!(
    /// Unique identifier for a citizen project idea.
    IdeaId,
    "idea"
);

prefixed_id!(
    /// Unique identifier for an official county project.
    ProjectId,
    "proj"
);

prefixed_id!(
    /// Unique identifier for a comment or forum reply.
    CommentId,
    "comment"
);

prefixed_id!(
    /// Unique identifier for a progress report.
    ReportId,
    "rep"
);

prefixed_id!(
    /// Unique identifier for a forum post.
    PostId,
    "post"
);

prefixed_id!(
    /// Unique identifier for a grounding reference document.
    DocumentId,
    "doc"
);
