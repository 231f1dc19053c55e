//! Declarative generators for canned enumerations and shapes.
//!
//! Every enumeration and shape in this crate follows the same contract, so the
//! repetitive parts (string mapping, fluent setters, diagnostic rendering) are
//! expanded from a single declaration here.

/// Declare a canned enumeration.
///
/// Each listed variant maps to exactly one canonical wire string. A trailing
/// `Unknown(String)` variant is always added so values the service introduces
/// later survive a decode/encode cycle untouched.
macro_rules! s3_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value outside the known vocabulary, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Canonical wire values, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the canonical wire string of this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// Returns `true` if this value is not part of the known vocabulary.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<&$name> for $name {
            fn from(value: &$name) -> Self {
                value.clone()
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(s))
            }
        }

        impl $crate::shape::RenderValue for $name {
            fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declare a shape.
///
/// Every member becomes a public `Option<T>` field plus a consuming fluent
/// setter of the same name. The string after `=>` is the wire member name,
/// which labels the member in the diagnostic rendering.
macro_rules! s3_shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Creates a shape with every member unset.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Sets `", $wire, "` and returns the shape for chaining.")]
                #[must_use]
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )+
        }

        impl $crate::shape::S3Shape for $name {
            const SHAPE_NAME: &'static str = stringify!($name);
            const MEMBER_NAMES: &'static [&'static str] = &[$($wire),+];
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut members = $crate::shape::MemberList::open(f)?;
                $(
                    if let Some(value) = &self.$field {
                        members.entry($wire, value)?;
                    }
                )+
                members.close()
            }
        }

        impl $crate::shape::RenderValue for $name {
            fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Add the incremental user-metadata API to a shape with a `metadata` member.
macro_rules! impl_metadata_entries {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Insert one user-metadata entry.
                ///
                /// # Errors
                ///
                /// Returns [`ModelError::DuplicateKey`](crate::error::ModelError::DuplicateKey)
                /// if `key` is already present. The mapping is left unchanged in that case.
                pub fn add_metadata_entry(
                    &mut self,
                    key: impl Into<String>,
                    value: impl Into<String>,
                ) -> Result<&mut Self, $crate::error::ModelError> {
                    $crate::shape::insert_unique(
                        &mut self.metadata,
                        "Metadata",
                        key.into(),
                        value.into(),
                    )?;
                    Ok(self)
                }

                /// Remove every user-metadata entry, leaving the member unset.
                pub fn clear_metadata_entries(&mut self) -> &mut Self {
                    self.metadata = None;
                    self
                }
            }
        )+
    };
}
