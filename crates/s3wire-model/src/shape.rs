//! The shape contract shared by every request, response and sub-structure.
//!
//! A shape is a flat bag of optional members with structural equality, a
//! hash consistent with that equality, and a diagnostic rendering of the form
//! `{Name: value,Name: value}` listing only populated members.

use std::any::Any;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use crate::error::ModelError;

/// Behaviour common to all generated shapes.
pub trait S3Shape: Any + PartialEq + fmt::Display + Sized {
    /// The shape name as it appears in the service model.
    const SHAPE_NAME: &'static str;

    /// Wire member names in declaration (and rendering) order.
    const MEMBER_NAMES: &'static [&'static str];

    /// Compare against a value of unknown type.
    ///
    /// Returns `false` for `None` and for values of any other concrete type;
    /// otherwise falls back to structural equality.
    fn shape_eq(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|o| o.downcast_ref::<Self>())
            .is_some_and(|o| self == o)
    }
}

/// How a member value is written inside a diagnostic rendering.
pub(crate) trait RenderValue {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl RenderValue for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl RenderValue for bool {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl RenderValue for i32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl RenderValue for i64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl RenderValue for chrono::DateTime<chrono::Utc> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

impl RenderValue for BTreeMap<String, String> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}

impl<T: RenderValue> RenderValue for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

/// Writer for the `{Name: value,...}` rendering.
pub(crate) struct MemberList<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> MemberList<'a, 'b> {
    pub(crate) fn open(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    pub(crate) fn entry<V: RenderValue + ?Sized>(&mut self, name: &str, value: &V) -> fmt::Result {
        if !self.empty {
            self.f.write_str(",")?;
        }
        self.empty = false;
        write!(self.f, "{name}: ")?;
        value.render(self.f)
    }

    pub(crate) fn close(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// Insert into a metadata-style mapping, rejecting keys that already exist.
pub(crate) fn insert_unique(
    map: &mut Option<BTreeMap<String, String>>,
    member: &'static str,
    key: String,
    value: String,
) -> Result<(), ModelError> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(e) => Err(ModelError::DuplicateKey {
            member,
            key: e.key().clone(),
        }),
        Entry::Vacant(e) => {
            e.insert(value);
            Ok(())
        }
    }
}
