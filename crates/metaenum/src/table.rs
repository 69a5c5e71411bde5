//! Member tables.
//!
//! A `MetaEnumTable` is built once from the literal member list and the
//! already-resolved member values, and is never modified afterwards. Names
//! and segment text borrow from the declaration text.
//!
//! Lookups are linear scans in declaration order, so with duplicate values
//! or names the first declared member wins. Ordinal access is O(1).

use std::iter::FusedIterator;

use metaenum_scanner::{is_blank, member_name, next_boundary};
use serde::Serialize;
use tracing::trace;

use crate::error::MetaEnumError;

/// Name reported for a value that no member has.
pub const INVALID_ENUM_NAME: &str = "__INVALID_ENUM_VAL__";

/// One member of an enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MetaEnumMember<'a, V> {
    /// Resolved value
    pub value: V,
    /// Member name, e.g. `B`
    pub name: &'a str,
    /// The verbatim segment the member was read from, e.g. ` B = foo(1, 2)`
    pub string: &'a str,
    /// Ordinal in declaration order
    pub index: usize,
}

/// The complete, ordered member table of one enumeration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetaEnumTable<'a, V> {
    string: &'a str,
    members: Box<[MetaEnumMember<'a, V>]>,
}

impl<'a, V: Copy + PartialEq> MetaEnumTable<'a, V> {
    /// Build the table for the member list `text`, whose members resolve to
    /// `values` in declaration order.
    ///
    /// The member count is `values.len()`. The text must split into exactly
    /// that many top-level segments, optionally followed by a trailing
    /// comma, and every segment must name its member.
    pub fn parse(text: &'a str, values: &[V]) -> Result<Self, MetaEnumError> {
        let count = values.len();
        let mut members = Vec::with_capacity(count);
        let mut cursor = 0;

        for (index, &value) in values.iter().enumerate() {
            if index > 0 {
                if cursor >= text.len() {
                    return Err(MetaEnumError::MissingMember {
                        expected: count,
                        found: index,
                    });
                }
                // Step over the separating comma.
                cursor += 1;
            }

            let end = next_boundary(text, cursor);
            let segment = &text[cursor..end];
            let name = member_name(segment).ok_or_else(|| MetaEnumError::MissingIdentifier {
                index,
                segment: segment.to_string(),
            })?;
            trace!(index, name, "meta enum member");

            members.push(MetaEnumMember {
                value,
                name,
                string: segment,
                index,
            });
            cursor = end;
        }

        let rest = &text[cursor..];
        let rest = if count > 0 {
            rest.strip_prefix(',').unwrap_or(rest)
        } else {
            rest
        };
        if !is_blank(rest) {
            return Err(MetaEnumError::TrailingMembers {
                expected: count,
                rest: rest.to_string(),
            });
        }

        Ok(MetaEnumTable {
            string: text,
            members: members.into_boxed_slice(),
        })
    }

    /// Number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The full declaration text the table was built from.
    #[inline]
    pub fn string(&self) -> &'a str {
        self.string
    }

    /// All members in declaration order.
    #[inline]
    pub fn members(&self) -> &[MetaEnumMember<'a, V>] {
        &self.members
    }

    /// The member at ordinal `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&MetaEnumMember<'a, V>> {
        self.members.get(index)
    }

    /// Name of the first member with `value`, or [`INVALID_ENUM_NAME`].
    pub fn name_of(&self, value: V) -> &'a str {
        self.member_of(value)
            .map_or(INVALID_ENUM_NAME, |member| member.name)
    }

    /// Value of the first member named exactly `name`.
    pub fn value_of(&self, name: &str) -> Option<V> {
        self.members
            .iter()
            .find(|member| member.name == name)
            .map(|member| member.value)
    }

    /// Value of the first member named `name`, or `default`.
    pub fn value_of_or(&self, name: &str, default: V) -> V {
        self.value_of(name).unwrap_or(default)
    }

    /// Ordinal of the first member with `value`, or [`size`](Self::size)
    /// if there is none.
    pub fn index_of(&self, value: V) -> usize {
        self.member_of(value)
            .map_or(self.members.len(), |member| member.index)
    }

    /// First member with `value`.
    pub fn member_of(&self, value: V) -> Option<&MetaEnumMember<'a, V>> {
        self.members.iter().find(|member| member.value == value)
    }

    /// Member values in declaration order.
    pub fn values(&self) -> Values<'_, 'a, V> {
        Values {
            inner: self.members.iter(),
        }
    }
}

impl<'t, 'a, V: Copy + PartialEq> IntoIterator for &'t MetaEnumTable<'a, V> {
    type Item = V;
    type IntoIter = Values<'t, 'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

/// Iterator over the values of a table, in declaration order.
#[derive(Clone, Debug)]
pub struct Values<'t, 'a, V> {
    inner: std::slice::Iter<'t, MetaEnumMember<'a, V>>,
}

impl<V: Copy> Iterator for Values<'_, '_, V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|member| member.value)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<V> {
        self.inner.nth(n).map(|member| member.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V: Copy> DoubleEndedIterator for Values<'_, '_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(|member| member.value)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<V> {
        self.inner.nth_back(n).map(|member| member.value)
    }
}

impl<V: Copy> ExactSizeIterator for Values<'_, '_, V> {}

impl<V: Copy> FusedIterator for Values<'_, '_, V> {}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
