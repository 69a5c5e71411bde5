//! Declared enums.
//!
//! [`MetaEnum`] connects a native enum to its table. It is normally
//! implemented by [`meta_enum!`](crate::meta_enum), which hands the
//! stringified member list and the per-member explicit values to
//! [`build_enum_table`] on first use.

use std::marker::PhantomData;

use tracing::debug;

use crate::repr::EnumRepr;
use crate::resolve::resolve_values;
use crate::table::{MetaEnumTable, Values};

/// An enum with a reflection table.
pub trait MetaEnum: Copy + PartialEq + Send + Sync + 'static {
    /// The `#[repr]` integer type.
    type Repr: EnumRepr;

    /// Name of the enum type.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const VARIANTS: &'static [Self];

    /// The member's discriminant.
    fn to_repr(self) -> Self::Repr;

    /// The table for this enum, built on first call.
    fn meta_enum() -> &'static MetaEnumTable<'static, Self>;
}

/// Build the table of `E` from its literal member list.
///
/// `idents` and `explicit` hold one entry per member: the variant as the
/// compiler sees it, and the explicit value if the member has one. The
/// resolved values must agree with the native discriminants and the names
/// read from `text` must agree with `idents`.
///
/// # Panics
///
/// Panics if the values or names disagree or the text is malformed. All are
/// programming errors in the declaration, and no table is produced. Names
/// outside `[A-Za-z_][A-Za-z0-9_]*` (such as `Café`) land here.
pub fn build_enum_table<E: MetaEnum>(
    text: &'static str,
    idents: &[&str],
    explicit: &[Option<E::Repr>],
) -> MetaEnumTable<'static, E> {
    let resolved = resolve_values(explicit);
    assert_eq!(
        resolved.len(),
        E::VARIANTS.len(),
        "{}: {} explicit value slots for {} members",
        E::NAME,
        resolved.len(),
        E::VARIANTS.len()
    );
    for (index, (&variant, &value)) in E::VARIANTS.iter().zip(&resolved).enumerate() {
        let native = variant.to_repr();
        assert!(
            native == value,
            "{}: member {index} resolves to {value} but its discriminant is {native}",
            E::NAME
        );
    }

    let table = match MetaEnumTable::parse(text, E::VARIANTS) {
        Ok(table) => table,
        Err(err) => panic!("malformed declaration of {}: {err}", E::NAME),
    };

    assert_eq!(
        idents.len(),
        table.size(),
        "{}: {} variant names for {} members",
        E::NAME,
        idents.len(),
        table.size()
    );
    for (member, &ident) in table.members().iter().zip(idents) {
        let declared = ident.strip_prefix("r#").unwrap_or(ident);
        assert!(
            member.name == declared,
            "{}: member {} is declared as `{ident}` but reads as `{}`",
            E::NAME,
            member.index,
            member.name
        );
    }
    debug!(enum_name = E::NAME, members = table.size(), "built meta enum table");
    table
}

/// The table of `E`.
#[inline]
pub fn meta_enum<E: MetaEnum>() -> &'static MetaEnumTable<'static, E> {
    E::meta_enum()
}

/// Name of `value`, or [`INVALID_ENUM_NAME`](crate::INVALID_ENUM_NAME).
pub fn enum_to_string<E: MetaEnum>(value: E) -> &'static str {
    E::meta_enum().name_of(value)
}

/// Ordinal of `value`, or the member count if it has none.
pub fn enum_to_index<E: MetaEnum>(value: E) -> usize {
    E::meta_enum().index_of(value)
}

/// The member named exactly `name`.
pub fn string_to_enum<E: MetaEnum>(name: &str) -> Option<E> {
    E::meta_enum().value_of(name)
}

/// The member named exactly `name`, or `default`.
pub fn string_to_enum_or<E: MetaEnum>(name: &str, default: E) -> E {
    E::meta_enum().value_of_or(name, default)
}

/// The first member whose discriminant is `repr`.
pub fn enum_from_repr<E: MetaEnum>(repr: E::Repr) -> Option<E> {
    E::VARIANTS
        .iter()
        .copied()
        .find(|variant| variant.to_repr() == repr)
}

/// All members of `E` in declaration order.
///
/// The range is restartable: every call to [`iter`](Self::iter) starts
/// again from the first member.
pub struct MetaEnumRange<E> {
    marker: PhantomData<fn() -> E>,
}

impl<E: MetaEnum> MetaEnumRange<E> {
    pub fn new() -> Self {
        MetaEnumRange {
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        E::meta_enum().size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        E::meta_enum().is_empty()
    }

    /// The member at ordinal `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<E> {
        E::meta_enum().get(index).map(|member| member.value)
    }

    pub fn iter(&self) -> Values<'static, 'static, E> {
        E::meta_enum().values()
    }

    /// Members from `value` (inclusive) to the last one. Empty if `value`
    /// is not a member.
    pub fn iter_from(&self, value: E) -> Values<'static, 'static, E> {
        let table = E::meta_enum();
        let mut values = table.values();
        let skip = table.index_of(value);
        if skip > 0 {
            values.nth(skip - 1);
        }
        values
    }
}

impl<E: MetaEnum> Default for MetaEnumRange<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for MetaEnumRange<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for MetaEnumRange<E> {}

impl<E> std::fmt::Debug for MetaEnumRange<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaEnumRange")
            .field("enum", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: MetaEnum> IntoIterator for MetaEnumRange<E> {
    type Item = E;
    type IntoIter = Values<'static, 'static, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

