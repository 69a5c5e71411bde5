//! Underlying integer types.

use std::fmt;
use std::hash::Hash;

/// An integer type that can back a declared enum (`#[repr(..)]`).
pub trait EnumRepr: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The value of the first member when it has no explicit value.
    const ZERO: Self;

    /// The implicit value of a member following one with value `self`.
    ///
    /// Wraps on overflow. A native enum rejects such a declaration at
    /// compile time, so the wrapped value never reaches a real table.
    fn successor(self) -> Self;
}

macro_rules! impl_enum_repr {
    ($($ty:ty),* $(,)?) => {
        $(impl EnumRepr for $ty {
            const ZERO: Self = 0;

            #[inline]
            fn successor(self) -> Self {
                self.wrapping_add(1)
            }
        })*
    };
}

impl_enum_repr!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
