//! Value resolution.
//!
//! Reproduces how a native enumeration assigns discriminants: the first
//! member without an explicit value is zero, and every other member without
//! one is its predecessor's value plus one. Explicit values may repeat or
//! go backwards; counting simply continues from them.

use crate::repr::EnumRepr;

/// Resolve one value per member from the per-member explicit values.
///
/// `A, B, C` (no explicit values) resolves to `[0, 1, 2]`;
/// `A = 5, B, C = 2, D` resolves to `[5, 6, 2, 3]`.
pub fn resolve_values<R: EnumRepr>(explicit: &[Option<R>]) -> Vec<R> {
    let mut next = R::ZERO;
    explicit
        .iter()
        .map(|value| {
            let value = value.unwrap_or(next);
            next = value.successor();
            value
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
