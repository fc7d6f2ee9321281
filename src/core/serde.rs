/*!
 * Serde Helper Functions
 * Skip predicates for `#[serde(skip_serializing_if = "...")]`
 */

/// Skip serializing if a u64 counter is still zero
#[inline]
pub fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

/// Skip serializing if a slice is empty
#[inline]
pub fn is_empty_slice<T>(value: &[T]) -> bool {
    value.is_empty()
}
