//! Payment validation.

/// Returns true if `amount` is an acceptable tender.
///
/// An amount is acceptable when it is strictly positive; the integer
/// parameter type already rules out fractional or non-finite values.
/// Pure predicate, no side effects.
pub fn validate_amount(amount: i64) -> bool {
    amount > 0
}
