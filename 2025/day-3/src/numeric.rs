/// Returns the value of an ASCII decimal digit, or `None` for anything else.
pub fn digit_value(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

/// Folds digits into an integer, most significant digit first.
///
/// Returns `None` when the number does not fit in a `u64`.
pub fn digits_to_value(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(u64::from(digit))
    })
}
