use crate::types::Ohms;

/// Number of digits in the base-10 representation of `value`.
pub fn count_decimal_digits(value: Ohms) -> usize {
    value.to_string().len()
}
