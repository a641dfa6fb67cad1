/// Result of asking a pair which of its values is not the given one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherValue<T> {
    /// The given value matched the second element; this is the first.
    First(T),
    /// The given value matched the first element; this is the second.
    Second(T),
    /// Both elements equal the given value.
    Both(T),
}

impl<T> OtherValue<T> {
    pub fn into_inner(self) -> T {
        match self {
            OtherValue::First(value) | OtherValue::Second(value) | OtherValue::Both(value) => value,
        }
    }
}

/// Returns the element of `pair` that is not `value`, or `None` if neither
/// element equals `value`.
pub fn other_value<T: Eq + Copy>(pair: (T, T), value: T) -> Option<OtherValue<T>> {
    match (pair.0 == value, pair.1 == value) {
        (true, true) => Some(OtherValue::Both(value)),
        (true, false) => Some(OtherValue::Second(pair.1)),
        (false, true) => Some(OtherValue::First(pair.0)),
        (false, false) => None,
    }
}
