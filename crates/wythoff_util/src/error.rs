//! Error types.

use crate::ti::TypedIndex;

/// Returned when a collection outgrows the integer type of its
/// [`TypedIndex`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("more than {max_value} {type_name}s")]
pub struct IndexOverflow {
    /// Name of the index type, such as `VertexId`.
    pub type_name: &'static str,
    /// Largest index the type can hold.
    pub max_value: usize,
}

impl IndexOverflow {
    /// Returns the overflow error for the index type `I`.
    pub fn new<I: TypedIndex>() -> Self {
        Self {
            type_name: I::TYPE_NAME,
            max_value: I::MAX_INDEX,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    crate::typed_index_struct! {
        struct EdgeId(u8);
    }

    #[test]
    fn test_overflow_message() {
        let e = super::IndexOverflow::new::<EdgeId>();
        assert_eq!(e.to_string(), "more than 255 EdgeIds");
    }
}
