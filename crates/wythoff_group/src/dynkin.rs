//! Mirror distances in limited Dynkin notation.

use wythoff_math::Float;

/// Returns the mirror distance written as `c`, or `None` if `c` is not one of
/// `o x q f u`.
///
/// <https://bendwavy.org/klitzing/explain/dynkin-notation.htm>
pub fn dynkin_char(c: char) -> Option<Float> {
    match c {
        'o' => Some(0.0),
        'x' => Some(1.0),
        'q' => Some(std::f64::consts::SQRT_2),
        'f' => Some((5.0_f64.sqrt() + 1.0) * 0.5), // phi
        'u' => Some(2.0),
        _ => None,
    }
}

/// Parses mirror distances in Dynkin notation. For example, `xoo` represents
/// `[1, 0, 0]`.
pub fn parse_dynkin_notation(rank: u8, s: &str) -> Result<Vec<Float>, DynkinNotationError<'_>> {
    let len = s.chars().count();
    if len != rank as usize {
        return Err(DynkinNotationError::BadLength { rank, len, s });
    }
    s.chars()
        .map(|c| dynkin_char(c).ok_or(DynkinNotationError::BadChar(c)))
        .collect()
}

/// Error from [`parse_dynkin_notation()`].
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DynkinNotationError<'a> {
    #[error("group has rank {rank} but string {s:?} has length {len}")]
    BadLength { rank: u8, len: usize, s: &'a str },
    #[error("unknown mirror distance {0:?}; expected one of o, x, q, f, u")]
    BadChar(char),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_dynkin() {
        assert_eq!(parse_dynkin_notation(3, "xoo"), Ok(vec![1.0, 0.0, 0.0]));
        assert_eq!(parse_dynkin_notation(4, "oxux"), Ok(vec![0.0, 1.0, 2.0, 1.0]));
        assert_eq!(
            parse_dynkin_notation(3, "xo"),
            Err(DynkinNotationError::BadLength {
                rank: 3,
                len: 2,
                s: "xo",
            }),
        );
        assert_eq!(
            parse_dynkin_notation(3, "xoz"),
            Err(DynkinNotationError::BadChar('z')),
        );
    }
}
