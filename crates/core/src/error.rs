use derive_more::Display;

/// Errors raised when a caller violates a precondition of the hex math API.
/// These are all programmer errors: they're raised synchronously at the call
/// that received the bad input, and nothing in this crate ever retries or
/// recovers from them.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum HexError {
    /// A cube coordinate that doesn't lie on the plane `q + r + s = 0`, or
    /// has a component outside `±`[crate::Hex::MAX_COORDINATE]. For
    /// fractional coordinates, the sum is allowed to drift from zero by
    /// [crate::FractionalHex::TOLERANCE].
    #[display(
        fmt = "Invalid hex coordinate ({}, {}, {}); must satisfy q+r+s=0 with \
               each component within ±1073741823",
        q,
        r,
        s
    )]
    InvalidCoordinate { q: f64, r: f64, s: f64 },

    /// A direction index outside of `[0, 6)`
    #[display(fmt = "Invalid direction {}; must be in [0, 6)", direction)]
    InvalidDirection { direction: usize },

    /// A layout with a non-positive (or non-finite) size or spacing
    #[display(fmt = "Invalid layout: {}", reason)]
    InvalidLayout { reason: String },
}

impl std::error::Error for HexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            HexError::InvalidCoordinate {
                q: 1.0,
                r: 1.0,
                s: 0.0
            }
            .to_string(),
            "Invalid hex coordinate (1, 1, 0); must satisfy q+r+s=0 with each \
             component within ±1073741823"
        );
        assert_eq!(
            HexError::InvalidDirection { direction: 6 }.to_string(),
            "Invalid direction 6; must be in [0, 6)"
        );
    }

    #[test]
    fn test_into_anyhow() {
        fn fallible() -> anyhow::Result<()> {
            Err(HexError::InvalidDirection { direction: 9 })?;
            Ok(())
        }

        let err = fallible().unwrap_err();
        assert_eq!(
            err.downcast::<HexError>().unwrap(),
            HexError::InvalidDirection { direction: 9 }
        );
    }
}
