//! Coordinate move requests (`e2e4`, `e7e8q`).

use std::fmt;
use std::str::FromStr;

use gambit_core::{PromotionPiece, Square};

use crate::error::RequestError;

/// A move request as typed by a user: two squares and an optional promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Square of the piece to move.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Promotion piece, when the text names one.
    pub promotion: Option<PromotionPiece>,
}

/// Parse a coordinate move such as `e2e4` or `e7e8q`.
///
/// Surrounding whitespace is ignored. The promotion letter may be either case.
pub fn parse_request(text: &str) -> Result<MoveRequest, RequestError> {
    let trimmed = text.trim();
    if !trimmed.is_ascii() || !(4..=5).contains(&trimmed.len()) {
        return Err(RequestError::WrongLength {
            text: trimmed.to_string(),
        });
    }

    let square = |s: &str| {
        Square::from_algebraic(s).ok_or_else(|| RequestError::InvalidSquare {
            text: s.to_string(),
        })
    };
    let from = square(&trimmed[0..2])?;
    let to = square(&trimmed[2..4])?;

    let promotion = match trimmed[4..].chars().next() {
        Some(c) => Some(
            PromotionPiece::from_char(c)
                .ok_or(RequestError::InvalidPromotion { character: c })?,
        ),
        None => None,
    };

    Ok(MoveRequest {
        from,
        to,
        promotion,
    })
}

impl FromStr for MoveRequest {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<MoveRequest, RequestError> {
        parse_request(s)
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_move() {
        let req = parse_request("e2e4").unwrap();
        assert_eq!(req.from, Square::E2);
        assert_eq!(req.to, Square::E4);
        assert_eq!(req.promotion, None);
    }

    #[test]
    fn parse_promotion() {
        let req = parse_request(" e7e8n ").unwrap();
        assert_eq!(req.to, Square::E8);
        assert_eq!(req.promotion, Some(PromotionPiece::Knight));
        assert_eq!(parse_request("a2a1Q").unwrap().promotion, Some(PromotionPiece::Queen));
    }

    #[test]
    fn display_matches_input() {
        for text in ["g1f3", "b7b8r"] {
            assert_eq!(parse_request(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn parse_wrong_length() {
        assert!(matches!(
            parse_request("e2"),
            Err(RequestError::WrongLength { .. })
        ));
        assert!(matches!(
            parse_request("e2e4e5"),
            Err(RequestError::WrongLength { .. })
        ));
    }

    #[test]
    fn parse_bad_square() {
        assert_eq!(
            parse_request("e9e4"),
            Err(RequestError::InvalidSquare {
                text: "e9".to_string()
            })
        );
        assert!(parse_request("i2i4").is_err());
    }

    #[test]
    fn parse_bad_promotion() {
        assert_eq!(
            parse_request("e7e8k"),
            Err(RequestError::InvalidPromotion { character: 'k' })
        );
    }

    #[test]
    fn from_str_delegates() {
        let req: MoveRequest = "d2d4".parse().unwrap();
        assert_eq!(req.from, Square::D2);
    }
}
