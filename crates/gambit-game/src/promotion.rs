//! Choosing the piece a pawn promotes to.

use gambit_core::{Move, PromotionPiece};

/// Asked once for every promoting move that is about to be applied.
///
/// Returning `None` leaves the choice to
/// [`GameConfig::default_promotion`](crate::GameConfig::default_promotion).
/// Any `FnMut(&Move) -> Option<PromotionPiece>` closure is a chooser.
pub trait PromotionChooser {
    /// Pick the promotion piece for `mv`, which already carries the default.
    fn choose(&mut self, mv: &Move) -> Option<PromotionPiece>;
}

impl<F> PromotionChooser for F
where
    F: FnMut(&Move) -> Option<PromotionPiece>,
{
    fn choose(&mut self, mv: &Move) -> Option<PromotionPiece> {
        self(mv)
    }
}

/// A chooser that never decides, so the configured default is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseDefault;

impl PromotionChooser for UseDefault {
    fn choose(&mut self, _mv: &Move) -> Option<PromotionPiece> {
        None
    }
}

/// A chooser that always picks the same piece.
#[derive(Debug, Clone, Copy)]
pub struct Always(pub PromotionPiece);

impl PromotionChooser for Always {
    fn choose(&mut self, _mv: &Move) -> Option<PromotionPiece> {
        Some(self.0)
    }
}
