//! Game flow on top of `gambit-core`: move requests, selection, promotion
//! choice and status reporting.

pub mod error;
pub mod game;
pub mod promotion;
pub mod request;

pub use error::{GameError, RequestError};
pub use game::{Game, GameConfig, MoveOutcome, Phase};
pub use promotion::{Always, PromotionChooser, UseDefault};
pub use request::{MoveRequest, parse_request};
