use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    WrongCardCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    InvalidCard(#[from] CardParseError),
}

/// Five distinct cards. Equality and hashing ignore the order the cards were given in.
///
/// ```
/// use algo_toolkit::hand::Hand;
///
/// let hand: Hand = "Qs Qh Qd 2c 2s".parse().unwrap();
/// assert_eq!(hand.as_array().len(), 5);
/// assert!("Qs Qs Qd 2c 2s".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        if let Some(card) = first_duplicate(&cards) {
            log::debug!("rejecting hand with duplicate card {card}");
            return Err(HandError::DuplicateCard(card));
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::WrongCardCount(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn as_array(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }

    /// The cards in ascending order.
    pub fn sorted(&self) -> [Card; HAND_SIZE] {
        let mut cards = self.0;
        cards.sort_unstable();
        cards
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Hand {}

impl Hash for Hand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Returns the first card that appears more than once, if any.
pub fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}
