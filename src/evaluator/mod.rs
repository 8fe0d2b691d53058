pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError, HAND_SIZE};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display label, e.g. "Full House".
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable hand strength. Higher is better; equal keys split the pot.
///
/// Variants are declared weakest first, so the derived ordering compares the
/// category before any of the rank fields. Rank arrays are in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandKey {
    HighCard { ranks: [Rank; 5] },
    OnePair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    ThreeOfAKind { trips: Rank, kickers: [Rank; 2] },
    /// `top` is Five for the wheel (A-2-3-4-5).
    Straight { top: Rank },
    Flush { ranks: [Rank; 5] },
    FullHouse { trips: Rank, pair: Rank },
    FourOfAKind { quad: Rank, kicker: Rank },
    StraightFlush { top: Rank },
}

impl HandKey {
    pub const fn category(&self) -> Category {
        match self {
            HandKey::HighCard { .. } => Category::HighCard,
            HandKey::OnePair { .. } => Category::OnePair,
            HandKey::TwoPair { .. } => Category::TwoPair,
            HandKey::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandKey::Straight { .. } => Category::Straight,
            HandKey::Flush { .. } => Category::Flush,
            HandKey::FullHouse { .. } => Category::FullHouse,
            HandKey::FourOfAKind { .. } => Category::FourOfAKind,
            HandKey::StraightFlush { .. } => Category::StraightFlush,
        }
    }

    /// Tiebreak ranks in order of significance.
    pub fn tiebreakers(&self) -> Vec<Rank> {
        match *self {
            HandKey::HighCard { ranks } | HandKey::Flush { ranks } => ranks.to_vec(),
            HandKey::OnePair { pair, kickers } => {
                let mut v = vec![pair];
                v.extend(kickers);
                v
            }
            HandKey::TwoPair { high, low, kicker } => vec![high, low, kicker],
            HandKey::ThreeOfAKind { trips, kickers } => {
                let mut v = vec![trips];
                v.extend(kickers);
                v
            }
            HandKey::Straight { top } | HandKey::StraightFlush { top } => vec![top],
            HandKey::FullHouse { trips, pair } => vec![trips, pair],
            HandKey::FourOfAKind { quad, kicker } => vec![quad, kicker],
        }
    }

    /// Pack the key into an integer whose natural order matches the key order.
    pub fn packed(&self) -> u64 {
        // Layout (most significant -> least):
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        // Missing tiebreakers pack as zero; keys of one category always carry the same count.
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (self.category().ordinal() as u64) << CAT_SHIFT;
        for (i, r) in self.tiebreakers().iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u64) << offset;
        }
        v
    }
}

/// Detailed evaluation result. `key` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub key: HandKey,
    /// The evaluated cards, highest rank first.
    pub best_five: [Card; 5],
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Evaluation {}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, card) in self.best_five.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str(")")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("not enough cards to evaluate: {0}")]
    NotEnoughCards(usize),
    #[error("too many cards to evaluate: {0}")]
    TooManyCards(usize),
}

/// Largest card pool accepted by [`evaluate_best`].
pub const MAX_POOL: usize = 7;

/// Evaluate a validated five-card hand.
///
/// ```
/// use algo_toolkit::evaluator::{evaluate, Category, HandKey};
/// use algo_toolkit::cards::Rank;
/// use algo_toolkit::hand::Hand;
///
/// let hand: Hand = "Js Jh Jd Ac As".parse().unwrap();
/// let eval = evaluate(&hand);
/// assert_eq!(eval.category, Category::FullHouse);
/// assert_eq!(eval.key, HandKey::FullHouse { trips: Rank::Jack, pair: Rank::Ace });
/// ```
pub fn evaluate(hand: &Hand) -> Evaluation {
    let eval = evaluate_five(hand.as_array());
    log::trace!("evaluated {hand} as {:?}", eval.key);
    eval
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
///
/// Total on any input. Duplicate cards are not rejected here; use [`Hand`] for that.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (sorted cards, rank groups, flush/straight info)
    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    let key = DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        .unwrap_or(HandKey::HighCard { ranks: analysis.ranks });

    Evaluation { category: key.category(), key, best_five: analysis.sorted_cards }
}

/// Parse and evaluate a five-card hand such as `"As Kd Qh Jc Ts"`.
pub fn evaluate_str(input: &str) -> Result<Evaluation, EvalError> {
    let hand: Hand = input.parse()?;
    Ok(evaluate(&hand))
}

/// Compare two hands. `Equal` means a split pot.
///
/// ```
/// use algo_toolkit::evaluator::compare;
/// use algo_toolkit::hand::Hand;
/// use std::cmp::Ordering;
///
/// let sf: Hand = "5h 6h 7h 8h 9h".parse().unwrap();
/// let quads: Hand = "Ks Kh Kd Kc 2s".parse().unwrap();
/// assert_eq!(compare(&sf, &quads), Ordering::Greater);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    evaluate(a).cmp(&evaluate(b))
}

/// Best five-card evaluation among 5 to 7 distinct cards.
///
/// Every failure is an invalid-hand error. A duplicate card is reported as
/// [`EvalError::InvalidHand`] wrapping [`HandError::DuplicateCard`], the same
/// error [`Hand::try_new`] gives. A pool too small or too large to choose five
/// cards from is [`EvalError::NotEnoughCards`] or [`EvalError::TooManyCards`];
/// these carry the pool size in place of [`HandError::WrongCardCount`], which
/// only applies to exactly five.
pub fn evaluate_best(cards: &[Card]) -> Result<Evaluation, EvalError> {
    use combinations::Combinations;

    if cards.len() < HAND_SIZE {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }
    if cards.len() > MAX_POOL {
        return Err(EvalError::TooManyCards(cards.len()));
    }
    if let Some(card) = crate::hand::first_duplicate(cards) {
        return Err(HandError::DuplicateCard(card).into());
    }

    let best = Combinations::new(cards.len())
        .map(|idx| evaluate_five(&idx.map(|i| cards[i])))
        .max();
    best.ok_or(EvalError::NotEnoughCards(cards.len()))
}

/// Indices of every hand tied for the best key. Empty input gives no winners.
///
/// ```
/// use algo_toolkit::evaluator::winners;
/// use algo_toolkit::hand::Hand;
///
/// let hands: Vec<Hand> = ["As Kd 9h 7c 2s", "Ad Ks 9c 7h 2d", "Qs Qh 3d 4c 5s"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(winners(&hands), vec![2]);
/// assert_eq!(winners(&hands[..2]), vec![0, 1]);
/// ```
pub fn winners(hands: &[Hand]) -> Vec<usize> {
    let keys: Vec<HandKey> = hands.iter().map(|h| evaluate(h).key).collect();
    let Some(best) = keys.iter().max() else {
        return Vec::new();
    };
    keys.iter().enumerate().filter(|(_, k)| *k == best).map(|(i, _)| i).collect()
}
