use super::hand_analysis::HandAnalysis;
use crate::evaluator::HandKey;

/// Strategy pattern: each category detector recognises its category and builds the key.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        if !analysis.suit_info.is_flush() {
            return None;
        }
        analysis.straight_info.top_rank.map(|top| HandKey::StraightFlush { top })
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        if analysis.rank_groups.shape() != [4, 1] {
            return None;
        }
        let quad = analysis.rank_groups.quad()?;
        let kicker = *analysis.rank_groups.kickers().first()?;
        Some(HandKey::FourOfAKind { quad, kicker })
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        if analysis.rank_groups.shape() != [3, 2] {
            return None;
        }
        let trips = analysis.rank_groups.trips()?;
        let pair = *analysis.rank_groups.pairs().first()?;
        Some(HandKey::FullHouse { trips, pair })
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        analysis.suit_info.is_flush().then_some(HandKey::Flush { ranks: analysis.ranks })
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        analysis.straight_info.top_rank.map(|top| HandKey::Straight { top })
    }
}

/// Three of a Kind: Three cards of the same rank, two unmatched kickers
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        if analysis.rank_groups.shape() != [3, 1, 1] {
            return None;
        }
        let trips = analysis.rank_groups.trips()?;
        let kickers = analysis.rank_groups.kickers().try_into().ok()?;
        Some(HandKey::ThreeOfAKind { trips, kickers })
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        if analysis.rank_groups.shape() != [2, 2, 1] {
            return None;
        }
        let [high, low]: [_; 2] = analysis.rank_groups.pairs().try_into().ok()?;
        let kicker = *analysis.rank_groups.kickers().first()?;
        Some(HandKey::TwoPair { high, low, kicker })
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        if analysis.rank_groups.shape() != [2, 1, 1, 1] {
            return None;
        }
        let [pair]: [_; 1] = analysis.rank_groups.pairs().try_into().ok()?;
        let kickers = analysis.rank_groups.kickers().try_into().ok()?;
        Some(HandKey::OnePair { pair, kickers })
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandKey> {
        Some(HandKey::HighCard { ranks: analysis.ranks })
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
