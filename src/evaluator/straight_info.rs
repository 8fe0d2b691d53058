use crate::cards::Rank;

/// Whether a hand forms a straight, and its top rank if so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    /// Five for the wheel (A-2-3-4-5).
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from ranks sorted in descending order.
    pub fn detect(ranks_desc: &[Rank; 5]) -> Self {
        let is_consecutive =
            ranks_desc.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if is_consecutive {
            return StraightInfo { top_rank: Some(ranks_desc[0]) };
        }

        if *ranks_desc == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        StraightInfo { top_rank: None }
    }

    #[cfg(test)]
    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn test_ace_high_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn test_wheel() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn test_no_wraparound() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Four, Rank::Three, Rank::Two]);
        assert!(!info.is_straight());
    }

    #[test]
    fn test_not_straight_pair() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert!(!info.is_straight());
        assert_eq!(info.top_rank, None);
    }
}
