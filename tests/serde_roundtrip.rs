#![cfg(feature = "serde")]

use algo_toolkit::cards::{parse_cards, Card, Rank, Suit};
use algo_toolkit::evaluator::{evaluate_str, Category, HandKey};

#[test]
fn cards_survive_json() {
    let cards = parse_cards("As Td 2c 9h").unwrap();
    let json = serde_json::to_string(&cards).unwrap();
    let back: Vec<Card> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cards);

    let rank: Rank = serde_json::from_str(&serde_json::to_string(&Rank::Queen).unwrap()).unwrap();
    assert_eq!(rank, Rank::Queen);
    let suit: Suit = serde_json::from_str(&serde_json::to_string(&Suit::Hearts).unwrap()).unwrap();
    assert_eq!(suit, Suit::Hearts);
}

#[test]
fn evaluation_keys_survive_json() {
    for input in ["Ah Kh Qh Jh Th", "Js Jh Jd Ac As", "9s 9h 4d 4c 2s", "Ah Kc 9s 5d 3s"] {
        let e = evaluate_str(input).unwrap();
        let key: HandKey = serde_json::from_str(&serde_json::to_string(&e.key).unwrap()).unwrap();
        assert_eq!(key, e.key);
        assert_eq!(key.packed(), e.key.packed());
        let category: Category =
            serde_json::from_str(&serde_json::to_string(&e.category).unwrap()).unwrap();
        assert_eq!(category, e.category);
    }
}
