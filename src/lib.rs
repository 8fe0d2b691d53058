//! algo-toolkit: small algorithmic cores with tight ordering contracts
//!
//! Goals:
//! - Poker hands ranked into a total order (wheel-aware, split pots are equal keys)
//! - Sliding-window maximum/minimum in amortised O(1) per element
//! - Prefix-set autocomplete with deterministic (ascending) results
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: rank two poker hands
//! ```
//! use algo_toolkit::evaluator::{evaluate, Category};
//! use algo_toolkit::hand::Hand;
//!
//! let wheel: Hand = "As 2h 3d 4c 5s".parse().unwrap();
//! let six_high: Hand = "2s 3h 4d 5c 6s".parse().unwrap();
//!
//! let a = evaluate(&wheel);
//! let b = evaluate(&six_high);
//! assert_eq!(a.category, Category::Straight);
//! assert!(a < b);
//! ```
//!
//! ## Sliding window
//! ```
//! use algo_toolkit::window::window_maximum;
//!
//! let out = window_maximum(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap();
//! assert_eq!(out, vec![3, 3, 5, 5, 6, 7]);
//! ```
//!
//! ## Autocomplete
//! ```
//! use algo_toolkit::trie::Trie;
//!
//! let trie: Trie = ["car", "cart", "carbon", "dog"].into_iter().collect();
//! assert_eq!(trie.complete("ca"), vec!["car", "carbon", "cart"]);
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod trie;
pub mod window;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
