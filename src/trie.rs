//! Prefix tree over `char` sequences with ordered completion.
//!
//! Children are kept in a `BTreeMap`, so a depth-first walk visits words in
//! ascending lexicographic order without sorting. Removal prunes every branch
//! left without a word, so apart from the root each node either ends a word
//! or leads to one.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    children: BTreeMap<char, Node>,
    terminal: bool,
}

/// A set of words supporting prefix queries.
///
/// Keys are compared by exact `char` identity; normalise case before inserting
/// if case-insensitive matching is wanted.
///
/// ```
/// use algo_toolkit::trie::Trie;
///
/// let mut trie = Trie::new();
/// for w in ["car", "cart", "carbon", "dog"] {
///     trie.insert(w);
/// }
/// assert_eq!(trie.complete("car"), vec!["car", "carbon", "cart"]);
/// assert_eq!(trie.complete("d"), vec!["dog"]);
/// assert!(trie.complete("x").is_empty());
///
/// assert!(trie.remove("cart"));
/// assert!(!trie.contains("cart"));
/// assert!(trie.starts_with("carb"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Insert a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.terminal)
    }

    /// True if any stored word begins with `prefix`. The empty prefix matches any word.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some_and(|node| node.terminal || !node.children.is_empty())
    }

    /// Every stored word beginning with `prefix`, in ascending order.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.complete_limit(prefix, usize::MAX)
    }

    /// The first `limit` words of [`Trie::complete`].
    pub fn complete_limit(&self, prefix: &str, limit: usize) -> Vec<String> {
        match self.find(prefix) {
            Some(start) => words_below(start, prefix.to_string()).take(limit).collect(),
            None => Vec::new(),
        }
    }

    /// All stored words in ascending order, produced lazily.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        words_below(&self.root, String::new())
    }

    /// Remove a word, pruning branches that no longer lead to any word.
    /// Returns `false` if the word was not present.
    pub fn remove(&mut self, word: &str) -> bool {
        let Some(end) = self.find(word) else {
            return false;
        };
        if !end.terminal {
            return false;
        }

        if word.is_empty() || !end.children.is_empty() {
            // Longer words still pass through; only the mark goes.
            if let Some(node) = self.find_mut(word) {
                node.terminal = false;
            }
            self.len -= 1;
            log::debug!("removed {word:?} without pruning");
            return true;
        }

        // Deepest node on the path that must survive: the root, a word end, or a fork.
        let chars: Vec<char> = word.chars().collect();
        let mut cut = 0;
        let mut node = &self.root;
        for (depth, c) in chars.iter().enumerate() {
            if node.terminal || node.children.len() > 1 {
                cut = depth;
            }
            match node.children.get(c) {
                Some(next) => node = next,
                None => return false,
            }
        }

        let mut node = &mut self.root;
        for c in &chars[..cut] {
            node = match node.children.get_mut(c) {
                Some(next) => next,
                None => return false,
            };
        }
        node.children.remove(&chars[cut]);
        self.len -= 1;
        log::debug!("removed {word:?}, pruned {} nodes", chars.len() - cut);
        true
    }

    fn find(&self, prefix: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    fn find_mut(&mut self, prefix: &str) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for c in prefix.chars() {
            node = node.children.get_mut(&c)?;
        }
        Some(node)
    }
}

/// Pre-order walk yielding every word at or below `start`. Children are pushed
/// in reverse so the smallest pops first.
fn words_below(start: &Node, prefix: String) -> impl Iterator<Item = String> + '_ {
    let mut stack = vec![(start, prefix)];
    std::iter::from_fn(move || {
        while let Some((node, word)) = stack.pop() {
            for (&c, child) in node.children.iter().rev() {
                let mut next = String::with_capacity(word.len() + c.len_utf8());
                next.push_str(&word);
                next.push(c);
                stack.push((child, next));
            }
            if node.terminal {
                return Some(word);
            }
        }
        None
    })
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(words: &[&str]) -> Trie {
        words.iter().collect()
    }

    #[test]
    fn empty_trie() {
        let t = Trie::new();
        assert!(t.is_empty());
        assert!(!t.contains(""));
        assert!(!t.starts_with(""));
        assert!(t.complete("").is_empty());
        assert_eq!(t.node_count(), 1);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut t = Trie::new();
        assert!(t.insert("tea"));
        assert!(!t.insert("tea"));
        assert_eq!(t.len(), 1);
        assert_eq!(t.complete(""), vec!["tea"]);
    }

    #[test]
    fn empty_word_lives_on_root() {
        let mut t = trie(&["a"]);
        assert!(t.insert(""));
        assert!(t.contains(""));
        assert_eq!(t.complete(""), vec!["", "a"]);
        assert!(t.remove(""));
        assert!(!t.contains(""));
        assert_eq!(t.complete(""), vec!["a"]);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn prefix_is_not_membership() {
        let t = trie(&["carbon"]);
        assert!(!t.contains("car"));
        assert!(t.starts_with("car"));
        assert!(t.starts_with("carbon"));
        assert!(!t.starts_with("carbons"));
    }

    #[test]
    fn case_is_preserved() {
        let t = trie(&["Apple", "apple"]);
        assert_eq!(t.complete(""), vec!["Apple", "apple"]);
        assert_eq!(t.complete("a"), vec!["apple"]);
        assert!(!t.contains("APPLE"));
    }

    #[test]
    fn non_ascii_words() {
        let t = trie(&["naïve", "nav", "日本", "日本語"]);
        assert_eq!(t.complete("na"), vec!["nav", "naïve"]);
        assert_eq!(t.complete("日"), vec!["日本", "日本語"]);
    }

    #[test]
    fn complete_limit_stops_early() {
        let t = trie(&["ab", "a", "abc", "b", "ac"]);
        assert_eq!(t.complete_limit("a", 2), vec!["a", "ab"]);
        assert!(t.complete_limit("a", 0).is_empty());
        assert_eq!(t.complete_limit("", 10), vec!["a", "ab", "abc", "ac", "b"]);
    }

    #[test]
    fn remove_prunes_dead_branches() {
        let mut t = trie(&["car", "cart", "carbon"]);
        let before = t.node_count();
        assert!(t.remove("carbon"));
        // "bon" nodes are gone, the fork at "car" survives
        assert_eq!(t.node_count(), before - 3);
        assert_eq!(t.complete("car"), vec!["car", "cart"]);

        assert!(t.remove("car"));
        assert_eq!(t.complete(""), vec!["cart"]);
        assert!(t.remove("cart"));
        assert_eq!(t.node_count(), 1);
        assert!(t.is_empty());
    }

    #[test]
    fn remove_missing_word_is_noop() {
        let mut t = trie(&["cart"]);
        assert!(!t.remove("car"));
        assert!(!t.remove("carts"));
        assert!(!t.remove("dog"));
        assert_eq!(t.len(), 1);
        assert!(t.contains("cart"));
    }

    #[test]
    fn clear_and_iter() {
        let mut t = trie(&["b", "a", "c"]);
        assert_eq!(t.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t, Trie::new());
    }

    #[test]
    fn iter_yields_words_on_demand() {
        let t = trie(&["car", "cart", "care", "dog", "do"]);
        let mut words = t.iter();
        assert_eq!(words.next().as_deref(), Some("car"));
        assert_eq!(words.next().as_deref(), Some("care"));
        assert_eq!(t.iter().skip(3).collect::<Vec<_>>(), vec!["do", "dog"]);
        assert_eq!(Trie::new().iter().next(), None);
    }
}
