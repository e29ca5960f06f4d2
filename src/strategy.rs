use crate::avl_tree::AvlSet;
use crate::bst::BstSet;
use crate::ordered_set::OrderedSet;
use crate::treap::TreapSet;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The balancing strategies offered by this crate.
///
/// # Examples
/// ```
/// use search_trees::{OrderedSet, Strategy};
///
/// let strategy: Strategy = "avl".parse().unwrap();
/// let mut set = strategy.build();
/// for key in 1..=5 {
///     set.insert(key);
/// }
/// assert_eq!(set.depth(), 3);
/// assert_eq!(strategy.to_string(), "avl");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Unbalanced binary search tree.
    Bst,
    /// Height-balanced avl tree.
    Avl,
    /// Treap with random priorities.
    Treap,
}

impl Strategy {
    /// Every strategy, in order of increasing sophistication.
    pub const ALL: [Strategy; 3] = [Strategy::Bst, Strategy::Avl, Strategy::Treap];

    /// Returns the lowercase name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bst => "bst",
            Strategy::Avl => "avl",
            Strategy::Treap => "treap",
        }
    }

    /// Constructs an empty set using this strategy. A treap draws its priorities from a randomly
    /// seeded generator.
    pub fn build<T>(self) -> Box<dyn OrderedSet<T>>
    where
        T: Ord + 'static,
    {
        match self {
            Strategy::Bst => Box::new(BstSet::new()),
            Strategy::Avl => Box::new(AvlSet::new()),
            Strategy::Treap => Box::new(TreapSet::new()),
        }
    }

    /// Constructs an empty set using this strategy. A treap draws its priorities from a generator
    /// seeded with `seed`; the other strategies are deterministic and ignore it.
    pub fn build_seeded<T>(self, seed: u64) -> Box<dyn OrderedSet<T>>
    where
        T: Ord + 'static,
    {
        match self {
            Strategy::Treap => Box::new(TreapSet::with_seed(seed)),
            strategy => strategy.build(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bst" => Ok(Strategy::Bst),
            "avl" | "avl_tree" => Ok(Strategy::Avl),
            "treap" => Ok(Strategy::Treap),
            _ => Err(ParseStrategyError {
                input: s.to_string(),
            }),
        }
    }
}

/// An error returned when parsing a `Strategy` from an unknown name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError {
    input: String,
}

impl ParseStrategyError {
    /// Returns the string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown strategy `{}`, expected one of `bst`, `avl`, `treap`",
            self.input,
        )
    }
}

impl Error for ParseStrategyError {}

#[cfg(test)]
mod tests {
    use super::Strategy;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_parse() {
        assert_eq!("bst".parse(), Ok(Strategy::Bst));
        assert_eq!("AVL".parse(), Ok(Strategy::Avl));
        assert_eq!("avl_tree".parse(), Ok(Strategy::Avl));
        assert_eq!("Treap".parse(), Ok(Strategy::Treap));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "splay".parse::<Strategy>().unwrap_err();
        assert_eq!(err.input(), "splay");
        assert_eq!(
            err.to_string(),
            "unknown strategy `splay`, expected one of `bst`, `avl`, `treap`",
        );
    }

    #[test]
    fn test_display_round_trip() {
        for strategy in &Strategy::ALL {
            assert_eq!(strategy.to_string().parse(), Ok(*strategy));
        }
    }

    #[test]
    fn test_build() {
        for strategy in &Strategy::ALL {
            let mut set = strategy.build_seeded(11);
            for key in &[5, 3, 8, 3, 1] {
                set.insert(*key);
            }
            assert_eq!(set.len(), 4);
            assert_eq!(set.keys().cloned().collect::<Vec<u32>>(), vec![1, 3, 5, 8]);
            assert_eq!(set.min(), Some(&1));
            assert_eq!(set.max(), Some(&8));
            set.clear();
            assert!(set.is_empty());
        }
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &Strategy::Treap,
            &[Token::UnitVariant {
                name: "Strategy",
                variant: "treap",
            }],
        );
    }
}
