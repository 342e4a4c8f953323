use std::fmt::Debug;

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

use super::{Matcher, Quantifier};

/// A boxed strategy producing whole sequences.
pub type SeqStrategy<T> = BoxedStrategy<Vec<T>>;

/// A generator-side answer to matched elements.
///
/// A shape takes one drawn base sequence and reshapes it around the
/// positions its matcher fires at, the way the same-named iterator adaptor
/// would have reshaped an observed sequence.
pub trait Shape<T> {
    /// The quantifier this shape is declared for.
    fn quantifier(&self) -> Quantifier;

    /// Reshapes one drawn sample around the positions `matcher` accepts.
    fn apply(&self, sample: Vec<T>, matcher: &Matcher<T>) -> Shaped<T>;
}

/// A reshaped sample, possibly split into independently drawn parts.
pub enum Shaped<T> {
    /// One strategy for the entire sequence.
    Whole(SeqStrategy<T>),
    /// A prefix and a suffix drawn separately, then concatenated.
    Split {
        prefix: SeqStrategy<T>,
        suffix: SeqStrategy<T>,
    },
}

impl<T> Shaped<T> {
    /// Wraps a strategy for the whole sequence.
    pub fn whole(seqs: impl Strategy<Value = Vec<T>> + 'static) -> Self {
        Self::Whole(seqs.boxed())
    }

    /// The degenerate reshaping: exactly `sample`, unchanged.
    pub fn fixed(sample: Vec<T>) -> Self
    where
        T: Clone + Debug + 'static,
    {
        Self::Whole(Just(sample).boxed())
    }

    /// A prefix and a suffix drawn independently.
    pub fn split(
        prefix: impl Strategy<Value = Vec<T>> + 'static,
        suffix: impl Strategy<Value = Vec<T>> + 'static,
    ) -> Self {
        Self::Split {
            prefix: prefix.boxed(),
            suffix: suffix.boxed(),
        }
    }

    /// Flattens into one strategy for the final sequence.
    pub fn into_strategy(self) -> SeqStrategy<T>
    where
        T: Clone + Debug + 'static,
    {
        match self {
            Self::Whole(seqs) => seqs,
            Self::Split { prefix, suffix } => (prefix, suffix)
                .prop_map(|(mut out, tail)| {
                    out.extend(tail);
                    out
                })
                .boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    use crate::Shaped;

    #[test]
    fn whole_passes_the_strategy_through() {
        let seqs = Shaped::whole(Just(vec![1, 2, 3])).into_strategy();

        let mut runner = TestRunner::deterministic();
        let seq = seqs.new_tree(&mut runner).unwrap().current();
        assert_eq!(seq, [1, 2, 3]);
    }

    #[test]
    fn split_concatenates_prefix_then_suffix() {
        let seqs = Shaped::split(Just(vec![1, 2]), Just(vec![3])).into_strategy();

        let mut runner = TestRunner::deterministic();
        let seq = seqs.new_tree(&mut runner).unwrap().current();
        assert_eq!(seq, [1, 2, 3]);
    }

    #[test]
    fn fixed_reproduces_the_sample() {
        let seqs = Shaped::fixed(vec![4, 5]).into_strategy();

        let mut runner = TestRunner::deterministic();
        let seq = seqs.new_tree(&mut runner).unwrap().current();
        assert_eq!(seq, [4, 5]);
    }
}
