use std::fmt::{self, Debug};

use itertools::Itertools;
use proptest::prelude::*;

use super::splice::{Placement, splice};
use crate::{Matcher, Quantifier, Shape, Shaped};

/// A [`Shape`] whose sequences answer every match somewhere later on.
///
/// This `struct` is created by [`strategy::eventually()`]. See its
/// documentation for more.
///
/// [`strategy::eventually()`]: crate::strategy::eventually
#[derive(Clone)]
pub struct Eventually<
    V: Strategy,
    M = fn(&<V as Strategy>::Value, <V as Strategy>::Value) -> <V as Strategy>::Value,
> {
    values: V,
    mapper: M,
}

impl<V: Strategy, M> Eventually<V, M> {
    pub(crate) fn new(values: V, mapper: M) -> Self {
        Self { values, mapper }
    }

    /// Replaces how the answer is derived: `mapper` sees the matched
    /// element and the drawn value, and produces what gets inserted.
    pub fn with_mapper<M2>(self, mapper: M2) -> Eventually<V, M2>
    where
        M2: Fn(&V::Value, V::Value) -> V::Value,
    {
        Eventually {
            values: self.values,
            mapper,
        }
    }
}

impl<V, M> Shape<V::Value> for Eventually<V, M>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
    M: Fn(&V::Value, V::Value) -> V::Value + Clone + 'static,
{
    fn quantifier(&self) -> Quantifier {
        Quantifier::ForAll
    }

    fn apply(&self, sample: Vec<V::Value>, matcher: &Matcher<V::Value>) -> Shaped<V::Value> {
        let matches: Vec<_> = sample
            .iter()
            .positions(|element| matcher.test(element))
            .collect();

        Shaped::Whole(splice(
            sample,
            matches,
            Placement::Anywhere,
            self.values.clone(),
            self.mapper.clone(),
        ))
    }
}

impl<V: Strategy + Debug, M> Debug for Eventually<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Eventually")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::{eq, for_all, strategy};

    const TARGET: i32 = 7;

    proptest! {
        #[test]
        fn every_match_is_eventually_answered(
            seq in for_all(
                propvec(0..100_i32, ..8),
                eq(TARGET).leads_to(strategy::eventually(1_000..2_000_i32)),
            )
        ) {
            every_match_is_eventually_answered_impl(seq)?;
        }
    }

    fn every_match_is_eventually_answered_impl(seq: Vec<i32>) -> TestCaseResult {
        let mut matches_seen = 0_usize;
        let mut answers_seen = 0_usize;

        for &element in &seq {
            if element >= 1_000 {
                answers_seen += 1;
                // Each answer sits strictly after its own match.
                prop_assert!(answers_seen <= matches_seen);
            } else if element == TARGET {
                matches_seen += 1;
            }
        }

        prop_assert_eq!(answers_seen, matches_seen);
        Ok(())
    }
}
