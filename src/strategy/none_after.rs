use proptest::collection::vec as propvec;
use proptest::prelude::*;

use crate::{Matcher, Quantifier, Shape, Shaped};

/// How long the clean tail after the cut may be.
const MAX_CLEAN_TAIL: usize = 8;

/// A [`Shape`] whose sequences never match again after the first match.
///
/// This `struct` is created by [`strategy::none_after()`]. See its
/// documentation for more.
///
/// [`strategy::none_after()`]: crate::strategy::none_after
#[derive(Debug, Clone)]
pub struct NoneAfter<V> {
    elements: V,
}

impl<V> NoneAfter<V> {
    pub(crate) fn new(elements: V) -> Self {
        Self { elements }
    }
}

impl<V> Shape<V::Value> for NoneAfter<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    fn quantifier(&self) -> Quantifier {
        Quantifier::ForAll
    }

    fn apply(&self, sample: Vec<V::Value>, matcher: &Matcher<V::Value>) -> Shaped<V::Value> {
        let Some(at) = sample.iter().position(|element| matcher.test(element)) else {
            return Shaped::fixed(sample);
        };

        let mut prefix = sample;
        prefix.truncate(at + 1);

        let matcher = matcher.clone();
        let clean = self
            .elements
            .clone()
            .prop_filter("the tail element matched the predicate", move |element| {
                !matcher.test(element)
            });

        Shaped::split(Just(prefix), propvec(clean, ..=MAX_CLEAN_TAIL))
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
        fn at_most_one_match_survives(
            seq in for_all(
                propvec(0..100_i32, ..8),
                eq(TARGET).leads_to(strategy::none_after(0..100_i32)),
            )
        ) {
            at_most_one_match_survives_impl(seq)?;
        }
    }

    fn at_most_one_match_survives_impl(seq: Vec<i32>) -> TestCaseResult {
        prop_assert!(seq.iter().filter(|&&x| x == TARGET).count() <= 1);
        prop_assert!(seq.iter().all(|&x| (0..100).contains(&x)));
        Ok(())
    }
}
