use proptest::prelude::*;

use crate::{Matcher, Quantifier, Shape, Shaped};

/// A [`Shape`] whose sequences close with a freshly drawn value.
///
/// This `struct` is created by [`strategy::ends_with()`]. See its
/// documentation for more.
///
/// [`strategy::ends_with()`]: crate::strategy::ends_with
#[derive(Debug, Clone)]
pub struct EndsWith<V> {
    values: V,
}

impl<V> EndsWith<V> {
    pub(crate) fn new(values: V) -> Self {
        Self { values }
    }
}

impl<V> Shape<V::Value> for EndsWith<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    fn quantifier(&self) -> Quantifier {
        Quantifier::Every
    }

    fn apply(&self, sample: Vec<V::Value>, _matcher: &Matcher<V::Value>) -> Shaped<V::Value> {
        let seqs = (self.values.clone(), any::<bool>()).prop_map(move |(tail, keep_empty)| {
            // An empty sequence satisfies the property on its own;
            // sometimes leave it be.
            if sample.is_empty() && keep_empty {
                return Vec::new();
            }

            let mut out = sample.clone();
            out.push(tail);
            out
        });

        Shaped::whole(seqs)
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::{eq, every, strategy};

    proptest! {
        #[test]
        fn sequences_close_with_the_drawn_value(
            seq in every(
                propvec(0..100_i32, ..6),
                eq(1_000).leads_to(strategy::ends_with(Just(1_000))),
            )
        ) {
            sequences_close_with_the_drawn_value_impl(seq)?;
        }
    }

    fn sequences_close_with_the_drawn_value_impl(seq: Vec<i32>) -> TestCaseResult {
        if let Some((&last, rest)) = seq.split_last() {
            prop_assert_eq!(last, 1_000);
            prop_assert!(rest.iter().all(|&x| (0..100).contains(&x)));
        }
        Ok(())
    }
}
