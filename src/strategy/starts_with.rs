use proptest::prelude::*;

use crate::{Matcher, Quantifier, Shape, Shaped};

/// A [`Shape`] whose sequences open with a freshly drawn value.
///
/// This `struct` is created by [`strategy::starts_with()`]. See its
/// documentation for more.
///
/// [`strategy::starts_with()`]: crate::strategy::starts_with
#[derive(Debug, Clone)]
pub struct StartsWith<V> {
    values: V,
}

impl<V> StartsWith<V> {
    pub(crate) fn new(values: V) -> Self {
        Self { values }
    }
}

impl<V> Shape<V::Value> for StartsWith<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    fn quantifier(&self) -> Quantifier {
        Quantifier::Every
    }

    fn apply(&self, sample: Vec<V::Value>, _matcher: &Matcher<V::Value>) -> Shaped<V::Value> {
        let seqs = (self.values.clone(), any::<bool>()).prop_map(move |(lead, keep_empty)| {
            // An empty sequence satisfies the property on its own;
            // sometimes leave it be.
            if sample.is_empty() && keep_empty {
                return Vec::new();
            }

            let mut out = Vec::with_capacity(sample.len() + 1);
            out.push(lead);
            out.extend(sample.iter().cloned());
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
        fn sequences_open_with_the_drawn_value(
            seq in every(
                propvec(0..100_i32, ..6),
                eq(1_000).leads_to(strategy::starts_with(Just(1_000))),
            )
        ) {
            sequences_open_with_the_drawn_value_impl(seq)?;
        }
    }

    fn sequences_open_with_the_drawn_value_impl(seq: Vec<i32>) -> TestCaseResult {
        if let Some((&first, rest)) = seq.split_first() {
            prop_assert_eq!(first, 1_000);
            prop_assert!(rest.iter().all(|&x| (0..100).contains(&x)));
        }
        Ok(())
    }
}
