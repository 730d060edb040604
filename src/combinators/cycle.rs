use crate::Seq;

/// Endless re-drives of a restartable sequence. See [`Seq::cycle`].
///
/// A pass that yields nothing ends the cycle, so an empty upstream terminates
/// immediately instead of spinning.
pub struct Cycle<S> {
    inner: S,
}

impl<S> Cycle<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Seq> Seq for Cycle<S> {
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        loop {
            let mut yielded = false;
            let mut stopped = false;
            self.inner.drive(|x| {
                yielded = true;
                stopped = !consumer(x);
                !stopped
            });
            if stopped || !yielded {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_cycle_with_take() {
        let source = vec![1, 2, 3];
        for k in 0..10 {
            let got = from_iter(source.clone()).cycle().take(k).to_vec();
            let want: Vec<i32> = (0..k).map(|i| source[i % source.len()]).collect();
            assert_eq!(got, want, "k = {k}");
        }
    }

    #[test]
    fn test_cycle_empty_terminates() {
        assert!(empty::<i32>().cycle().to_vec().is_empty());
        assert!(from_iter(vec![1, 2]).filter(|_| false).cycle().to_vec().is_empty());
    }

    #[test]
    fn test_cycle_find_stops() {
        let hit = from_iter(vec!['a', 'b']).cycle().enumerate(0).find(|i, _| *i == 5);
        assert_eq!(hit, Some((5, 'b')));
    }
}
