use crate::{Seq, Seq2};

/// Concatenation of two sequences. See [`Seq::chain`] and [`Seq2::chain`].
///
/// The second sequence is never started if the consumer stopped during the first.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(A::Item) -> bool,
    {
        let mut stopped = false;
        self.first.drive(|x| {
            stopped = !consumer(x);
            !stopped
        });
        if !stopped {
            self.second.drive(consumer);
        }
    }
}

impl<A, B> Seq2 for Chain<A, B>
where
    A: Seq2,
    B: Seq2<Key = A::Key, Value = A::Value>,
{
    type Key = A::Key;
    type Value = A::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(A::Key, A::Value) -> bool,
    {
        let mut stopped = false;
        self.first.drive(|k, v| {
            stopped = !consumer(k, v);
            !stopped
        });
        if !stopped {
            self.second.drive(consumer);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;

    #[test]
    fn test_chain_three() {
        let all = from_iter(vec![1, 2])
            .chain(from_iter(vec![3, 4]))
            .chain(once(5))
            .to_vec();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_chain_with_empty_sides() {
        assert_eq!(empty().chain(from_iter(vec![1])).to_vec(), vec![1]);
        assert_eq!(from_iter(vec![1]).chain(empty()).to_vec(), vec![1]);
        assert!(empty::<u8>().chain(empty()).to_vec().is_empty());
    }

    #[test]
    fn test_stop_in_first_never_starts_second() {
        let started = Cell::new(false);
        let second = from_fn(|y: &mut dyn FnMut(i32) -> bool| {
            started.set(true);
            let _ = y(99);
        });

        let mut seen = Vec::new();
        from_iter(vec![1, 2, 3]).chain(second).drive(|x| {
            seen.push(x);
            x != 2
        });

        assert_eq!(seen, vec![1, 2]);
        assert!(!started.get());
    }
}
