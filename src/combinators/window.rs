use std::collections::VecDeque;
use std::mem;

use crate::Seq;

/// Sliding windows of `n` elements, step 1. See [`Seq::windows`].
///
/// The buffer holds exactly the last `n` upstream elements; each yielded window
/// is a fresh `Vec`.
pub struct Windows<S> {
    inner: S,
    n: usize,
}

impl<S> Windows<S> {
    pub(crate) fn new(inner: S, n: usize) -> Self {
        Self { inner, n }
    }
}

impl<S> Seq for Windows<S>
where
    S: Seq,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(Vec<S::Item>) -> bool,
    {
        let n = self.n;
        if n == 0 {
            return;
        }
        let mut buf: VecDeque<S::Item> = VecDeque::with_capacity(n);
        self.inner.drive(|x| {
            if buf.len() == n {
                buf.pop_front();
            }
            buf.push_back(x);
            if buf.len() < n {
                return true;
            }
            consumer(buf.iter().cloned().collect())
        })
    }
}

/// Disjoint chunks of up to `n` elements. See [`Seq::chunks`].
pub struct Chunks<S> {
    inner: S,
    n: usize,
}

impl<S> Chunks<S> {
    pub(crate) fn new(inner: S, n: usize) -> Self {
        Self { inner, n }
    }
}

impl<S: Seq> Seq for Chunks<S> {
    type Item = Vec<S::Item>;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(Vec<S::Item>) -> bool,
    {
        let n = self.n;
        if n == 0 {
            return;
        }
        let mut buf = Vec::with_capacity(n);
        let mut stopped = false;
        self.inner.drive(|x| {
            buf.push(x);
            if buf.len() < n {
                return true;
            }
            let full = mem::replace(&mut buf, Vec::with_capacity(n));
            stopped = !consumer(full);
            !stopped
        });
        if !stopped && !buf.is_empty() {
            let _ = consumer(buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;

    #[test]
    fn test_windows_of_three() {
        let got = from_iter(vec![1, 2, 3, 4, 5]).windows(3).to_vec();
        assert_eq!(got, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
    }

    #[test]
    fn test_windows_count_and_positions() {
        let source: Vec<i32> = (0..9).collect();
        for n in 1..=source.len() {
            let windows = from_iter(source.clone()).windows(n).to_vec();
            assert_eq!(windows.len(), source.len() - n + 1, "n = {n}");
            for (i, w) in windows.iter().enumerate() {
                assert_eq!(w.as_slice(), &source[i..i + n]);
            }
        }
    }

    #[test]
    fn test_windows_degenerate_sizes() {
        assert!(from_iter(vec![1, 2, 3]).windows(0).to_vec().is_empty());
        assert!(from_iter(vec![1, 2, 3]).windows(4).to_vec().is_empty());
        assert!(empty::<i32>().windows(1).to_vec().is_empty());
    }

    #[test]
    fn test_windows_are_independent_copies() {
        let mut windows = from_iter(vec![1, 2, 3, 4]).windows(2).to_vec();
        windows[0][1] = 99;
        assert_eq!(windows[1], vec![2, 3]);
    }

    #[test]
    fn test_windows_early_stop_pulls_no_further() {
        let pulled = Cell::new(0);
        let first = from_iter(vec![1, 2, 3, 4, 5, 6])
            .inspect(|_| pulled.set(pulled.get() + 1))
            .windows(2)
            .take(1)
            .to_vec();
        assert_eq!(first, vec![vec![1, 2]]);
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_chunks_with_short_tail() {
        let got = from_iter(vec![1, 2, 3, 4, 5]).chunks(2).to_vec();
        assert_eq!(got, vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert!(from_iter(vec![1, 2]).chunks(0).to_vec().is_empty());
        assert!(empty::<i32>().chunks(3).to_vec().is_empty());
    }

    #[test]
    fn test_chunks_concatenate_to_source() {
        let source: Vec<i32> = (0..11).collect();
        for n in 1..=12 {
            let joined: Vec<i32> = from_iter(source.clone()).chunks(n).flatten().to_vec();
            assert_eq!(joined, source, "n = {n}");
        }
    }

    #[test]
    fn test_chunks_stop_skips_tail() {
        let mut seen = Vec::new();
        from_iter(vec![1, 2, 3, 4, 5]).chunks(2).drive(|c| {
            seen.push(c);
            false
        });
        assert_eq!(seen, vec![vec![1, 2]]);
    }
}
