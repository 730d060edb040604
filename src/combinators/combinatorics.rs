//! Combinatorial generators over a materialized copy of upstream.
//!
//! Both adapters drive upstream to completion first, then walk an index array.
//! Every yielded arrangement is a fresh `Vec`.

use crate::Seq;

/// `k`-combinations in lexicographic index order. See [`Seq::combinations`].
pub struct Combinations<S> {
    inner: S,
    k: usize,
}

impl<S> Combinations<S> {
    pub(crate) fn new(inner: S, k: usize) -> Self {
        Self { inner, k }
    }
}

impl<S> Seq for Combinations<S>
where
    S: Seq,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(Vec<S::Item>) -> bool,
    {
        let k = self.k;
        let pool = (&mut self.inner).to_vec();
        let n = pool.len();
        if k == 0 || k > n {
            return;
        }

        let mut idx: Vec<usize> = (0..k).collect();
        loop {
            if !consumer(idx.iter().map(|&i| pool[i].clone()).collect()) {
                return;
            }
            // Rightmost position that can still advance.
            let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
                return;
            };
            idx[i] += 1;
            for j in i + 1..k {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }
}

/// Full-length permutations in Heap's order. See [`Seq::permutations`].
pub struct Permutations<S> {
    inner: S,
}

impl<S> Permutations<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Seq for Permutations<S>
where
    S: Seq,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(Vec<S::Item>) -> bool,
    {
        let mut arr = (&mut self.inner).to_vec();
        let n = arr.len();
        if n == 0 || !consumer(arr.clone()) {
            return;
        }

        let mut counters = vec![0usize; n];
        let mut i = 1;
        while i < n {
            if counters[i] < i {
                if i % 2 == 0 {
                    arr.swap(0, i);
                } else {
                    arr.swap(counters[i], i);
                }
                if !consumer(arr.clone()) {
                    return;
                }
                counters[i] += 1;
                i = 1;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }
    }
}
