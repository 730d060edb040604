//! # Closure-backed sequences
//!
//! [`from_fn`] turns a closure of shape `FnMut(&mut dyn FnMut(T) -> bool)` into a
//! [`Seq`]. The closure is the producer: it calls the yield callback for each
//! element and must return as soon as the callback answers `false`.
//!
//! ## Example
//! ```rust
//! use seqflow::{Seq, from_fn};
//!
//! let evens = from_fn(|y: &mut dyn FnMut(u32) -> bool| {
//!     for n in (0..10).step_by(2) {
//!         if !y(n) {
//!             return;
//!         }
//!     }
//! });
//! assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
//! ```

use std::marker::PhantomData;

use super::{Seq, Seq2};

/// Sequence produced by a closure. See [`from_fn`].
pub struct FromFn<T, F> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

/// Wraps a producer closure as a [`Seq`].
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: FnMut(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

impl<T, F> Seq for FromFn<T, F>
where
    F: FnMut(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        (self.f)(&mut consumer)
    }
}

/// Paired sequence produced by a closure. See [`from_fn2`].
pub struct FromFn2<K, V, F> {
    f: F,
    _pair: PhantomData<fn() -> (K, V)>,
}

/// Wraps a producer closure as a [`Seq2`].
pub fn from_fn2<K, V, F>(f: F) -> FromFn2<K, V, F>
where
    F: FnMut(&mut dyn FnMut(K, V) -> bool),
{
    FromFn2 {
        f,
        _pair: PhantomData,
    }
}

impl<K, V, F> Seq2 for FromFn2<K, V, F>
where
    F: FnMut(&mut dyn FnMut(K, V) -> bool),
{
    type Key = K;
    type Value = V;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(K, V) -> bool,
    {
        (self.f)(&mut consumer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_when_consumer_returns_false() {
        let mut produced = 0;
        let mut seq = from_fn(|y: &mut dyn FnMut(i32) -> bool| {
            for i in 0..10 {
                produced += 1;
                if !y(i) {
                    return;
                }
            }
        });

        let mut seen = Vec::new();
        seq.drive(|x| {
            seen.push(x);
            x < 2
        });
        drop(seq);

        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(produced, 3);
    }

    #[test]
    fn test_each_drive_is_a_fresh_traversal() {
        let mut seq = from_fn(|y: &mut dyn FnMut(char) -> bool| {
            let _ = y('a') && y('b');
        });
        assert_eq!((&mut seq).to_vec(), vec!['a', 'b']);
        assert_eq!(seq.to_vec(), vec!['a', 'b']);
    }

    #[test]
    fn test_paired_closure() {
        let seq = from_fn2(|y: &mut dyn FnMut(&'static str, u8) -> bool| {
            let _ = y("x", 1) && y("y", 2);
        });
        assert_eq!(seq.to_pairs(), vec![("x", 1), ("y", 2)]);
    }
}
