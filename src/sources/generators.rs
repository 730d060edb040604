use std::marker::PhantomData;

use crate::Seq;

/// Sequence with no elements. See [`empty`].
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Yields nothing.
pub fn empty<T>() -> Empty<T> {
    Empty { _marker: PhantomData }
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn drive<C>(&mut self, _consumer: C)
    where
        C: FnMut(T) -> bool,
    {
    }
}

/// Single element, cloned per drive. See [`once`].
#[derive(Clone, Debug)]
pub struct Once<T> {
    value: T,
}

/// Yields `value` exactly once per drive.
pub fn once<T: Clone>(value: T) -> Once<T> {
    Once { value }
}

impl<T: Clone> Seq for Once<T> {
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        let _ = consumer(self.value.clone());
    }
}

/// Single lazily-produced element. See [`once_with`].
pub struct OnceWith<F> {
    make: F,
}

/// Yields the result of `make()` once per drive; `make` runs only when driven.
pub fn once_with<T, F>(make: F) -> OnceWith<F>
where
    F: FnMut() -> T,
{
    OnceWith { make }
}

impl<T, F> Seq for OnceWith<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        let _ = consumer((self.make)());
    }
}

/// Endless clones of one value. See [`repeat`].
#[derive(Clone, Debug)]
pub struct Repeat<T> {
    value: T,
}

/// Yields clones of `value` until the consumer stops.
///
/// Unbounded: combine with `take`, `take_while` or a stopping reducer.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        while consumer(self.value.clone()) {}
    }
}

/// Endless generated values. See [`repeat_with`].
pub struct RepeatWith<F> {
    make: F,
}

/// Yields `make()` until the consumer stops. Unbounded like [`repeat`].
pub fn repeat_with<T, F>(make: F) -> RepeatWith<F>
where
    F: FnMut() -> T,
{
    RepeatWith { make }
}

impl<T, F> Seq for RepeatWith<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        while consumer((self.make)()) {}
    }
}

/// Numeric types an [`Iota`] can count with.
///
/// `forward` returns `None` instead of overflowing, which ends the progression.
pub trait Step: Copy + PartialOrd {
    /// The additive identity.
    const ZERO: Self;

    /// `self + step`, or `None` when the result is not representable.
    fn forward(self, step: Self) -> Option<Self>;
}

macro_rules! step_int {
    ($($t:ty)*) => {$(
        impl Step for $t {
            const ZERO: Self = 0;

            fn forward(self, step: Self) -> Option<Self> {
                self.checked_add(step)
            }
        }
    )*};
}

macro_rules! step_float {
    ($($t:ty)*) => {$(
        impl Step for $t {
            const ZERO: Self = 0.0;

            fn forward(self, step: Self) -> Option<Self> {
                Some(self + step)
            }
        }
    )*};
}

step_int!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
step_float!(f32 f64);

/// Arithmetic progression. See [`iota`] and [`iota_inclusive`].
#[derive(Clone, Copy, Debug)]
pub struct Iota<T> {
    start: T,
    end: T,
    step: T,
    inclusive: bool,
}

/// Half-open progression `start, start + step, ...` stopping before `end`.
///
/// A negative `step` counts down toward `end`. A zero step yields nothing, as
/// does a step that points away from `end`. A step that would leave the
/// type's range ends the progression.
///
/// ```rust
/// use seqflow::prelude::*;
///
/// assert_eq!(iota(1, 10, 2).to_vec(), vec![1, 3, 5, 7, 9]);
/// assert_eq!(iota(5, 1, -1).to_vec(), vec![5, 4, 3, 2]);
/// assert_eq!(iota(250u8, 255, 2).to_vec(), vec![250, 252, 254]);
/// ```
pub fn iota<T: Step>(start: T, end: T, step: T) -> Iota<T> {
    Iota {
        start,
        end,
        step,
        inclusive: false,
    }
}

/// Like [`iota`] but includes `end` when the progression lands on it.
pub fn iota_inclusive<T: Step>(start: T, end: T, step: T) -> Iota<T> {
    Iota {
        start,
        end,
        step,
        inclusive: true,
    }
}

impl<T: Step> Iota<T> {
    fn in_range(&self, cur: T, ascending: bool) -> bool {
        match (ascending, self.inclusive) {
            (true, false) => cur < self.end,
            (true, true) => cur <= self.end,
            (false, false) => cur > self.end,
            (false, true) => cur >= self.end,
        }
    }
}

impl<T: Step> Seq for Iota<T> {
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        if self.step == T::ZERO {
            return;
        }
        let ascending = self.step > T::ZERO;

        let mut cur = self.start;
        while self.in_range(cur, ascending) {
            if !consumer(cur) {
                return;
            }
            match cur.forward(self.step) {
                Some(next) => cur = next,
                None => return,
            }
        }
    }
}
