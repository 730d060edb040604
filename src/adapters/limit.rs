use crate::{Seq, Seq2};

/// At most `n` elements. See [`Seq::take`] and [`Seq2::take`].
///
/// The traversal stops right after the `n`-th element is consumed; upstream is
/// never asked for element `n + 1`.
pub struct Take<S> {
    inner: S,
    n: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(inner: S, n: usize) -> Self {
        Self { inner, n }
    }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let n = self.n;
        if n == 0 {
            return;
        }
        let mut taken = 0;
        self.inner.drive(|x| {
            taken += 1;
            consumer(x) && taken < n
        })
    }
}

impl<S: Seq2> Seq2 for Take<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Key, S::Value) -> bool,
    {
        let n = self.n;
        if n == 0 {
            return;
        }
        let mut taken = 0;
        self.inner.drive(|k, v| {
            taken += 1;
            consumer(k, v) && taken < n
        })
    }
}

/// Drops the first `n` elements. See [`Seq::skip`] and [`Seq2::skip`].
pub struct Skip<S> {
    inner: S,
    n: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(inner: S, n: usize) -> Self {
        Self { inner, n }
    }
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let mut remaining = self.n;
        self.inner.drive(|x| {
            if remaining > 0 {
                remaining -= 1;
                return true;
            }
            consumer(x)
        })
    }
}

impl<S: Seq2> Seq2 for Skip<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Key, S::Value) -> bool,
    {
        let mut remaining = self.n;
        self.inner.drive(|k, v| {
            if remaining > 0 {
                remaining -= 1;
                return true;
            }
            consumer(k, v)
        })
    }
}

/// Every `step`-th element. See [`Seq::step_by`] and [`Seq2::step_by`].
pub struct StepBy<S> {
    inner: S,
    step: usize,
}

impl<S> StepBy<S> {
    pub(crate) fn new(inner: S, step: usize) -> Self {
        Self { inner, step }
    }
}

impl<S: Seq> Seq for StepBy<S> {
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let step = self.step;
        if step == 0 {
            return;
        }
        let mut index = 0usize;
        self.inner.drive(|x| {
            let hit = index % step == 0;
            index += 1;
            !hit || consumer(x)
        })
    }
}

impl<S: Seq2> Seq2 for StepBy<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Key, S::Value) -> bool,
    {
        let step = self.step;
        if step == 0 {
            return;
        }
        let mut index = 0usize;
        self.inner.drive(|k, v| {
            let hit = index % step == 0;
            index += 1;
            !hit || consumer(k, v)
        })
    }
}

/// Indexes elements from `start`, producing a [`Seq2`]. See [`Seq::enumerate`].
pub struct Enumerate<S> {
    inner: S,
    start: usize,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(inner: S, start: usize) -> Self {
        Self { inner, start }
    }
}

impl<S: Seq> Seq2 for Enumerate<S> {
    type Key = usize;
    type Value = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(usize, S::Item) -> bool,
    {
        let mut index = self.start;
        self.inner.drive(|x| {
            let i = index;
            index += 1;
            consumer(i, x)
        })
    }
}
