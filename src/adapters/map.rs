use crate::{Seq, Seq2};

/// Element-wise transform. See [`Seq::map`] and [`Seq2::map`].
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, B> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(B) -> bool,
    {
        let f = &mut self.f;
        self.inner.drive(|x| consumer(f(x)))
    }
}

impl<S, F, K2, V2> Seq2 for Map<S, F>
where
    S: Seq2,
    F: FnMut(S::Key, S::Value) -> (K2, V2),
{
    type Key = K2;
    type Value = V2;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(K2, V2) -> bool,
    {
        let f = &mut self.f;
        self.inner.drive(|k, v| {
            let (k, v) = f(k, v);
            consumer(k, v)
        })
    }
}

/// Map that drops `None` results. See [`Seq::filter_map`] and [`Seq2::filter_map`].
pub struct FilterMap<S, F> {
    inner: S,
    f: F,
}

impl<S, F> FilterMap<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, B> Seq for FilterMap<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Option<B>,
{
    type Item = B;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(B) -> bool,
    {
        let f = &mut self.f;
        self.inner.drive(|x| match f(x) {
            Some(y) => consumer(y),
            None => true,
        })
    }
}

impl<S, F, K2, V2> Seq2 for FilterMap<S, F>
where
    S: Seq2,
    F: FnMut(S::Key, S::Value) -> Option<(K2, V2)>,
{
    type Key = K2;
    type Value = V2;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(K2, V2) -> bool,
    {
        let f = &mut self.f;
        self.inner.drive(|k, v| match f(k, v) {
            Some((k, v)) => consumer(k, v),
            None => true,
        })
    }
}

/// Map that ends the traversal at the first `None`. See [`Seq::map_while`].
pub struct MapWhile<S, F> {
    inner: S,
    f: F,
}

impl<S, F> MapWhile<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, B> Seq for MapWhile<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Option<B>,
{
    type Item = B;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(B) -> bool,
    {
        let f = &mut self.f;
        self.inner.drive(|x| match f(x) {
            Some(y) => consumer(y),
            None => false,
        })
    }
}

/// Side-effect tap. See [`Seq::inspect`] and [`Seq2::inspect`].
pub struct Inspect<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Inspect<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F> Seq for Inspect<S, F>
where
    S: Seq,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let f = &mut self.f;
        self.inner.drive(|x| {
            f(&x);
            consumer(x)
        })
    }
}

impl<S, F> Seq2 for Inspect<S, F>
where
    S: Seq2,
    F: FnMut(&S::Key, &S::Value),
{
    type Key = S::Key;
    type Value = S::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Key, S::Value) -> bool,
    {
        let f = &mut self.f;
        self.inner.drive(|k, v| {
            f(&k, &v);
            consumer(k, v)
        })
    }
}

/// Running fold. See [`Seq::scan`].
///
/// The accumulator restarts from a clone of `init` on every drive.
pub struct Scan<S, B, F> {
    inner: S,
    init: B,
    f: F,
}

impl<S, B, F> Scan<S, B, F> {
    pub(crate) fn new(inner: S, init: B, f: F) -> Self {
        Self { inner, init, f }
    }
}

impl<S, B, F> Seq for Scan<S, B, F>
where
    S: Seq,
    B: Clone,
    F: FnMut(&B, S::Item) -> B,
{
    type Item = B;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(B) -> bool,
    {
        let f = &mut self.f;
        let mut acc = self.init.clone();
        self.inner.drive(|x| {
            acc = f(&acc, x);
            consumer(acc.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_map() {
        assert_eq!(from_iter(vec![1, 2, 3]).map(|x| x * 2).to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_map() {
        let parsed = from_iter(vec!["1", "x", "3"])
            .filter_map(|s| s.parse::<i32>().ok())
            .to_vec();
        assert_eq!(parsed, vec![1, 3]);
    }

    #[test]
    fn test_map_while() {
        let lens = |v: Vec<&'static str>| {
            from_iter(v)
                .map_while(|s| (s.len() == 1).then_some(s.len()))
                .to_vec()
        };
        assert_eq!(lens(vec!["1", "2", "abc", "3"]), vec![1, 1]);
        assert_eq!(lens(vec!["a", "b", "c"]), vec![1, 1, 1]);
        assert!(lens(vec![]).is_empty());
        assert!(lens(vec!["abc", "def"]).is_empty());
    }

    #[test]
    fn test_scan_restarts_per_drive() {
        let mut running = from_iter(vec![1, 2, 3]).scan(0, |acc, x| acc + x);
        assert_eq!((&mut running).to_vec(), vec![1, 3, 6]);
        assert_eq!(running.to_vec(), vec![1, 3, 6]);

        assert!(empty::<i32>().scan(10, |acc, x| acc + x).to_vec().is_empty());
    }

    #[test]
    fn test_inspect_sees_only_consumed_elements() {
        let mut seen = Vec::new();
        let taken = from_iter(vec![1, 2, 3, 4]).inspect(|x| seen.push(*x)).take(2).to_vec();
        assert_eq!(taken, vec![1, 2]);
        assert_eq!(seen, vec![1, 2]);
    }
}
