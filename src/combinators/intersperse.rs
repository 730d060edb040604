use crate::Seq;

/// Separator between consecutive elements. See [`Seq::intersperse`].
pub struct Intersperse<S: Seq> {
    inner: S,
    sep: S::Item,
}

impl<S: Seq> Intersperse<S> {
    pub(crate) fn new(inner: S, sep: S::Item) -> Self {
        Self { inner, sep }
    }
}

impl<S> Seq for Intersperse<S>
where
    S: Seq,
    S::Item: Clone,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let sep = &self.sep;
        let mut first = true;
        self.inner.drive(|x| {
            if !first && !consumer(sep.clone()) {
                return false;
            }
            first = false;
            consumer(x)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_intersperse() {
        assert_eq!(from_iter(vec![1, 2, 3]).intersperse(0).to_vec(), vec![1, 0, 2, 0, 3]);
        assert_eq!(from_iter(vec![1]).intersperse(0).to_vec(), vec![1]);
        assert!(empty::<i32>().intersperse(0).to_vec().is_empty());
    }

    #[test]
    fn test_intersperse_stop_on_separator() {
        let mut seen = Vec::new();
        from_iter(vec!["a", "b", "c"]).intersperse(",").drive(|x| {
            seen.push(x);
            x != ","
        });
        assert_eq!(seen, vec!["a", ","]);
    }
}
