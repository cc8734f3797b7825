use std::vec;

use crate::error::{EmptyJoin, Exhausted};

/// Yields exactly the next `k` values of `iter`.
///
/// If `iter` runs dry early, the shortfall is reported as a single
/// `Err(Exhausted)` instead of silently ending the chunk short.
pub fn take_exact<I: Iterator>(iter: I, k: usize) -> TakeExact<I> {
    TakeExact { iter, left: k }
}

pub struct TakeExact<I> {
    iter: I,
    left: usize,
}

impl<I: Iterator> Iterator for TakeExact<I> {
    type Item = Result<I::Item, Exhausted>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }

        match self.iter.next() {
            Some(value) => {
                self.left -= 1;
                Some(Ok(value))
            }
            None => {
                self.left = 0;
                Some(Err(Exhausted))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.left))
    }
}

/// Drains `iter` and replays its values once in ascending order.
pub fn sorted<T, I>(iter: I) -> Result<Sorted<T>, Exhausted>
where
    T: Ord,
    I: IntoIterator<Item = Result<T, Exhausted>>,
{
    let mut values = iter.into_iter().collect::<Result<Vec<_>, _>>()?;
    values.sort_unstable();

    Ok(Sorted {
        values: values.into_iter(),
    })
}

pub struct Sorted<T> {
    values: vec::IntoIter<T>,
}

impl<T> Iterator for Sorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for Sorted<T> {}

/// Renders `iter` as decimal numbers separated by `delimiter`.
pub fn join<N, I>(iter: I, delimiter: &str) -> Result<String, EmptyJoin>
where
    N: itoa::Integer,
    I: IntoIterator<Item = N>,
{
    let mut iter = iter.into_iter();
    let mut itoa_buf = itoa::Buffer::new();

    let first = iter.next().ok_or(EmptyJoin)?;
    let mut joined = String::from(itoa_buf.format(first));

    for value in iter {
        joined.push_str(delimiter);
        joined.push_str(itoa_buf.format(value));
    }

    Ok(joined)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_take_exact() {
        let mut iter = 0..10;
        let taken: Vec<_> = take_exact(&mut iter, 3).collect();

        assert_eq!(taken, vec![Ok(0), Ok(1), Ok(2)]);
        assert_eq!(iter.next(), Some(3));
    }

    #[test]
    fn test_take_exact_zero() {
        let mut iter = 0..10;

        assert_eq!(take_exact(&mut iter, 0).next(), None);
        assert_eq!(iter.next(), Some(0));
    }

    #[test]
    fn test_take_exact_shortfall() {
        let mut taken = take_exact(0..2, 4);

        assert_eq!(taken.next(), Some(Ok(0)));
        assert_eq!(taken.next(), Some(Ok(1)));
        assert_eq!(taken.next(), Some(Err(Exhausted)));
        assert_eq!(taken.next(), None);
    }

    #[test]
    fn test_sorted() {
        let values = [5, 3, 9, 0].map(Ok);
        let ascending: Vec<_> = sorted(values).unwrap().collect();

        assert_eq!(ascending, vec![0, 3, 5, 9]);
    }

    #[test]
    fn test_sorted_propagates_shortfall() {
        assert!(matches!(sorted(take_exact(0..2, 3)), Err(Exhausted)));
    }

    #[test]
    fn test_join() {
        assert_eq!(join([0, 3, 5], ","), Ok("0,3,5".to_string()));
        assert_eq!(join([12], ":::"), Ok("12".to_string()));
        assert_eq!(join([1, 2], "1.0"), Ok("11.02".to_string()));
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join(Vec::<usize>::new(), ","), Err(EmptyJoin));
    }

    #[test]
    fn test_take_sort_join() {
        let mut iter = [7, 2, 9, 4, 1].into_iter();

        let first = join(sorted(take_exact(&mut iter, 3)).unwrap(), "-").unwrap();
        let second = join(sorted(take_exact(&mut iter, 2)).unwrap(), "-").unwrap();

        assert_eq!(first, "2-7-9");
        assert_eq!(second, "1-4");
        assert_eq!(iter.next(), None);
    }
}
