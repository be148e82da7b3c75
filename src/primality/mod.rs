use crate::partition::Range;

/// Returns true iff `n` is prime.
///
/// Trial division by every integer in `[2, isqrt(n)]`. The cost is `O(sqrt(n))` per call,
/// which is what makes the benchmark CPU-bound.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let limit = n.isqrt();
    (2..=limit).all(|i| n % i != 0)
}

/// Evaluates [`is_prime`] over every integer in `range`, in increasing order.
pub fn find_primes(range: Range) -> PrimeSet {
    PrimeSet(range.iter().filter(|&n| is_prime(n)).collect())
}

/// Ordered primes found by one run over a range or chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeSet(Vec<i64>);

impl PrimeSet {
    /// Joins per-chunk sets in chunk order.
    pub fn concat<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = PrimeSet>,
    {
        Self(sets.into_iter().flat_map(|set| set.0).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_sorted(mut self) -> Vec<i64> {
        self.0.sort_unstable();
        self.0
    }
}

impl From<Vec<i64>> for PrimeSet {
    fn from(primes: Vec<i64>) -> Self {
        Self(primes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_primes_below_two() {
        for n in [-7, -1, 0, 1] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn test_small_primes_and_composites() {
        for n in [2, 3, 5, 7, 97] {
            assert!(is_prime(n), "{n} should be prime");
        }
        for n in [4, 9, 100] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn test_perfect_squares_of_primes() {
        // isqrt boundary: the only divisor is exactly the square root
        assert!(!is_prime(49));
        assert!(!is_prime(997 * 997));
    }

    #[test]
    fn test_find_primes_small_range() {
        let range = Range::new(2, 20).unwrap();
        assert_eq!(
            find_primes(range).as_slice(),
            &[2, 3, 5, 7, 11, 13, 17, 19]
        );
    }

    #[test]
    fn test_find_primes_empty_range() {
        let range = Range::new(5, 5).unwrap();
        assert!(find_primes(range).is_empty());
    }

    #[test]
    fn test_concat_keeps_chunk_order() {
        let joined = PrimeSet::concat([PrimeSet::from(vec![11, 13]), PrimeSet::from(vec![2, 3])]);
        assert_eq!(joined.as_slice(), &[11, 13, 2, 3]);
        assert_eq!(joined.into_sorted(), vec![2, 3, 11, 13]);
    }
}
