//! Reusable sequences and comparisons.

use natarray_alloc::Element;
use natarray_array::Array1D;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` integers drawn uniformly from `[min, max)`, reproducible per `seed`.
///
/// # Panics
///
/// Panics if `min >= max`.
pub fn random_list(len: usize, min: i32, max: i32, seed: u64) -> Vec<i32> {
    assert!(min < max, "empty range [{min}, {max})");
    let span = (max as i64 - min as i64) as u64;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| (min as i64 + (rng.next_u64() % span) as i64) as i32)
        .collect()
}

/// Jagged rows of random length in `[0, max_row_len]`, reproducible per `seed`.
pub fn random_grid(rows: usize, max_row_len: usize, seed: u64) -> Vec<Vec<i32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|i| {
            let len = (rng.next_u64() % (max_row_len as u64 + 1)) as usize;
            random_list(len, 0, 128, seed.wrapping_add(i as u64))
        })
        .collect()
}

/// Element-wise equality of two arrays. Lock state and allocator are ignored.
///
/// Two uncreated arrays compare equal; a created and an uncreated one do not.
pub fn are_same<T: Element + PartialEq>(a: &Array1D<T>, b: &Array1D<T>) -> bool {
    a.is_created() == b.is_created() && a.len() == b.len() && a.iter().eq(b.iter())
}

/// Element-wise equality of an array and an external sequence.
pub fn are_same_slice<T: Element + PartialEq>(a: &Array1D<T>, b: &[T]) -> bool {
    a.is_created() && a.len() == b.len() && a.iter().eq(b.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use natarray_core::{Allocator, ArrayOptions};

    #[test]
    fn random_list_is_seeded_and_bounded() {
        let a = random_list(128, 0, 128, 7);
        let b = random_list(128, 0, 128, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (0..128).contains(&v)));
        assert_ne!(a, random_list(128, 0, 128, 8));
    }

    #[test]
    fn random_list_handles_negative_ranges() {
        let a = random_list(64, -10, -5, 1);
        assert!(a.iter().all(|&v| (-10..-5).contains(&v)));
    }

    #[test]
    fn random_grid_respects_row_bound() {
        let grid = random_grid(10, 6, 3);
        assert_eq!(grid.len(), 10);
        assert!(grid.iter().all(|row| row.len() <= 6));
    }

    #[test]
    fn are_same_compares_contents_only() {
        let a = Array1D::create_from(&[1, 2], Allocator::Temp, ArrayOptions::default()).unwrap();
        let mut b =
            Array1D::create_from(&[1, 2], Allocator::Persistent, ArrayOptions::default()).unwrap();
        b.lock();
        assert!(are_same(&a, &b));
        assert!(are_same_slice(&a, &[1, 2]));
        assert!(!are_same_slice(&a, &[1]));
        assert!(!are_same(&a, &Array1D::empty()));
        assert!(are_same(&Array1D::<i32>::empty(), &Array1D::empty()));
    }
}
