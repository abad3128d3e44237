use natarray_array::{Array1D, Array2D};
use natarray_core::{Allocator, ArrayError, ArrayOptions};
use natarray_test_utils::{are_same_slice, random_grid};

fn sample() -> Vec<Vec<i32>> {
    vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]]
}

#[test]
fn jagged_get_and_set() {
    let mut grid =
        Array2D::create_from_jagged(&sample(), Allocator::TempJob, ArrayOptions::default())
            .unwrap();
    grid.set(0, 2, 5).unwrap();

    assert_eq!(grid.get(0, 0), Ok(1));
    assert_eq!(grid.get(0, 2), Ok(5));
    assert_eq!(grid.get(1, 1), Ok(5));
    assert_eq!(grid.get(2, 3), Ok(9));
    assert!(matches!(
        grid.get(9, 9),
        Err(ArrayError::IndexOutOfRange { index: 9, len: 3 })
    ));
}

#[test]
fn jagged_rows_through_row_references() {
    let mut grid =
        Array2D::create_from_jagged(&sample(), Allocator::TempJob, ArrayOptions::default())
            .unwrap();
    assert_eq!(grid.row(0).unwrap().get(0), Ok(1));
    assert_eq!(grid.row(2).unwrap().get(3), Ok(9));
    assert_eq!(grid.row(0).unwrap().len(), 3);
    assert_eq!(grid.row(1).unwrap().len(), 2);

    grid.row(0).unwrap().set(2, 5).unwrap();
    assert_eq!(grid.row(0).unwrap().get(2), Ok(5));

    assert!(matches!(grid.row(-1), Err(ArrayError::IndexOutOfRange { .. })));
    assert!(matches!(grid.row(3), Err(ArrayError::IndexOutOfRange { .. })));
}

#[test]
fn locked_grid_hands_out_read_only_rows() {
    let opts = ArrayOptions::default().with_locked(true);
    let mut grid = Array2D::create_from_jagged(&sample(), Allocator::TempJob, opts).unwrap();
    assert!(matches!(grid.row(0), Err(ArrayError::LockedViolation)));
    assert_eq!(grid.row_ref(0).unwrap().get(0), Ok(1));

    grid.unlock();
    grid.row(0).unwrap().set(0, 11).unwrap();
    assert_eq!(grid.get(0, 0), Ok(11));
}

#[test]
fn row_copies_out_independently() {
    let mut grid =
        Array2D::create_from_jagged(&sample(), Allocator::Temp, ArrayOptions::default())
            .unwrap();
    let mut copy = Array1D::empty();
    copy.copy_from(grid.row_ref(2).unwrap(), Some(Allocator::Persistent))
        .unwrap();
    grid.set(2, 0, 0).unwrap();
    assert!(are_same_slice(&copy, &[6, 7, 8, 9]));
}

#[test]
fn random_grids_round_trip() {
    for seed in 0..8 {
        let source = random_grid(12, 9, seed);
        let grid = Array2D::create_from_jagged(&source, Allocator::Temp, ArrayOptions::default())
            .unwrap();
        assert_eq!(grid.to_vecs().unwrap(), source);
        for (i, row) in source.iter().enumerate() {
            assert_eq!(grid.row_len(i as isize), Ok(row.len()));
        }
    }
}

#[test]
fn disposed_grid_rejects_access() {
    let mut grid = Array2D::create_square(3, Allocator::Persistent, 1u8, ArrayOptions::default())
        .unwrap();
    grid.dispose();
    assert_eq!(grid.get(0, 0), Err(ArrayError::InvalidState));
    assert_eq!(grid.set(0, 0, 1), Err(ArrayError::InvalidState));
    grid.dispose();
}
