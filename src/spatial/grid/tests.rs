use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

#[test]
fn new_grid_is_all_dead() {
    let grid = Grid::new(4, 3);
    assert_eq!(grid.size(), 12);
    assert!(grid.cells().iter().all(|c| *c == Cell::Dead));
    assert_eq!(grid.living_count(), 0);
}

#[test]
fn get_and_set_reject_out_of_range_coordinates() {
    let mut grid = Grid::new(3, 2);
    assert_eq!(
        grid.get(3, 0),
        Err(LifeError::OutOfBounds { x: 3, y: 0, columns: 3, rows: 2 })
    );
    assert!(grid.get(0, 2).is_err());
    assert!(grid.get(-1, 0).is_err());
    assert!(grid.set(0, -1, Cell::Alive).is_err());
    assert_eq!(grid.living_count(), 0);
}

#[test]
fn set_mutates_exactly_one_cell() {
    let mut grid = Grid::new(3, 3);
    grid.set(2, 1, Cell::Alive).unwrap();
    assert_eq!(grid.get(2, 1), Ok(Cell::Alive));
    assert_eq!(grid.living_count(), 1);
    // Row-major layout
    assert_eq!(grid.cells()[grid.index(2, 1)], Cell::Alive);
    assert_eq!(grid.index(2, 1), 5);
    assert_eq!(grid.coords(5), (2, 1));
}

#[test]
fn full_interior_neighbourhood_counts_eight() {
    let mut grid = Grid::new(3, 3);
    for y in 0..3 {
        for x in 0..3 {
            grid.set(x, y, Cell::Alive).unwrap();
        }
    }
    assert_eq!(grid.count_live_neighbors(1, 1), Ok(8));
    // Edge centre sees 5 candidates, corner sees 3
    assert_eq!(grid.count_live_neighbors(1, 0), Ok(5));
    assert_eq!(grid.count_live_neighbors(0, 0), Ok(3));
    assert_eq!(grid.count_live_neighbors(2, 2), Ok(3));
}

#[test]
fn corner_does_not_wrap_to_opposite_edge() {
    let mut grid = Grid::new(5, 5);
    // Cells that would be neighbours of (0, 0) on a torus
    grid.set(4, 4, Cell::Alive).unwrap();
    grid.set(4, 0, Cell::Alive).unwrap();
    grid.set(0, 4, Cell::Alive).unwrap();
    grid.set(4, 1, Cell::Alive).unwrap();
    assert_eq!(grid.count_live_neighbors(0, 0), Ok(0));

    grid.set(1, 1, Cell::Alive).unwrap();
    assert_eq!(grid.count_live_neighbors(0, 0), Ok(1));
}

#[test]
fn count_excludes_the_cell_itself() {
    let grid = Grid::with_alive(3, 3, &[(1, 1)]).unwrap();
    assert_eq!(grid.count_live_neighbors(1, 1), Ok(0));
    assert_eq!(grid.count_live_neighbors(0, 0), Ok(1));
}

#[test]
fn count_rejects_out_of_range_centre() {
    let grid = Grid::new(2, 2);
    assert!(grid.count_live_neighbors(2, 0).is_err());
}

#[test]
fn is_alive_treats_outside_as_dead() {
    let grid = Grid::with_alive(2, 2, &[(0, 0)]).unwrap();
    assert!(grid.is_alive(0, 0));
    assert!(!grid.is_alive(-1, 0));
    assert!(!grid.is_alive(0, 2));
}

#[test]
fn randomize_extremes_fill_or_empty_the_board() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = Grid::new(8, 8);

    grid.randomize(1.0, &mut rng);
    assert_eq!(grid.living_count(), 64);

    grid.randomize(0.0, &mut rng);
    assert_eq!(grid.living_count(), 0);

    // Out-of-range probabilities clamp instead of panicking
    grid.randomize(3.0, &mut rng);
    assert_eq!(grid.living_count(), 64);
    grid.randomize(-1.0, &mut rng);
    assert_eq!(grid.living_count(), 0);
}

#[test]
fn randomize_half_is_roughly_half() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::new(100, 100);
    grid.randomize(DEFAULT_FILL_PROBABILITY, &mut rng);
    let living = grid.living_count();
    assert!(living > 4_000 && living < 6_000, "living = {living}");
}

#[test]
fn same_seed_same_board() {
    let mut a = Grid::new(16, 16);
    let mut b = Grid::new(16, 16);
    a.randomize(0.5, &mut StdRng::seed_from_u64(3));
    b.randomize(0.5, &mut StdRng::seed_from_u64(3));
    assert_eq!(a, b);
}

#[test]
fn row_slices_follow_layout() {
    let grid = Grid::with_alive(3, 2, &[(0, 1), (2, 1)]).unwrap();
    assert_eq!(grid.row(0), Some(&[Cell::Dead, Cell::Dead, Cell::Dead][..]));
    assert_eq!(grid.row(1), Some(&[Cell::Alive, Cell::Dead, Cell::Alive][..]));
    assert_eq!(grid.row(2), None);
}

#[test]
#[should_panic(expected = "exceeds")]
fn grid_larger_than_cell_limit_panics_instead_of_wrapping() {
    let _ = Grid::new(65_536, 65_536);
}

#[test]
fn cell_bytes_mirror_cells_row_major() {
    let grid = Grid::with_alive(3, 2, &[(1, 0), (2, 1)]).unwrap();
    assert_eq!(grid.cell_bytes(), &[0, 1, 0, 0, 0, 1]);
    assert_eq!(grid.cell_bytes().as_ptr(), grid.cells_ptr());
}
