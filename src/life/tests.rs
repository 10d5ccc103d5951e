use super::{Grid, Simulator, DEFAULT_STEP_INTERVAL, TOGGLE_DEBOUNCE};
use crate::{Pattern, Topology};
use rand::SeedableRng;
use std::time::{Duration, Instant};

const SEED: u64 = 42;

/// The 8 neighbours of the centre of a 3x3 grid.
const AROUND_CENTER: [(usize, usize); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn alive(grid: &Grid) -> Vec<(usize, usize)> {
    grid.alive_cells().collect()
}

/// Runs one generation through the public frame-driven interface.
fn next_generation(grid: Grid, topology: Topology) -> Grid {
    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(grid, t0).with_topology(topology);
    assert!(sim.advance(t0 + DEFAULT_STEP_INTERVAL));
    sim.grid().clone()
}

#[test]
fn test_dead_grid_stays_dead() {
    let next = next_generation(Grid::blank(3, 3), Topology::Torus);
    assert_eq!(next.population(), 0);
}

#[test]
fn test_lonely_cell_dies() {
    let grid = Grid::from_rows(&["...", ".#.", "..."]);
    let next = next_generation(grid, Topology::Torus);
    assert_eq!(next.population(), 0);
}

#[test]
fn test_survival_depends_on_neighbor_count() {
    for topology in [Topology::Torus, Topology::Bounded] {
        for k in 0..=8 {
            let mut grid = Grid::blank(3, 3);
            grid.set(1, 1, true);
            for &(r, c) in &AROUND_CENTER[..k] {
                grid.set(r, c, true);
            }
            assert_eq!(grid.neighbor_count(1, 1, topology), k);
            let next = next_generation(grid, topology);
            assert_eq!(next.get(1, 1), k == 2 || k == 3, "k={}", k);
        }
    }
}

#[test]
fn test_birth_needs_exactly_three() {
    for topology in [Topology::Torus, Topology::Bounded] {
        for k in 0..=8 {
            let mut grid = Grid::blank(3, 3);
            for &(r, c) in &AROUND_CENTER[..k] {
                grid.set(r, c, true);
            }
            let next = next_generation(grid, topology);
            assert_eq!(next.get(1, 1), k == 3, "k={}", k);
        }
    }
}

#[test]
fn test_torus_corners_are_neighbors() {
    let (rows, cols) = (4, 5);
    let mut grid = Grid::blank(rows, cols);
    grid.set(rows - 1, cols - 1, true);
    assert_eq!(grid.neighbor_count(0, 0, Topology::Torus), 1);
    assert_eq!(grid.neighbor_count(0, 0, Topology::Bounded), 0);

    let mut grid = Grid::blank(rows, cols);
    grid.set(0, 0, true);
    assert_eq!(grid.neighbor_count(rows - 1, cols - 1, Topology::Torus), 1);
    assert_eq!(grid.neighbor_count(rows - 1, cols - 1, Topology::Bounded), 0);
}

#[test]
fn test_neighbor_count_is_pure() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let grid = Grid::random(7, 9, 0.4, &mut rng);
    let snapshot = grid.clone();
    for row in 0..7 {
        for col in 0..9 {
            let first = grid.neighbor_count(row, col, Topology::Torus);
            assert!(first <= 8);
            assert_eq!(grid.neighbor_count(row, col, Topology::Torus), first);
        }
    }
    assert_eq!(grid, snapshot);
}

#[test]
fn test_thin_torus_counts_offsets() {
    // every offset of a single-row torus lands on the same row
    let grid = Grid::from_rows(&["###"]);
    assert_eq!(grid.neighbor_count(0, 1, Topology::Torus), 8);
    assert_eq!(grid.neighbor_count(0, 1, Topology::Bounded), 2);
}

#[test]
fn test_blinker_at_edge() {
    let grid = Grid::from_rows(&[".....", "#....", "#....", "#....", "....."]);
    let torus = next_generation(grid.clone(), Topology::Torus);
    assert_eq!(alive(&torus), vec![(2, 0), (2, 1), (2, 4)]);
    let bounded = next_generation(grid, Topology::Bounded);
    assert_eq!(alive(&bounded), vec![(2, 0), (2, 1)]);
}

#[test]
fn test_glider_moves_diagonally() {
    let glider = Pattern::builtin("Glider").unwrap();
    let mut start = Grid::blank(10, 10);
    start.place(&glider, 1, 1).unwrap();
    let mut expected = Grid::blank(10, 10);
    expected.place(&glider, 2, 2).unwrap();

    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(start, t0);
    for i in 1..=4 {
        assert!(sim.advance(t0 + DEFAULT_STEP_INTERVAL * i));
    }
    assert_eq!(sim.generation(), 4);
    assert_eq!(sim.grid(), &expected);
}

#[test]
fn test_blinker_keeps_oscillating() {
    let horizontal = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]);
    let vertical = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]);
    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(horizontal.clone(), t0);
    for i in 1..=10 {
        sim.step(t0 + ms(i));
        let expected = if i % 2 == 1 { &vertical } else { &horizontal };
        assert_eq!(sim.grid(), expected, "generation {}", i);
    }
}

#[test]
fn test_debounced_toggle() {
    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(Grid::blank(3, 3), t0);
    assert!(!sim.is_paused());

    sim.toggle_pause_if_requested(true, t0);
    assert!(sim.is_paused());
    sim.toggle_pause_if_requested(true, t0 + ms(100));
    sim.toggle_pause_if_requested(true, t0 + TOGGLE_DEBOUNCE - ms(1));
    assert!(sim.is_paused());

    sim.toggle_pause_if_requested(false, t0 + ms(1000));
    assert!(sim.is_paused());

    sim.toggle_pause_if_requested(true, t0 + TOGGLE_DEBOUNCE);
    assert!(!sim.is_paused());
}

#[test]
fn test_edits_only_while_paused() {
    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(Grid::blank(4, 4), t0);
    sim.apply_edit(1, 1, true);
    assert_eq!(sim.population(), 0);

    sim.set_paused(true);
    sim.apply_edit(1, 1, true);
    sim.apply_edit(2, 3, true);
    assert_eq!(alive(sim.grid()), vec![(1, 1), (2, 3)]);
    sim.apply_edit(1, 1, false);
    assert_eq!(alive(sim.grid()), vec![(2, 3)]);

    // out of bounds edits are ignored
    sim.apply_edit(4, 0, true);
    sim.apply_edit(0, 4, true);
    sim.apply_edit(usize::MAX, usize::MAX, true);
    assert_eq!(alive(sim.grid()), vec![(2, 3)]);
}

#[test]
fn test_advance_blocked_while_paused() {
    let t0 = Instant::now();
    let grid = Grid::from_rows(&["...", ".#.", "..."]);
    let mut sim = Simulator::from_grid(grid.clone(), t0);
    sim.set_paused(true);
    assert!(!sim.advance(t0 + ms(10_000)));
    assert_eq!(sim.grid(), &grid);
    assert_eq!(sim.generation(), 0);
}

#[test]
fn test_advance_rate_limited() {
    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(Grid::from_rows(&["...", "###", "..."]), t0);
    assert!(!sim.advance(t0 + ms(50)));
    assert!(sim.advance(t0 + ms(100)));
    assert!(!sim.advance(t0 + ms(150)));
    assert!(sim.advance(t0 + ms(200)));
    assert_eq!(sim.generation(), 2);

    sim.set_step_interval(ms(500));
    assert!(!sim.advance(t0 + ms(600)));
    assert!(sim.advance(t0 + ms(700)));
}

#[test]
fn test_step_ignores_pause() {
    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(Grid::from_rows(&["...", ".#.", "..."]), t0);
    sim.set_paused(true);
    sim.step(t0);
    assert_eq!(sim.population(), 0);
    assert_eq!(sim.generation(), 1);
    assert!(sim.is_paused());
}

#[test]
fn test_random_fill_is_reproducible() {
    let t0 = Instant::now();
    let mut rng_a = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let mut rng_b = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let mut a = Simulator::random(60, 80, 0.1, &mut rng_a, t0);
    let mut b = Simulator::random(60, 80, 0.1, &mut rng_b, t0);
    assert_eq!(a.grid(), b.grid());
    assert!(!a.is_paused());

    // roughly 10% of 4800 cells
    let population = a.population();
    assert!((300..700).contains(&population), "population={}", population);

    for i in 1..=20 {
        a.step(t0 + ms(i));
        b.step(t0 + ms(i));
    }
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn test_probability_extremes() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    assert_eq!(Grid::random(5, 5, 0.0, &mut rng).population(), 0);
    assert_eq!(Grid::random(5, 5, 1.0, &mut rng).population(), 25);
}

#[test]
fn test_clear_and_randomize_reset_generation() {
    let t0 = Instant::now();
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let mut sim = Simulator::random(10, 10, 0.5, &mut rng, t0);
    sim.step(t0);
    sim.step(t0);
    sim.clear();
    assert_eq!((sim.generation(), sim.population()), (0, 0));

    sim.step(t0);
    sim.randomize(1.0, &mut rng);
    assert_eq!((sim.generation(), sim.population()), (0, 100));
}

#[test]
fn test_load_pattern_centered() {
    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(Grid::blank(10, 10), t0);
    sim.load_pattern(&Pattern::builtin("Glider").unwrap()).unwrap();
    assert_eq!(
        alive(sim.grid()),
        vec![(3, 4), (4, 5), (5, 3), (5, 4), (5, 5)]
    );

    let gun = Pattern::builtin("Gosper glider gun").unwrap();
    assert!(sim.load_pattern(&gun).is_err());
    assert_eq!(sim.population(), 5);
}

#[test]
#[should_panic]
fn test_ragged_rows_rejected() {
    Grid::from_rows(&["##", "#"]);
}

#[test]
fn test_display() {
    let grid = Grid::from_rows(&["#..", ".#."]);
    assert_eq!(grid.to_string(), "#..\n.#.\n");
}

#[test]
fn test_stats_mentions_state() {
    let t0 = Instant::now();
    let mut sim = Simulator::from_grid(Grid::from_rows(&["###"]), t0)
        .with_topology(Topology::Bounded)
        .with_step_interval(ms(250));
    sim.step(t0);
    let stats = sim.stats();
    assert!(stats.contains("Generation: 1"), "{}", stats);
    assert!(stats.contains("Population: 1"), "{}", stats);
    assert!(stats.contains("3 x 1 (bounded)"), "{}", stats);
    assert!(stats.contains("250 ms"), "{}", stats);
}
