use life_engine::{count_neighbors, patterns, step, toggle_cell, Grid};

const SEED: u64 = 42;

fn grid(text: &str) -> Grid {
    text.parse().unwrap()
}

fn randomly_filled(seed: u64) -> Vec<Grid> {
    [(1, 1), (3, 3), (7, 13), (32, 24), (1, 40)]
        .into_iter()
        .enumerate()
        .map(|(i, (rows, cols))| Grid::random(rows, cols, seed + i as u64))
        .collect()
}

#[test]
fn step_preserves_dimensions() {
    for g in randomly_filled(SEED) {
        assert_eq!(step(&g).dimensions(), g.dimensions());
    }
    assert_eq!(step(&Grid::new(0, 0)), Grid::new(0, 0));
}

#[test]
fn step_is_pure() {
    for g in randomly_filled(SEED) {
        let before = g.clone();
        let first = step(&g);
        let second = step(&g);
        assert_eq!(first, second);
        assert_eq!(g, before);
    }
}

#[test]
fn birth_on_exactly_three() {
    let g = grid("#.#\n...\n.#.");
    assert_eq!(count_neighbors(&g, 1, 1), Ok(3));
    assert_eq!(step(&g).get(1, 1), Ok(true));
}

#[test]
fn isolated_cell_dies() {
    let g = grid(".....\n.....\n..#..\n.....\n.....");
    assert_eq!(step(&g).population(), 0);
}

#[test]
fn live_cell_with_one_neighbor_dies() {
    let g = grid("##.\n...\n...");
    assert_eq!(step(&g).population(), 0);
}

#[test]
fn overpopulated_center_dies() {
    let g = grid("###\n###\n###");
    let next = step(&g);
    assert_eq!(next.get(1, 1), Ok(false));
    // corners keep exactly three neighbors
    assert_eq!(next.to_string(), "#.#\n...\n#.#\n");
}

#[test]
fn block_is_still_life() {
    let block = grid("....\n.##.\n.##.\n....");
    assert_eq!(step(&block), block);

    // also stable pressed into a corner
    let corner = grid("##\n##");
    assert_eq!(step(&corner), corner);
}

#[test]
fn blinker_oscillates() {
    let horizontal = grid(".....\n.....\n.###.\n.....\n.....");
    let vertical = grid(".....\n..#..\n..#..\n..#..\n.....");
    assert_eq!(step(&horizontal), vertical);
    assert_eq!(step(&vertical), horizontal);
}

#[test]
fn glider_moves_diagonally() {
    let mut g = Grid::new(12, 12);
    patterns::find("Glider").unwrap().stamp(&mut g, 1, 1);
    let start = g.clone();

    for _ in 0..4 {
        g = step(&g);
    }

    let mut shifted = Grid::new(12, 12);
    patterns::find("Glider").unwrap().stamp(&mut shifted, 2, 2);
    assert_eq!(g, shifted);
    assert_eq!(g.population(), start.population());
}

#[test]
fn edges_block_instead_of_wrapping() {
    // vertical blinker on the left edge; on a torus the right column would
    // see it and come alive too
    let g = grid("#..\n#..\n#..");
    let next = step(&g);
    assert_eq!(next.to_string(), "...\n##.\n...\n");
}

#[test]
fn toggle_twice_is_identity() {
    for g in randomly_filled(SEED) {
        let (rows, cols) = g.dimensions();
        let (r, c) = (rows / 2, cols / 2);
        let once = toggle_cell(&g, r, c).unwrap();
        assert_ne!(once, g);
        assert_eq!(toggle_cell(&once, r, c).unwrap(), g);
    }
}
