use std::{env, fs, time::Instant};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    let input = fs::read_to_string(&path).expect("could not read input file");

    time(|| {
        println!("Part 1: {}", solve(&input));
    });

    time(|| {
        println!("Part 2: {}", bonus(&input));
    });
}

type Grid = Vec<Vec<u8>>;

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().bytes().collect())
        .collect()
}

fn tilt_north(grid: &mut Grid) {
    let h = grid.len();
    let w = grid[0].len();

    for x in 0..w {
        let mut gap = 0;
        for y in 0..h {
            match grid[y][x] {
                b'.' => gap += 1,
                b'#' => gap = 0,
                b'O' if gap > 0 => {
                    grid[y][x] = b'.';
                    grid[y - gap][x] = b'O';
                }
                _ => {}
            }
        }
    }
}

fn rotate_cw(grid: &Grid) -> Grid {
    let h = grid.len();
    let w = grid[0].len();

    (0..w)
        .map(|x| (0..h).rev().map(|y| grid[y][x]).collect())
        .collect()
}

fn spin_cycle(grid: Grid) -> Grid {
    // tilting north then rotating clockwise four times applies N, W, S, E
    let mut grid = grid;
    for _ in 0..4 {
        tilt_north(&mut grid);
        grid = rotate_cw(&grid);
    }
    grid
}

fn north_load(grid: &Grid) -> usize {
    grid.iter()
        .rev()
        .enumerate()
        .map(|(y, row)| (y + 1) * row.iter().filter(|&&c| c == b'O').count())
        .sum()
}

fn solve(input: &str) -> usize {
    let mut grid = parse(input);
    tilt_north(&mut grid);
    north_load(&grid)
}

fn bonus(input: &str) -> usize {
    let n = 1000000000;

    let mut grid = parse(input);
    let mut history = vec![grid.clone()];

    for c in 1.. {
        grid = spin_cycle(grid);

        if let Some(i) = history.iter().position(|g| g == &grid) {
            // the state after i cycles repeats every c - i cycles
            let remaining = (n - i) % (c - i);
            grid = history[i + remaining].clone();
            break;
        }

        history.push(grid.clone());
    }

    north_load(&grid)
}

fn time<F>(f: F)
where
    F: FnOnce(),
{
    let t0 = Instant::now();
    f();
    println!("  took {:?}", t0.elapsed());
}

#[cfg(test)]
const EXAMPLE: &str = "
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 136);
    assert_eq!(bonus(EXAMPLE.trim()), 64);
}
