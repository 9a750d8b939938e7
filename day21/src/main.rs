use std::{collections::VecDeque, env, fs, time::Instant};

use fxhash::FxHashSet;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    let input = fs::read_to_string(&path).expect("could not read input file");

    time(|| {
        println!("Part 1: {}", reachable(&input, 64));
    });

    time(|| {
        println!("Part 2: {}", bonus(&input));
    });
}

type Grid = Vec<Vec<u8>>;

fn parse(input: &str) -> (Grid, (usize, usize)) {
    let grid: Grid = input
        .trim()
        .lines()
        .map(|line| line.trim().bytes().collect())
        .collect();

    let start = grid
        .iter()
        .enumerate()
        .find_map(|(r, row)| {
            row.iter()
                .position(|&c| c == b'S')
                .map(|c| (r, c))
        })
        .expect("no starting position");

    (grid, start)
}

/// Garden plots reachable in exactly `steps` steps: BFS, keeping the
/// plots whose distance has the same parity as the step count.
fn fill(grid: &Grid, start: (usize, usize), steps: usize) -> usize {
    let size = grid.len();

    let mut seen = FxHashSet::from_iter([start]);
    let mut queue = VecDeque::from([(start, steps)]);
    let mut plots = 0;

    while let Some(((r, c), remaining)) = queue.pop_front() {
        if remaining % 2 == 0 {
            plots += 1;
        }
        if remaining == 0 {
            continue;
        }

        for (nr, nc) in [
            (r.wrapping_sub(1), c),
            (r + 1, c),
            (r, c.wrapping_sub(1)),
            (r, c + 1),
        ] {
            if nr < size && nc < grid[nr].len() && grid[nr][nc] != b'#' && seen.insert((nr, nc)) {
                queue.push_back(((nr, nc), remaining - 1));
            }
        }
    }

    plots
}

fn reachable(input: &str, steps: usize) -> usize {
    let (grid, start) = parse(input);
    fill(&grid, start, steps)
}

/// The real map tiles infinitely, but it is square with an unobstructed
/// row and column through the centered start, and the step count lands
/// exactly on a tile boundary. The reachable region is a diamond that
/// can be summed from a handful of single-tile fills.
fn bonus(input: &str) -> usize {
    let (grid, (sr, sc)) = parse(input);
    let size = grid.len();
    let steps = 26501365;

    assert!(grid.iter().all(|row| row.len() == size));
    assert_eq!((sr, sc), (size / 2, size / 2));
    assert_eq!(steps % size, size / 2);

    // number of whole tiles from the center to the diamond's edge,
    // not counting the center tile or the pointy tip
    let n = steps / size - 1;

    let odd = (n / 2 * 2 + 1) * (n / 2 * 2 + 1);
    let even = ((n + 1) / 2 * 2) * ((n + 1) / 2 * 2);

    let odd_full = fill(&grid, (sr, sc), size * 2 + 1);
    let even_full = fill(&grid, (sr, sc), size * 2);

    // the four tips of the diamond, entered from an edge midpoint
    let tips = [
        (size - 1, sc),
        (sr, 0),
        (0, sc),
        (sr, size - 1),
    ]
    .into_iter()
    .map(|start| fill(&grid, start, size - 1))
    .sum::<usize>();

    // diagonal edge tiles, entered from a corner
    let corners = [(size - 1, 0), (size - 1, size - 1), (0, 0), (0, size - 1)];

    let small_edges = corners
        .into_iter()
        .map(|start| fill(&grid, start, size / 2 - 1))
        .sum::<usize>();

    let large_edges = corners
        .into_iter()
        .map(|start| fill(&grid, start, size * 3 / 2 - 1))
        .sum::<usize>();

    odd * odd_full + even * even_full + tips + (n + 1) * small_edges + n * large_edges
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
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";

#[test]
fn test() {
    assert_eq!(reachable(EXAMPLE.trim(), 6), 16);
}
