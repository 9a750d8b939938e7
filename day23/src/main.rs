use std::{env, fs, time::Instant};

use fxhash::{FxHashMap, FxHashSet};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    let input = fs::read_to_string(&path).expect("could not read input file");

    time(|| {
        println!("Part 1: {}", longest_hike(&input, true));
    });

    time(|| {
        println!("Part 2: {}", longest_hike(&input, false));
    });
}

type Pos = (usize, usize);

fn parse(input: &str) -> Vec<&[u8]> {
    input.trim().lines().map(|line| line.trim().as_bytes()).collect()
}

fn neighbors(grid: &[&[u8]], (r, c): Pos) -> Vec<Pos> {
    [
        (r.wrapping_sub(1), c),
        (r + 1, c),
        (r, c.wrapping_sub(1)),
        (r, c + 1),
    ]
    .into_iter()
    .filter(|&(nr, nc)| nr < grid.len() && nc < grid[nr].len() && grid[nr][nc] != b'#')
    .collect()
}

/// A slope tile forces the direction you leave it in.
fn may_leave(grid: &[&[u8]], (r, c): Pos, (nr, nc): Pos) -> bool {
    match grid[r][c] {
        b'^' => nr == r.wrapping_sub(1),
        b'v' => nr == r + 1,
        b'<' => nc == c.wrapping_sub(1),
        b'>' => nc == c + 1,
        _ => true,
    }
}

/// Contract the trail maze to its junctions: weighted edges between the
/// start, the end, and every tile with three or more walkable neighbors.
fn trail_graph(
    grid: &[&[u8]],
    slippery: bool,
) -> (Pos, Pos, FxHashMap<Pos, Vec<(Pos, usize)>>) {
    let start = (0, grid[0].iter().position(|&c| c == b'.').unwrap());
    let last = grid.len() - 1;
    let end = (last, grid[last].iter().position(|&c| c == b'.').unwrap());

    let mut nodes = FxHashSet::from_iter([start, end]);
    for r in 0..grid.len() {
        for c in 0..grid[r].len() {
            if grid[r][c] != b'#' && neighbors(grid, (r, c)).len() >= 3 {
                nodes.insert((r, c));
            }
        }
    }

    let mut adjacent = FxHashMap::<Pos, Vec<(Pos, usize)>>::default();

    for &node in &nodes {
        'corridors: for first in neighbors(grid, node) {
            let (mut prev, mut at) = (node, first);
            let mut dist = 1;

            while !nodes.contains(&at) {
                if slippery && !may_leave(grid, prev, at) {
                    continue 'corridors;
                }
                let Some(next) = neighbors(grid, at).into_iter().find(|&n| n != prev) else {
                    continue 'corridors;
                };
                (prev, at) = (at, next);
                dist += 1;
            }

            if !slippery || may_leave(grid, prev, at) {
                adjacent.entry(node).or_default().push((at, dist));
            }
        }
    }

    (start, end, adjacent)
}

fn longest_from(
    adjacent: &FxHashMap<Pos, Vec<(Pos, usize)>>,
    visited: &mut FxHashSet<Pos>,
    at: Pos,
    end: Pos,
) -> Option<usize> {
    if at == end {
        return Some(0);
    }

    let mut best = None;

    for &(next, dist) in adjacent.get(&at).into_iter().flatten() {
        if visited.insert(next) {
            if let Some(rest) = longest_from(adjacent, visited, next, end) {
                best = Some(best.unwrap_or(0).max(dist + rest));
            }
            visited.remove(&next);
        }
    }

    best
}

fn longest_hike(input: &str, slippery: bool) -> usize {
    let grid = parse(input);
    let (start, end, adjacent) = trail_graph(&grid, slippery);

    let mut visited = FxHashSet::from_iter([start]);
    longest_from(&adjacent, &mut visited, start, end).expect("no hike reaches the end")
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
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
";

#[test]
fn test() {
    assert_eq!(longest_hike(EXAMPLE.trim(), true), 94);
    assert_eq!(longest_hike(EXAMPLE.trim(), false), 154);
}
