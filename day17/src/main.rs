use std::{
    cmp::Reverse,
    collections::BinaryHeap,
    env, fs,
    time::Instant,
};

use fxhash::FxHashSet;

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

type Pos = (i64, i64);

/// Dijkstra over (position, direction, straight-line run length) states.
/// A crucible may only continue straight while run < max_run, and may
/// only turn (or stop) once run >= min_run.
fn least_heat_loss(input: &str, min_run: usize, max_run: usize) -> u64 {
    let grid = input
        .trim()
        .lines()
        .map(|line| {
            line.trim()
                .bytes()
                .map(|c| (c - b'0') as u64)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let h = grid.len() as i64;
    let w = grid[0].len() as i64;
    let goal = (w - 1, h - 1);

    let mut heap = BinaryHeap::<Reverse<(u64, Pos, Pos, usize)>>::new();
    let mut seen = FxHashSet::<(Pos, Pos, usize)>::default();

    for dir in [(1, 0), (0, 1)] {
        heap.push(Reverse((grid[dir.1 as usize][dir.0 as usize], dir, dir, 1)));
    }

    while let Some(Reverse((cost, pos, dir, run))) = heap.pop() {
        if pos == goal && run >= min_run {
            return cost;
        }
        if !seen.insert((pos, dir, run)) {
            continue;
        }

        let mut moves = vec![];
        if run < max_run {
            moves.push((dir, run + 1));
        }
        if run >= min_run {
            moves.push(((dir.1, dir.0), 1));
            moves.push(((-dir.1, -dir.0), 1));
        }

        for ((dx, dy), next_run) in moves {
            let (nx, ny) = (pos.0 + dx, pos.1 + dy);
            if nx >= 0 && nx < w && ny >= 0 && ny < h {
                let next_cost = cost + grid[ny as usize][nx as usize];
                heap.push(Reverse((next_cost, (nx, ny), (dx, dy), next_run)));
            }
        }
    }

    unreachable!("goal not reachable");
}

fn solve(input: &str) -> u64 {
    least_heat_loss(input, 1, 3)
}

fn bonus(input: &str) -> u64 {
    least_heat_loss(input, 4, 10)
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
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 102);
    assert_eq!(bonus(EXAMPLE.trim()), 94);
}

#[test]
fn test_ultra_needs_full_run() {
    let example = "
    111111111111
    999999999991
    999999999991
    999999999991
    999999999991
    ";

    assert_eq!(bonus(example.trim()), 71);
}
