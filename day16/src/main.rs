use std::{env, fs, time::Instant};

use fxhash::FxHashSet;
use rayon::prelude::*;

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

/// A beam currently at `pos`, travelling in direction `dir`.
type Beam = (Pos, Pos);

fn parse(input: &str) -> Vec<&[u8]> {
    input.trim().lines().map(|line| line.trim().as_bytes()).collect()
}

fn out_directions(tile: u8, (dx, dy): Pos) -> Vec<Pos> {
    match tile {
        b'/' => vec![(-dy, -dx)],
        b'\\' => vec![(dy, dx)],
        b'|' if dx != 0 => vec![(0, -1), (0, 1)],
        b'-' if dy != 0 => vec![(-1, 0), (1, 0)],
        _ => vec![(dx, dy)],
    }
}

fn energized(grid: &[&[u8]], start: Beam) -> usize {
    let h = grid.len() as i64;
    let w = grid[0].len() as i64;

    let mut seen = FxHashSet::<Beam>::default();
    let mut beams = vec![start];

    while let Some(((x, y), dir)) = beams.pop() {
        if !seen.insert(((x, y), dir)) {
            continue;
        }
        for (dx, dy) in out_directions(grid[y as usize][x as usize], dir) {
            let (nx, ny) = (x + dx, y + dy);
            if nx >= 0 && nx < w && ny >= 0 && ny < h {
                beams.push(((nx, ny), (dx, dy)));
            }
        }
    }

    seen.iter()
        .map(|&(pos, _)| pos)
        .collect::<FxHashSet<_>>()
        .len()
}

fn solve(input: &str) -> usize {
    let grid = parse(input);
    energized(&grid, ((0, 0), (1, 0)))
}

fn bonus(input: &str) -> usize {
    let grid = parse(input);
    let h = grid.len() as i64;
    let w = grid[0].len() as i64;

    let mut starts = vec![];
    for x in 0..w {
        starts.push(((x, 0), (0, 1)));
        starts.push(((x, h - 1), (0, -1)));
    }
    for y in 0..h {
        starts.push(((0, y), (1, 0)));
        starts.push(((w - 1, y), (-1, 0)));
    }

    starts
        .par_iter()
        .map(|&start| energized(&grid, start))
        .max()
        .unwrap()
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
const EXAMPLE: &str = r"
.|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 46);
    assert_eq!(bonus(EXAMPLE.trim()), 51);
}
