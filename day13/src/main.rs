use std::{env, fs, time::Instant};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    let input = fs::read_to_string(&path).expect("could not read input file");

    time(|| {
        println!("Part 1: {}", summarize(&input, 0));
    });

    time(|| {
        println!("Part 2: {}", summarize(&input, 1));
    });
}

type Grid = Vec<Vec<u8>>;

/// Cells that differ between the two halves when mirroring below row `y`
/// (between rows y and y+1).
fn row_mismatches(grid: &Grid, y: usize) -> usize {
    let span = (y + 1).min(grid.len() - y - 1);

    (0..span)
        .map(|d| {
            let above = &grid[y - d];
            let below = &grid[y + 1 + d];
            above.iter().zip(below).filter(|(a, b)| a != b).count()
        })
        .sum()
}

fn col_mismatches(grid: &Grid, x: usize) -> usize {
    let width = grid[0].len();
    let span = (x + 1).min(width - x - 1);

    (0..span)
        .map(|d| {
            grid.iter()
                .filter(|row| row[x - d] != row[x + 1 + d])
                .count()
        })
        .sum()
}

fn reflection_score(grid: &Grid, smudges: usize) -> usize {
    let horizontal = (0..grid.len() - 1)
        .filter(|&y| row_mismatches(grid, y) == smudges)
        .map(|y| (y + 1) * 100);

    let vertical = (0..grid[0].len() - 1)
        .filter(|&x| col_mismatches(grid, x) == smudges)
        .map(|x| x + 1);

    let scores = horizontal.chain(vertical).collect::<Vec<_>>();
    assert_eq!(scores.len(), 1, "expected exactly one reflection line");
    scores[0]
}

fn summarize(input: &str, smudges: usize) -> usize {
    input
        .trim()
        .split("\n\n")
        .map(|block| {
            let grid = block
                .trim()
                .lines()
                .map(|line| line.trim().bytes().collect())
                .collect::<Grid>();
            reflection_score(&grid, smudges)
        })
        .sum()
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
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

#[test]
fn test() {
    assert_eq!(summarize(EXAMPLE.trim(), 0), 405);
    assert_eq!(summarize(EXAMPLE.trim(), 1), 400);
}
