use std::{env, fs, time::Instant};

use itertools::Itertools;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    let input = fs::read_to_string(&path).expect("could not read input file");

    time(|| {
        println!("Part 1: {}", sum_of_distances(&input, 2));
    });

    time(|| {
        println!("Part 2: {}", sum_of_distances(&input, 1000000));
    });
}

fn sum_of_distances(input: &str, factor: u64) -> u64 {
    let grid = input
        .trim()
        .lines()
        .map(|line| line.trim().as_bytes())
        .collect::<Vec<_>>();

    let galaxies = grid
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &c)| c == b'#')
                .map(move |(x, _)| (y, x))
        })
        .collect::<Vec<_>>();

    let empty_rows = (0..grid.len())
        .filter(|&y| grid[y].iter().all(|&c| c != b'#'))
        .collect::<Vec<_>>();

    let empty_cols = (0..grid[0].len())
        .filter(|&x| grid.iter().all(|row| row[x] != b'#'))
        .collect::<Vec<_>>();

    // every empty row/column counts `factor` wide, so shift each coordinate by
    // the number of empty lines before it
    let expand = |v: usize, empty: &[usize]| {
        v as u64 + (factor - 1) * empty.iter().filter(|&&e| e < v).count() as u64
    };

    let galaxies = galaxies
        .into_iter()
        .map(|(y, x)| (expand(y, &empty_rows), expand(x, &empty_cols)))
        .collect::<Vec<_>>();

    galaxies
        .iter()
        .tuple_combinations()
        .map(|((y1, x1), (y2, x2))| y1.abs_diff(*y2) + x1.abs_diff(*x2))
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
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

#[test]
fn test() {
    assert_eq!(sum_of_distances(EXAMPLE.trim(), 2), 374);
    assert_eq!(sum_of_distances(EXAMPLE.trim(), 10), 1030);
    assert_eq!(sum_of_distances(EXAMPLE.trim(), 100), 8410);
}
