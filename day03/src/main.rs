use std::{env, fs, time::Instant};

use regex::Regex;

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

#[derive(Debug)]
struct Number {
    row: usize,
    start: usize,
    end: usize, // exclusive
    value: u32,
}

struct Schematic<'a> {
    lines: Vec<&'a str>,
    numbers: Vec<Number>,
    // per cell, the index of the number covering it
    lookup: Vec<Vec<Option<usize>>>,
}

fn parse(input: &str) -> Schematic {
    let re = Regex::new(r"\d+").unwrap();

    let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
    let width = lines[0].len();
    assert!(lines.iter().all(|line| line.len() == width));

    let mut numbers = vec![];
    let mut lookup = vec![vec![None; width]; lines.len()];

    for (row, line) in lines.iter().enumerate() {
        for m in re.find_iter(line) {
            let i = numbers.len();
            numbers.push(Number {
                row,
                start: m.start(),
                end: m.end(),
                value: m.as_str().parse().unwrap(),
            });
            for x in m.start()..m.end() {
                lookup[row][x] = Some(i);
            }
        }
    }

    Schematic {
        lines,
        numbers,
        lookup,
    }
}

/// All in-bounds cells around the inclusive span (row, start..=end), span itself excluded.
fn adjacent(
    height: usize,
    width: usize,
    row: usize,
    start: usize,
    end: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let y0 = row.saturating_sub(1);
    let y1 = (row + 1).min(height - 1);
    let x0 = start.saturating_sub(1);
    let x1 = (end + 1).min(width - 1);

    (y0..=y1)
        .flat_map(move |y| (x0..=x1).map(move |x| (y, x)))
        .filter(move |&(y, x)| y != row || x < start || x > end)
}

fn is_symbol(c: u8) -> bool {
    !c.is_ascii_digit() && c != b'.'
}

fn solve(input: &str) -> u32 {
    let schematic = parse(input);
    let height = schematic.lines.len();
    let width = schematic.lines[0].len();

    schematic
        .numbers
        .iter()
        .filter(|n| {
            adjacent(height, width, n.row, n.start, n.end - 1)
                .any(|(y, x)| is_symbol(schematic.lines[y].as_bytes()[x]))
        })
        .map(|n| n.value)
        .sum()
}

fn bonus(input: &str) -> u32 {
    let schematic = parse(input);
    let height = schematic.lines.len();
    let width = schematic.lines[0].len();

    let mut result = 0;

    for (y, line) in schematic.lines.iter().enumerate() {
        for (x, &c) in line.as_bytes().iter().enumerate() {
            if c != b'*' {
                continue;
            }

            let mut parts = adjacent(height, width, y, x, x)
                .filter_map(|(ny, nx)| schematic.lookup[ny][nx])
                .collect::<Vec<_>>();
            parts.sort();
            parts.dedup();

            // a gear is a * adjacent to exactly two part numbers
            if let [a, b] = parts[..] {
                result += schematic.numbers[a].value * schematic.numbers[b].value;
            }
        }
    }

    result
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
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 4361);
    assert_eq!(bonus(EXAMPLE.trim()), 467835);
}
