use std::{env, fs, time::Instant};

use fxhash::FxHashSet;
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

fn matches(input: &str) -> Vec<usize> {
    let re = Regex::new(r"Card\s+(\d+): ([\d\s]+)\|([\d\s]+)").unwrap();

    input
        .trim()
        .lines()
        .map(|line| {
            let caps = re.captures(line.trim()).expect("malformed card");

            let winning = caps[2]
                .split_whitespace()
                .map(|n| n.parse::<u32>().unwrap())
                .collect::<FxHashSet<_>>();

            caps[3]
                .split_whitespace()
                .map(|n| n.parse::<u32>().unwrap())
                .filter(|n| winning.contains(n))
                .count()
        })
        .collect()
}

fn solve(input: &str) -> u32 {
    matches(input)
        .into_iter()
        .map(|n| if n > 0 { 1 << (n - 1) } else { 0 })
        .sum()
}

fn bonus(input: &str) -> u64 {
    let matches = matches(input);
    let mut copies = vec![1u64; matches.len()];

    for (i, &n) in matches.iter().enumerate() {
        // card i wins one copy of each of the next n cards, per copy of card i
        for j in (i + 1)..(i + 1 + n).min(copies.len()) {
            copies[j] += copies[i];
        }
    }

    copies.into_iter().sum()
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
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 13);
    assert_eq!(bonus(EXAMPLE.trim()), 30);
}
