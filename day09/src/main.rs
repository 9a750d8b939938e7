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

fn difference_stack(history: Vec<i64>) -> Vec<Vec<i64>> {
    let mut stack = vec![history];

    while stack.last().unwrap().iter().any(|&n| n != 0) {
        let prev = stack.last().unwrap();
        stack.push(prev.windows(2).map(|w| w[1] - w[0]).collect());
    }

    stack
}

fn extrapolate(history: Vec<i64>, backward: bool) -> i64 {
    let stack = difference_stack(history);

    if backward {
        stack.iter().rev().fold(0, |below, row| row[0] - below)
    } else {
        stack
            .iter()
            .rev()
            .fold(0, |below, row| row.last().unwrap() + below)
    }
}

fn parse(input: &str) -> impl Iterator<Item = Vec<i64>> + '_ {
    input.trim().lines().map(|line| {
        line.split_whitespace()
            .map(|n| n.parse::<i64>().unwrap())
            .collect()
    })
}

fn solve(input: &str) -> i64 {
    parse(input).map(|history| extrapolate(history, false)).sum()
}

fn bonus(input: &str) -> i64 {
    parse(input).map(|history| extrapolate(history, true)).sum()
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
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 114);
    assert_eq!(bonus(EXAMPLE.trim()), 2);
}
