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

fn solve(input: &str) -> u32 {
    input
        .trim()
        .lines()
        .map(|line| {
            let digits = line
                .chars()
                .filter_map(|c| c.to_digit(10))
                .collect::<Vec<_>>();

            digits[0] * 10 + digits.last().unwrap()
        })
        .sum()
}

fn bonus(input: &str) -> u32 {
    let words = [
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
    ];

    input
        .trim()
        .lines()
        .map(|line| {
            // scan every position, so overlapping words like "twone" both count
            let digits = (0..line.len())
                .filter_map(|i| {
                    let rest = &line[i..];
                    rest.chars()
                        .next()
                        .and_then(|c| c.to_digit(10))
                        .or_else(|| {
                            words
                                .iter()
                                .find_map(|&(word, n)| rest.starts_with(word).then_some(n))
                        })
                })
                .collect::<Vec<_>>();

            digits[0] * 10 + digits.last().unwrap()
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

#[test]
fn test() {
    assert_eq!(
        solve(
            "
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
    "
            .trim(),
        ),
        142
    );

    assert_eq!(
        bonus(
            "
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
    "
            .trim(),
        ),
        281
    );
}
