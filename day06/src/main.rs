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

#[derive(Debug, Clone, Copy)]
struct Race {
    time: i64,
    distance: i64,
}

impl Race {
    fn winning(&self, hold: i64) -> bool {
        hold * hold - hold * self.time + self.distance < 0
    }

    fn num_ways_to_win(&self) -> i64 {
        // distance < hold * (time - hold), so the win window lies between the
        // zero points of hold^2 - hold*time + distance
        let ph = self.time as f64 / 2.0;
        let bracket = (ph * ph - self.distance as f64).sqrt();

        let mut lo = (ph - bracket).max(1.0).ceil() as i64;
        let mut hi = (ph + bracket).max(1.0).floor() as i64;

        // the roots themselves tie the record, nudge inwards
        if !self.winning(lo) {
            lo += 1;
        }
        if !self.winning(hi) {
            hi -= 1;
        }

        (hi - lo + 1).max(0)
    }
}

fn parse_line(line: &str) -> impl Iterator<Item = i64> + '_ {
    line.split_once(":")
        .unwrap()
        .1
        .split_whitespace()
        .map(|n| n.parse::<i64>().unwrap())
}

fn solve(input: &str) -> i64 {
    let mut lines = input.trim().lines();
    let times = parse_line(lines.next().unwrap());
    let distances = parse_line(lines.next().unwrap());

    times
        .zip(distances)
        .map(|(time, distance)| Race { time, distance }.num_ways_to_win())
        .product()
}

fn bonus(input: &str) -> i64 {
    let mut lines = input.trim().lines().map(|line| {
        line.split_once(":")
            .unwrap()
            .1
            .replace(' ', "")
            .parse::<i64>()
            .unwrap()
    });

    let race = Race {
        time: lines.next().unwrap(),
        distance: lines.next().unwrap(),
    };

    race.num_ways_to_win()
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
Time:      7  15   30
Distance:  9  40  200
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 288);
    assert_eq!(bonus(EXAMPLE.trim()), 71503);
}
