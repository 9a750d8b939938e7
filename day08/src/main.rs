use std::{env, fs, time::Instant};

use fxhash::FxHashMap;
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

type Network<'a> = FxHashMap<&'a str, (&'a str, &'a str)>;

fn parse(input: &str) -> (&str, Network) {
    let re = Regex::new(r"(\w{3}) = \((\w{3}), (\w{3})\)").unwrap();

    let (moves, nodes) = input.trim().split_once("\n\n").unwrap();

    let network = nodes
        .lines()
        .map(|line| {
            let caps = re.captures(line.trim()).expect("malformed node");
            let (name, left, right) = (caps.get(1), caps.get(2), caps.get(3));
            (
                name.unwrap().as_str(),
                (left.unwrap().as_str(), right.unwrap().as_str()),
            )
        })
        .collect();

    (moves.trim(), network)
}

fn steps_until<F>(moves: &str, network: &Network, start: &str, done: F) -> u64
where
    F: Fn(&str) -> bool,
{
    let mut at = start;
    let mut steps = 0;

    for m in moves.chars().cycle() {
        if done(at) {
            return steps;
        }
        let (left, right) = network[at];
        at = if m == 'L' { left } else { right };
        steps += 1;
    }

    unreachable!()
}

fn solve(input: &str) -> u64 {
    let (moves, network) = parse(input);

    steps_until(moves, &network, "AAA", |at| at == "ZZZ")
}

fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b > 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> u64 {
    a * b / gcd(a, b)
}

fn bonus(input: &str) -> u64 {
    let (moves, network) = parse(input);

    // each ghost start settles into a cycle hitting one ..Z node, so the
    // combined arrival is the lcm of the individual step counts
    network
        .keys()
        .filter(|name| name.ends_with('A'))
        .map(|&start| steps_until(moves, &network, start, |at| at.ends_with('Z')))
        .fold(1, lcm)
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
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
    "
            .trim(),
        ),
        2
    );

    assert_eq!(
        solve(
            "
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
    "
            .trim(),
        ),
        6
    );

    assert_eq!(
        bonus(
            "
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
    "
            .trim(),
        ),
        6
    );
}
