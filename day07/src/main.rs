use std::{env, fs, time::Instant};

use itertools::Itertools;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

fn hand_type(cards: &str, jokers: bool) -> HandType {
    let mut counts = cards.chars().filter(|&c| !(jokers && c == 'J')).counts();
    let num_jokers = cards.chars().filter(|&c| jokers && c == 'J').count();

    let mut counts = counts.drain().map(|(_, n)| n).collect::<Vec<_>>();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    // jokers always help most as copies of the most frequent card
    if counts.is_empty() {
        counts.push(0);
    }
    counts[0] += num_jokers;

    match (counts[0], counts.get(1)) {
        (5, _) => HandType::FiveOfAKind,
        (4, _) => HandType::FourOfAKind,
        (3, Some(2)) => HandType::FullHouse,
        (3, _) => HandType::ThreeOfAKind,
        (2, Some(2)) => HandType::TwoPair,
        (2, _) => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

fn strength(card: char, jokers: bool) -> usize {
    let order = if jokers {
        "J23456789TQKA"
    } else {
        "23456789TJQKA"
    };
    order.find(card).expect("unknown card")
}

fn total_winnings(input: &str, jokers: bool) -> u64 {
    let mut hands = input
        .trim()
        .lines()
        .map(|line| {
            let (cards, bid) = line.trim().split_once(" ").unwrap();
            let bid = bid.parse::<u64>().unwrap();
            let key = (
                hand_type(cards, jokers),
                cards
                    .chars()
                    .map(|c| strength(c, jokers))
                    .collect::<Vec<_>>(),
            );
            (key, bid)
        })
        .collect::<Vec<_>>();

    // type first, then card by card
    hands.sort();

    hands
        .into_iter()
        .enumerate()
        .map(|(i, (_, bid))| (i as u64 + 1) * bid)
        .sum()
}

fn solve(input: &str) -> u64 {
    total_winnings(input, false)
}

fn bonus(input: &str) -> u64 {
    total_winnings(input, true)
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
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 6440);
    assert_eq!(bonus(EXAMPLE.trim()), 5905);
}

#[test]
fn test_joker_types() {
    assert_eq!(hand_type("JJJJJ", true), HandType::FiveOfAKind);
    assert_eq!(hand_type("QJJQ2", true), HandType::FourOfAKind);
    assert_eq!(hand_type("2233J", true), HandType::FullHouse);
    assert_eq!(hand_type("J2345", true), HandType::OnePair);
}
