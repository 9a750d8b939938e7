use std::{env, fs, time::Instant};

use cached::proc_macro::cached;

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

#[cached]
fn arrangements(conditions: Vec<u8>, record: Vec<usize>) -> u64 {
    let Some(&need) = record.first() else {
        // no group may remain broken
        return if conditions.contains(&b'#') { 0 } else { 1 };
    };

    // not enough cells left for the remaining groups plus separators
    if conditions.len() < record.iter().sum::<usize>() + record.len() - 1 {
        return 0;
    }

    let mut total = 0;

    // leave the first cell operational
    if conditions[0] != b'#' {
        total += arrangements(conditions[1..].to_vec(), record.clone());
    }

    // or start the first group right here
    if conditions[..need].iter().all(|&c| c != b'.')
        && (conditions.len() == need || conditions[need] != b'#')
    {
        let rest = conditions.get(need + 1..).unwrap_or_default().to_vec();
        total += arrangements(rest, record[1..].to_vec());
    }

    total
}

fn count_line(conditions: &str, record: &str) -> u64 {
    arrangements(
        conditions.bytes().collect(),
        record
            .split(',')
            .map(|n| n.parse::<usize>().unwrap())
            .collect(),
    )
}

fn solve(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .map(|line| {
            let (conditions, record) = line.trim().split_once(" ").unwrap();
            count_line(conditions, record)
        })
        .sum()
}

fn bonus(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .map(|line| {
            let (conditions, record) = line.trim().split_once(" ").unwrap();
            let conditions = [conditions; 5].join("?");
            let record = [record; 5].join(",");
            count_line(&conditions, &record)
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
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 21);
    assert_eq!(bonus(EXAMPLE.trim()), 525152);
}

#[test]
fn test_single_lines() {
    assert_eq!(count_line("???.###", "1,1,3"), 1);
    assert_eq!(count_line(".??..??...?##.", "1,1,3"), 4);
    assert_eq!(count_line("?###????????", "3,2,1"), 10);
}
