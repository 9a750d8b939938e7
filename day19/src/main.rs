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

struct Rule<'a> {
    condition: Option<(usize, u8, u64)>,
    dest: &'a str,
}

type Workflows<'a> = FxHashMap<&'a str, Vec<Rule<'a>>>;

fn parse_workflows(block: &str) -> Workflows {
    let workflow_re = Regex::new(r"(\w+)\{([^}]*)\}").unwrap();
    let rule_re = Regex::new(r"^(?:([xmas])([<>])(\d+):)?(\w+)$").unwrap();

    workflow_re
        .captures_iter(block)
        .map(|m| {
            let name = m.get(1).unwrap().as_str();
            let rules = m
                .get(2)
                .unwrap()
                .as_str()
                .split(',')
                .map(|rule| {
                    let m = rule_re.captures(rule).unwrap();
                    let condition = m.get(1).map(|attr| {
                        (
                            "xmas".find(attr.as_str()).unwrap(),
                            m[2].as_bytes()[0],
                            m[3].parse().unwrap(),
                        )
                    });
                    Rule {
                        condition,
                        dest: m.get(4).unwrap().as_str(),
                    }
                })
                .collect();
            (name, rules)
        })
        .collect()
}

fn accepts(workflows: &Workflows, part: &[u64; 4]) -> bool {
    let mut at = "in";

    while at != "A" && at != "R" {
        at = workflows[at]
            .iter()
            .find(|rule| match rule.condition {
                Some((attr, b'<', value)) => part[attr] < value,
                Some((attr, _, value)) => part[attr] > value,
                None => true,
            })
            .unwrap()
            .dest;
    }

    at == "A"
}

fn solve(input: &str) -> u64 {
    let (workflows, parts) = input.trim().split_once("\n\n").unwrap();
    let workflows = parse_workflows(workflows);

    let num_re = Regex::new(r"\d+").unwrap();

    parts
        .trim()
        .lines()
        .map(|line| {
            let mut nums = num_re.find_iter(line).map(|m| m.as_str().parse().unwrap());
            let part = [(); 4].map(|_| nums.next().unwrap());
            (part, part.iter().sum::<u64>())
        })
        .filter(|(part, _)| accepts(&workflows, part))
        .map(|(_, rating)| rating)
        .sum()
}

/// Inclusive per-attribute ranges of part ratings still in play.
type Ranges = [(u64, u64); 4];

fn accepted_combinations(workflows: &Workflows, at: &str, mut ranges: Ranges) -> u64 {
    match at {
        "R" => return 0,
        "A" => return ranges.iter().map(|&(lo, hi)| hi - lo + 1).product(),
        _ => {}
    }

    let mut total = 0;

    for rule in &workflows[at] {
        let Some((attr, op, value)) = rule.condition else {
            total += accepted_combinations(workflows, rule.dest, ranges);
            break;
        };

        let (lo, hi) = ranges[attr];
        let (matching, rest) = if op == b'<' {
            ((lo, hi.min(value - 1)), (lo.max(value), hi))
        } else {
            ((lo.max(value + 1), hi), (lo, hi.min(value)))
        };

        if matching.0 <= matching.1 {
            let mut narrowed = ranges;
            narrowed[attr] = matching;
            total += accepted_combinations(workflows, rule.dest, narrowed);
        }

        if rest.0 > rest.1 {
            break;
        }
        ranges[attr] = rest;
    }

    total
}

fn bonus(input: &str) -> u64 {
    let (workflows, _) = input.trim().split_once("\n\n").unwrap();
    let workflows = parse_workflows(workflows);

    accepted_combinations(&workflows, "in", [(1, 4000); 4])
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
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 19114);
    assert_eq!(bonus(EXAMPLE.trim()), 167409079868000);
}
