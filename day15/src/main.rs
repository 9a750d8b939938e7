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

fn hash(s: &str) -> usize {
    s.bytes().fold(0, |h, c| (h + c as usize) * 17 % 256)
}

fn solve(input: &str) -> usize {
    input.trim().split(',').map(hash).sum()
}

fn bonus(input: &str) -> usize {
    let mut boxes: Vec<Vec<(&str, usize)>> = vec![vec![]; 256];

    for step in input.trim().split(',') {
        if let Some(label) = step.strip_suffix('-') {
            boxes[hash(label)].retain(|&(l, _)| l != label);
        } else {
            let (label, strength) = step.split_once('=').unwrap();
            let strength = strength.parse::<usize>().unwrap();
            let lenses = &mut boxes[hash(label)];

            match lenses.iter_mut().find(|(l, _)| *l == label) {
                Some(lens) => lens.1 = strength,
                None => lenses.push((label, strength)),
            }
        }
    }

    boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, &(_, strength))| (b + 1) * (slot + 1) * strength)
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
const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

#[test]
fn test() {
    assert_eq!(hash("HASH"), 52);
    assert_eq!(solve(EXAMPLE), 1320);
    assert_eq!(bonus(EXAMPLE), 145);
}
