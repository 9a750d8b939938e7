use std::{collections::VecDeque, env, fs, time::Instant};

use fxhash::{FxHashMap, FxHashSet};

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
struct Brick {
    x: (u32, u32),
    y: (u32, u32),
    z: (u32, u32),
}

impl Brick {
    fn parse(line: &str) -> Brick {
        let (a, b) = line.trim().split_once('~').unwrap();
        let [x0, y0, z0] = coords(a);
        let [x1, y1, z1] = coords(b);

        Brick {
            x: (x0.min(x1), x0.max(x1)),
            y: (y0.min(y1), y0.max(y1)),
            z: (z0.min(z1), z0.max(z1)),
        }
    }

    fn overlaps_xy(&self, other: &Brick) -> bool {
        self.x.0 <= other.x.1
            && other.x.0 <= self.x.1
            && self.y.0 <= other.y.1
            && other.y.0 <= self.y.1
    }
}

fn coords(s: &str) -> [u32; 3] {
    let mut parts = s.split(',').map(|n| n.parse().unwrap());
    [(); 3].map(|_| parts.next().unwrap())
}

type Support = FxHashMap<usize, Vec<usize>>;

/// Drop all bricks straight down, then record which brick rests
/// directly on which.
fn settle(input: &str) -> (Vec<Brick>, Support, Support) {
    let mut bricks = input.trim().lines().map(Brick::parse).collect::<Vec<_>>();
    bricks.sort_by_key(|brick| brick.z.0);

    for i in 0..bricks.len() {
        let base = bricks[..i]
            .iter()
            .filter(|other| bricks[i].overlaps_xy(other))
            .map(|other| other.z.1)
            .max()
            .unwrap_or(0);

        let height = bricks[i].z.1 - bricks[i].z.0;
        bricks[i].z = (base + 1, base + 1 + height);
    }

    let mut supports = Support::default();
    let mut supported_by = Support::default();

    for i in 0..bricks.len() {
        for j in 0..bricks.len() {
            if bricks[j].z.0 == bricks[i].z.1 + 1 && bricks[i].overlaps_xy(&bricks[j]) {
                supports.entry(i).or_default().push(j);
                supported_by.entry(j).or_default().push(i);
            }
        }
    }

    (bricks, supports, supported_by)
}

/// How many other bricks would fall if `brick` were disintegrated.
fn chain_reaction(supports: &Support, supported_by: &Support, brick: usize) -> usize {
    let mut falling = FxHashSet::from_iter([brick]);
    let mut queue = VecDeque::from([brick]);

    while let Some(b) = queue.pop_front() {
        for &above in supports.get(&b).into_iter().flatten() {
            if !falling.contains(&above)
                && supported_by[&above].iter().all(|s| falling.contains(s))
            {
                falling.insert(above);
                queue.push_back(above);
            }
        }
    }

    falling.len() - 1
}

fn solve(input: &str) -> usize {
    let (bricks, supports, supported_by) = settle(input);

    (0..bricks.len())
        .filter(|&i| chain_reaction(&supports, &supported_by, i) == 0)
        .count()
}

fn bonus(input: &str) -> usize {
    let (bricks, supports, supported_by) = settle(input);

    (0..bricks.len())
        .map(|i| chain_reaction(&supports, &supported_by, i))
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
1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 5);
    assert_eq!(bonus(EXAMPLE.trim()), 7);
}
