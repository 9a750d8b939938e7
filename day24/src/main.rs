use std::{env, fs, time::Instant};

use z3::ast::{Ast, Int};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    let input = fs::read_to_string(&path).expect("could not read input file");

    time(|| {
        println!("Part 1: {}", solve(&input, 200000000000000.0, 400000000000000.0));
    });

    time(|| {
        println!("Part 2: {}", bonus(&input));
    });
}

#[derive(Debug, Clone, Copy)]
struct Hailstone {
    p: [i64; 3],
    v: [i64; 3],
}

fn parse(input: &str) -> Vec<Hailstone> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (p, v) = line.trim().split_once(" @ ").unwrap();
            let mut p = p.split(", ").map(|n| n.trim().parse().unwrap());
            let mut v = v.split(", ").map(|n| n.trim().parse().unwrap());
            Hailstone {
                p: [(); 3].map(|_| p.next().unwrap()),
                v: [(); 3].map(|_| v.next().unwrap()),
            }
        })
        .collect()
}

/// Pairs of hailstone paths (ignoring z) that cross within the test
/// area, at some future time for both stones.
fn solve(input: &str, lo: f64, hi: f64) -> usize {
    let stones = parse(input);
    let mut crossings = 0;

    for (i, a) in stones.iter().enumerate() {
        for b in &stones[i + 1..] {
            // y = m x + c for both paths
            let ma = a.v[1] as f64 / a.v[0] as f64;
            let mb = b.v[1] as f64 / b.v[0] as f64;
            if ma == mb {
                continue;
            }

            let ca = a.p[1] as f64 - ma * a.p[0] as f64;
            let cb = b.p[1] as f64 - mb * b.p[0] as f64;

            let x = (cb - ca) / (ma - mb);
            let y = ma * x + ca;

            let future = (x - a.p[0] as f64) / a.v[0] as f64 > 0.0
                && (x - b.p[0] as f64) / b.v[0] as f64 > 0.0;

            if future && lo <= x && x <= hi && lo <= y && y <= hi {
                crossings += 1;
            }
        }
    }

    crossings
}

/// Find the one rock throw that hits every hailstone. Three stones pin
/// down the six unknowns, so hand those constraints to z3 and read the
/// answer out of the model.
fn bonus(input: &str) -> i64 {
    let stones = parse(input);

    let cfg = z3::Config::new();
    let ctx = z3::Context::new(&cfg);
    let solver = z3::Solver::new(&ctx);

    let pos = [(); 3].map(|_| Int::fresh_const(&ctx, "p"));
    let vel = [(); 3].map(|_| Int::fresh_const(&ctx, "v"));

    for stone in &stones[..3] {
        let t = Int::fresh_const(&ctx, "t");
        solver.assert(&t.ge(&Int::from_i64(&ctx, 0)));

        for axis in 0..3 {
            let stone_at = Int::from_i64(&ctx, stone.p[axis])
                + Int::from_i64(&ctx, stone.v[axis]) * &t;
            let rock_at = &pos[axis] + &vel[axis] * &t;
            solver.assert(&rock_at._eq(&stone_at));
        }
    }

    assert_eq!(solver.check(), z3::SatResult::Sat);
    let model = solver.get_model().unwrap();

    model
        .eval(&(&pos[0] + &pos[1] + &pos[2]), true)
        .unwrap()
        .as_i64()
        .unwrap()
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
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim(), 7.0, 27.0), 2);
    assert_eq!(bonus(EXAMPLE.trim()), 47);
}
