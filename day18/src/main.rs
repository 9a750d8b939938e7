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

fn delta(dir: u8) -> (i64, i64) {
    match dir {
        b'R' => (1, 0),
        b'D' => (0, 1),
        b'L' => (-1, 0),
        b'U' => (0, -1),
        _ => panic!("unknown direction {}", dir as char),
    }
}

/// Shoelace area of the dig path, plus Pick's theorem to also count the
/// trench cells themselves.
fn lagoon_size(commands: impl Iterator<Item = (u8, i64)>) -> i64 {
    let (mut x, mut y) = (0i64, 0i64);
    let mut shoelace = 0;
    let mut perimeter = 0;

    for (dir, steps) in commands {
        let (dx, dy) = delta(dir);
        let (nx, ny) = (x + dx * steps, y + dy * steps);
        shoelace += x * ny - nx * y;
        perimeter += steps;
        (x, y) = (nx, ny);
    }

    assert_eq!((x, y), (0, 0), "dig path should return to the start");

    shoelace.abs() / 2 + perimeter / 2 + 1
}

fn solve(input: &str) -> i64 {
    lagoon_size(input.trim().lines().map(|line| {
        let mut parts = line.trim().split(' ');
        let dir = parts.next().unwrap().as_bytes()[0];
        let steps = parts.next().unwrap().parse::<i64>().unwrap();
        (dir, steps)
    }))
}

fn bonus(input: &str) -> i64 {
    lagoon_size(input.trim().lines().map(|line| {
        let hex = line
            .trim()
            .split(' ')
            .nth(2)
            .unwrap()
            .trim_matches(|c| c == '(' || c == ')' || c == '#');

        let steps = i64::from_str_radix(&hex[..5], 16).unwrap();
        let dir = b"RDLU"[hex.as_bytes()[5] as usize - b'0' as usize];
        (dir, steps)
    }))
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
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 62);
    assert_eq!(bonus(EXAMPLE.trim()), 952408144115);
}
