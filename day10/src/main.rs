use std::{env, fs, time::Instant};

use fxhash::FxHashSet;

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

type Pos = (i32, i32); // (y, x)

/// The two directions a pipe connects to, as (dy, dx).
fn exits(c: char) -> Option<[Pos; 2]> {
    match c {
        '|' => Some([(-1, 0), (1, 0)]),
        '-' => Some([(0, -1), (0, 1)]),
        'L' => Some([(-1, 0), (0, 1)]),
        'J' => Some([(-1, 0), (0, -1)]),
        '7' => Some([(1, 0), (0, -1)]),
        'F' => Some([(1, 0), (0, 1)]),
        _ => None,
    }
}

struct Pipes {
    grid: Vec<Vec<char>>,
    start: Pos,
    start_shape: char,
}

impl Pipes {
    fn parse(input: &str) -> Pipes {
        let grid = input
            .trim()
            .lines()
            .map(|line| line.trim().chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let start = grid
            .iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.iter()
                    .position(|&c| c == 'S')
                    .map(|x| (y as i32, x as i32))
            })
            .expect("no start tile");

        // S's real shape is determined by which neighbors connect back to it
        let connects_back = [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter(|&(dy, dx)| {
                let (ny, nx) = (start.0 + dy, start.1 + dx);
                get(&grid, (ny, nx))
                    .and_then(exits)
                    .is_some_and(|dirs| dirs.contains(&(-dy, -dx)))
            })
            .collect::<Vec<_>>();
        assert_eq!(connects_back.len(), 2, "start must join the loop twice");

        let start_shape = "|-LJ7F"
            .chars()
            .find(|&c| {
                let dirs = exits(c).unwrap();
                dirs.contains(&connects_back[0]) && dirs.contains(&connects_back[1])
            })
            .unwrap();

        Pipes {
            grid,
            start,
            start_shape,
        }
    }

    fn at(&self, p: Pos) -> char {
        let c = get(&self.grid, p).unwrap();
        if c == 'S' {
            self.start_shape
        } else {
            c
        }
    }

    fn trace_loop(&self) -> FxHashSet<Pos> {
        let mut tiles = FxHashSet::default();
        tiles.insert(self.start);

        let mut prev = self.start;
        let (dy, dx) = exits(self.start_shape).unwrap()[0];
        let mut at = (self.start.0 + dy, self.start.1 + dx);

        while at != self.start {
            tiles.insert(at);
            let next = exits(self.at(at))
                .unwrap()
                .into_iter()
                .map(|(dy, dx)| (at.0 + dy, at.1 + dx))
                .find(|&p| p != prev)
                .expect("loop tile with a dead end");
            (prev, at) = (at, next);
        }

        tiles
    }
}

fn get(grid: &[Vec<char>], (y, x): Pos) -> Option<char> {
    if y < 0 || x < 0 {
        return None;
    }
    grid.get(y as usize)
        .and_then(|row| row.get(x as usize))
        .copied()
}

fn solve(input: &str) -> usize {
    let pipes = Pipes::parse(input);

    // the farthest tile is halfway around
    pipes.trace_loop().len() / 2
}

fn bonus(input: &str) -> usize {
    let pipes = Pipes::parse(input);
    let tiles = pipes.trace_loop();

    let mut inside = 0;

    for y in 0..pipes.grid.len() as i32 {
        let mut crossings = 0;
        for x in 0..pipes.grid[y as usize].len() as i32 {
            if tiles.contains(&(y, x)) {
                // count pipes with a north arm, so horizontal runs flip parity
                // exactly once per crossing
                if matches!(pipes.at((y, x)), '|' | 'L' | 'J') {
                    crossings += 1;
                }
            } else if crossings % 2 == 1 {
                inside += 1;
            }
        }
    }

    inside
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
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
    "
            .trim(),
        ),
        8
    );

    assert_eq!(
        solve(
            "
.....
.S-7.
.|.|.
.L-J.
.....
    "
            .trim(),
        ),
        4
    );
}

#[test]
fn test_bonus() {
    assert_eq!(
        bonus(
            "
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
    "
            .trim(),
        ),
        4
    );

    assert_eq!(
        bonus(
            "
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
    "
            .trim(),
        ),
        8
    );

    assert_eq!(
        bonus(
            "
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
    "
            .trim(),
        ),
        10
    );
}
