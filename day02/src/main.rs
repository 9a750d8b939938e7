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

#[derive(Debug, Clone, Copy, Default)]
struct Rgb {
    r: u32,
    g: u32,
    b: u32,
}

fn parse_game(line: &str) -> (u32, Vec<Rgb>) {
    let (game, draws) = line.split_once(": ").unwrap();
    let id = game.strip_prefix("Game ").unwrap().parse::<u32>().unwrap();

    let draws = draws
        .split("; ")
        .map(|draw| {
            let mut rgb = Rgb::default();
            for cubes in draw.split(", ") {
                let (count, color) = cubes.split_once(" ").unwrap();
                let count = count.parse::<u32>().unwrap();
                match color {
                    "red" => rgb.r += count,
                    "green" => rgb.g += count,
                    "blue" => rgb.b += count,
                    _ => unreachable!("unknown color {color}"),
                }
            }
            rgb
        })
        .collect::<Vec<_>>();

    (id, draws)
}

fn solve(input: &str) -> u32 {
    let max = Rgb { r: 12, g: 13, b: 14 };

    input
        .trim()
        .lines()
        .map(parse_game)
        .filter(|(_, draws)| {
            draws
                .iter()
                .all(|rgb| rgb.r <= max.r && rgb.g <= max.g && rgb.b <= max.b)
        })
        .map(|(id, _)| id)
        .sum()
}

fn bonus(input: &str) -> u32 {
    input
        .trim()
        .lines()
        .map(parse_game)
        .map(|(_, draws)| {
            // the fewest cubes that make a game possible is the max drawn per color
            let min = draws.iter().fold(Rgb::default(), |acc, rgb| Rgb {
                r: acc.r.max(rgb.r),
                g: acc.g.max(rgb.g),
                b: acc.b.max(rgb.b),
            });
            min.r * min.g * min.b
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
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 8);
    assert_eq!(bonus(EXAMPLE.trim()), 2286);
}
