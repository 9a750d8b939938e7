use std::{collections::VecDeque, env, fs, time::Instant};

use fxhash::FxHashMap;

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

struct Machine<'a> {
    modules: FxHashMap<&'a str, (u8, Vec<&'a str>)>,
    flops: FxHashMap<&'a str, bool>,
    memory: FxHashMap<&'a str, FxHashMap<&'a str, bool>>,
}

impl<'a> Machine<'a> {
    fn parse(input: &'a str) -> Self {
        let modules = input
            .trim()
            .lines()
            .map(|line| {
                let (name, dests) = line.trim().split_once(" -> ").unwrap();
                let (kind, name) = match name.as_bytes()[0] {
                    c @ (b'%' | b'&') => (c, &name[1..]),
                    _ => (b'b', name),
                };
                (name, (kind, dests.split(", ").collect::<Vec<_>>()))
            })
            .collect::<FxHashMap<_, _>>();

        // conjunctions start out remembering a low pulse from every input
        let mut memory = FxHashMap::<&str, FxHashMap<&str, bool>>::default();
        for (&name, (_, dests)) in &modules {
            for &dest in dests {
                if matches!(modules.get(dest), Some(&(b'&', _))) {
                    memory.entry(dest).or_default().insert(name, false);
                }
            }
        }

        Machine {
            modules,
            flops: FxHashMap::default(),
            memory,
        }
    }

    /// Push the button once, calling `observe` for every pulse sent.
    fn press(&mut self, observe: &mut impl FnMut(&str, bool, &str)) {
        let mut queue = VecDeque::from([("button", false, "broadcaster")]);

        while let Some((source, high, name)) = queue.pop_front() {
            observe(source, high, name);

            let Some(&(kind, ref dests)) = self.modules.get(name) else {
                continue;
            };

            let send = match kind {
                b'b' => high,
                b'%' => {
                    if high {
                        continue;
                    }
                    let state = self.flops.entry(name).or_insert(false);
                    *state = !*state;
                    *state
                }
                _ => {
                    let inputs = self.memory.get_mut(name).unwrap();
                    inputs.insert(source, high);
                    !inputs.values().all(|&h| h)
                }
            };

            for &dest in dests {
                queue.push_back((name, send, dest));
            }
        }
    }
}

fn solve(input: &str) -> u64 {
    let mut machine = Machine::parse(input);

    let (mut low, mut high) = (0u64, 0u64);
    for _ in 0..1000 {
        machine.press(&mut |_, pulse, _| {
            if pulse {
                high += 1;
            } else {
                low += 1;
            }
        });
    }

    low * high
}

fn bonus(input: &str) -> u64 {
    let mut machine = Machine::parse(input);

    // rx is fed by a single conjunction; it sends a low pulse on the
    // button press where all of its inputs have just sent high
    let &feeder = machine
        .modules
        .iter()
        .find(|(_, (_, dests))| dests.contains(&"rx"))
        .map(|(name, _)| name)
        .expect("no module feeds rx");

    let num_inputs = machine.memory[feeder].len();
    let mut first_high = FxHashMap::<String, u64>::default();

    for presses in 1.. {
        machine.press(&mut |source, pulse, dest| {
            if pulse && dest == feeder && !first_high.contains_key(source) {
                first_high.insert(source.to_string(), presses);
            }
        });

        if first_high.len() == num_inputs {
            return first_high.values().fold(1, |acc, &n| lcm(acc, n));
        }
    }

    unreachable!();
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
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
    let example = "
    broadcaster -> a, b, c
    %a -> b
    %b -> c
    %c -> inv
    &inv -> a
    ";

    assert_eq!(solve(example.trim()), 32000000);

    let example = "
    broadcaster -> a
    %a -> inv, con
    &inv -> b
    %b -> con
    &con -> output
    ";

    assert_eq!(solve(example.trim()), 11687500);
}
