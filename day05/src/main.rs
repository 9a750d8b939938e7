use std::{env, fs, time::Instant};

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

/// Inclusive interval of source values mapped by a fixed offset.
#[derive(Debug)]
struct MapRange {
    source: i64,
    source_end: i64,
    dest: i64,
}

impl MapRange {
    fn offset(&self) -> i64 {
        self.dest - self.source
    }
}

#[derive(Debug)]
struct RangeMap {
    to: String,
    ranges: Vec<MapRange>, // sorted by source
}

impl RangeMap {
    fn map_value(&self, v: i64) -> i64 {
        self.ranges
            .iter()
            .find(|r| r.source <= v && v <= r.source_end)
            .map(|r| v + r.offset())
            .unwrap_or(v) // unmapped values pass through
    }

    /// Maps an inclusive range, splitting it at every mapping boundary.
    fn map_range(&self, (start, end): (i64, i64)) -> Vec<(i64, i64)> {
        assert!(start <= end);

        let mut out = vec![];
        let mut lo = start;

        for r in &self.ranges {
            if r.source_end < lo {
                continue;
            }
            if r.source > end {
                break;
            }
            if lo < r.source {
                out.push((lo, r.source - 1));
                lo = r.source;
            }
            let hi = end.min(r.source_end);
            out.push((lo + r.offset(), hi + r.offset()));
            lo = hi + 1;
            if lo > end {
                break;
            }
        }

        if lo <= end {
            out.push((lo, end));
        }

        out
    }
}

fn parse(input: &str) -> (Vec<i64>, FxHashMap<&str, RangeMap>) {
    let mut blocks = input.trim().split("\n\n");

    let seeds = blocks
        .next()
        .unwrap()
        .strip_prefix("seeds: ")
        .unwrap()
        .split_whitespace()
        .map(|n| n.parse::<i64>().unwrap())
        .collect::<Vec<_>>();

    let mut maps = FxHashMap::default();

    for block in blocks {
        let mut lines = block.lines();
        let header = lines.next().unwrap().strip_suffix(" map:").unwrap();
        let (from, to) = header.split_once("-to-").unwrap();

        let mut ranges = lines
            .map(|line| {
                let mut it = line.split_whitespace().map(|n| n.parse::<i64>().unwrap());
                let (dest, source, len) =
                    (it.next().unwrap(), it.next().unwrap(), it.next().unwrap());
                MapRange {
                    source,
                    source_end: source + len - 1,
                    dest,
                }
            })
            .collect::<Vec<_>>();
        ranges.sort_by_key(|r| r.source);

        maps.insert(
            from,
            RangeMap {
                to: to.to_string(),
                ranges,
            },
        );
    }

    (seeds, maps)
}

fn solve(input: &str) -> i64 {
    let (seeds, maps) = parse(input);

    seeds
        .into_iter()
        .map(|seed| {
            // follow the map headers from seed to location
            let mut category = "seed";
            let mut val = seed;
            while category != "location" {
                let map = &maps[category];
                val = map.map_value(val);
                category = &map.to;
            }
            val
        })
        .min()
        .unwrap()
}

fn bonus(input: &str) -> i64 {
    let (seeds, maps) = parse(input);

    seeds
        .chunks(2)
        .map(|pair| {
            let mut category = "seed";
            let mut ranges = vec![(pair[0], pair[0] + pair[1] - 1)];
            while category != "location" {
                let map = &maps[category];
                ranges = ranges.into_iter().flat_map(|r| map.map_range(r)).collect();
                category = &map.to;
            }
            ranges.into_iter().map(|(start, _)| start).min().unwrap()
        })
        .min()
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
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 35);
    assert_eq!(bonus(EXAMPLE.trim()), 46);
}

#[test]
fn test_map_range_splits() {
    let map = RangeMap {
        to: "x".to_string(),
        ranges: vec![
            MapRange {
                source: 10,
                source_end: 19,
                dest: 110,
            },
            MapRange {
                source: 30,
                source_end: 39,
                dest: 0,
            },
        ],
    };

    // spans before, inside, between, inside, after
    assert_eq!(
        map.map_range((5, 45)),
        vec![(5, 9), (110, 119), (20, 29), (0, 9), (40, 45)]
    );

    // fully unmapped
    assert_eq!(map.map_range((50, 60)), vec![(50, 60)]);

    // single value
    assert_eq!(map.map_range((15, 15)), vec![(115, 115)]);
}
