use std::{env, fs, time::Instant};

use fxhash::FxHashMap;
use rand::Rng;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    let input = fs::read_to_string(&path).expect("could not read input file");

    time(|| {
        println!("Part 1: {}", solve(&input));
    });
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]);
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else {
            if self.rank[ra] == self.rank[rb] {
                self.rank[ra] += 1;
            }
            self.parent[rb] = ra;
        }
        true
    }
}

fn parse(input: &str) -> (usize, Vec<(usize, usize)>) {
    let mut ids = FxHashMap::<&str, usize>::default();
    let mut edges = vec![];

    for line in input.trim().lines() {
        let (name, others) = line.trim().split_once(": ").unwrap();
        for other in others.split(' ') {
            let next = ids.len();
            let a = *ids.entry(name).or_insert(next);
            let next = ids.len();
            let b = *ids.entry(other).or_insert(next);
            edges.push((a, b));
        }
    }

    (ids.len(), edges)
}

/// Karger's algorithm: contract random edges until two components are
/// left, and retry until that happens to be the 3-wire cut.
fn solve(input: &str) -> usize {
    let (n, edges) = parse(input);
    let mut rng = rand::thread_rng();

    loop {
        let mut uf = UnionFind::new(n);
        let mut components = n;

        while components > 2 {
            let (a, b) = edges[rng.gen_range(0..edges.len())];
            if uf.union(a, b) {
                components -= 1;
            }
        }

        let cut = edges
            .iter()
            .filter(|&&(a, b)| uf.find(a) != uf.find(b))
            .count();

        if cut == 3 {
            let root = uf.find(0);
            let size = (0..n).filter(|&i| uf.find(i) == root).count();
            return size * (n - size);
        }
    }
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
jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE.trim()), 54);
}
