use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::UndirectedGraph;

/// Largest weight the generator emits; keeps the Dial ring at 501 buckets.
pub const C_MAX: u64 = 500;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    DenseZero,
    AlmostLine,
    GridRandom,
    GridSwirl,
    Disconnected,
}

impl GraphCase {
    pub const ALL: [GraphCase; 7] = [
        Self::SparseRandom,
        Self::DenseRandom,
        Self::DenseZero,
        Self::AlmostLine,
        Self::GridRandom,
        Self::GridSwirl,
        Self::Disconnected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::DenseZero => "dense_zero",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::GridSwirl => "grid_swirl",
            Self::Disconnected => "disconnected",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: UndirectedGraph<u64>,
    pub source: usize,
    pub target: usize,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(32), seed, 4),
        GraphCase::DenseRandom => dense_random_case(size.max(256), seed),
        GraphCase::DenseZero => dense_zero_case(size.max(256), seed),
        GraphCase::AlmostLine => almost_line_case(size.max(64), seed),
        GraphCase::GridRandom => grid_random_case(size.max(256), seed),
        GraphCase::GridSwirl => grid_swirl_case(size.max(256), seed),
        GraphCase::Disconnected => disconnected_case(size.max(64), seed),
    }
}

fn sparse_random_case(size: usize, seed: u64, edge_factor: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = (n.saturating_mul(edge_factor)).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
    }

    let (source, target) = distinct_endpoints(&mut rng, n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
        target,
    }
}

fn dense_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u as u32, v as u32, rng.random_range(0..=C_MAX)));
        }
    }
    edges.shuffle(&mut rng);

    let (source, target) = distinct_endpoints(&mut rng, n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
        target,
    }
}

fn dense_zero_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u as u32, v as u32, 0));
        }
    }

    let (source, target) = distinct_endpoints(&mut rng, n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
        target,
    }
}

fn almost_line_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(8);
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, rng.random_range(0..=C_MAX));
    }

    let m_target = (n.saturating_mul(2)).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        push_unique_edge(&mut edges, &mut used, a, b, rng.random_range(0..=C_MAX));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    let source = perm[0];
    let target = perm[n - 1];

    for edge in &mut edges {
        edge.0 = perm[edge.0 as usize] as u32;
        edge.1 = perm[edge.1 as usize] as u32;
    }
    edges.shuffle(&mut rng);

    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
        target,
    }
}

fn grid_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = grid_side(size);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 2);

    let index = |i: usize, j: usize| -> u32 { (i * len + j) as u32 };
    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1), rng.random_range(0..=C_MAX)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j), rng.random_range(0..=C_MAX)));
            }
        }
    }

    edges.shuffle(&mut rng);
    let (source, target) = distinct_endpoints(&mut rng, n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
        target,
    }
}

// Cheap edges trace a spiral from the corner towards the center; everything
// else is expensive, so the shortest path winds through most of the grid.
fn grid_swirl_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = grid_side(size);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 2);
    let index = |i: usize, j: usize| -> u32 { (i * len + j) as u32 };

    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                let w = if j < len - 1 - i && j + 1 >= i {
                    rng.random_range(0..=10)
                } else {
                    rng.random_range(C_MAX / 2..=C_MAX)
                };
                edges.push((index(i, j), index(i, j + 1), w));
            }
            if i + 1 < len {
                let w = if j >= len - 1 - i && j > i {
                    rng.random_range(0..=10)
                } else {
                    rng.random_range(C_MAX / 2..=C_MAX)
                };
                edges.push((index(i, j), index(i + 1, j), w));
            }
        }
    }

    edges.shuffle(&mut rng);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source: 0,
        target: index(len / 2, len / 2 - 1) as usize,
    }
}

// Two random components of equal size; source and target sit in different ones.
fn disconnected_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = size.max(8) / 2;
    let n = half * 2;
    let mut edges = Vec::with_capacity(n * 3);
    let mut used = HashSet::with_capacity(n * 6);

    for base in [0, half] {
        for i in 0..(half - 1) {
            let w = rng.random_range(0..=C_MAX);
            push_unique_edge(&mut edges, &mut used, base + i, base + i + 1, w);
        }
        for _ in 0..half {
            let u = base + rng.random_range(0..half);
            let v = base + rng.random_range(0..half);
            push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
        }
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0 as usize] as u32;
        edge.1 = perm[edge.1 as usize] as u32;
    }
    edges.shuffle(&mut rng);

    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source: perm[rng.random_range(0..half)],
        target: perm[half + rng.random_range(0..half)],
    }
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn grid_side(size: usize) -> usize {
    let len = floor_sqrt(size.max(16)).max(4);
    len + len % 2
}

fn distinct_endpoints(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }
    (source, target)
}

/// Pushes `{u, v}` unless it is a self-loop or already present in either
/// orientation.
#[inline]
fn push_unique_edge(
    edges: &mut Vec<(u32, u32, u64)>,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    let (lo, hi) = if u < v { (u, v) } else { (v, u) };
    let key = ((lo as u64) << 32) | hi as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32, weight));
        true
    } else {
        false
    }
}
