use crate::weight::Weight;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge<W> {
    pub to: u32,
    pub weight: W,
}

/// Undirected weighted graph in compressed adjacency form.
///
/// Every input edge `(u, v, w)` is stored twice, once in `u`'s neighbor list and
/// once in `v`'s, so both search directions read the same arrays. Neighbor lists
/// keep input order.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<W> {
    vertex_count: usize,
    edge_count: usize,
    offsets: Vec<usize>,
    to: Vec<u32>,
    weight: Vec<W>,
}

impl<W: Weight> UndirectedGraph<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            offsets: vec![0; vertex_count + 1],
            to: Vec::new(),
            weight: Vec::new(),
        }
    }

    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, W)]) -> Self {
        let mut degree = vec![0_usize; vertex_count];
        for &(u, v, _) in edges {
            assert!((u as usize) < vertex_count, "edge endpoint {u} out of range");
            assert!((v as usize) < vertex_count, "edge endpoint {v} out of range");
            degree[u as usize] += 1;
            degree[v as usize] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + degree[v];
        }

        let mut to = vec![0_u32; offsets[vertex_count]];
        let mut weight = vec![W::ZERO; offsets[vertex_count]];
        let mut cursor = offsets[..vertex_count].to_vec();

        for &(u, v, w) in edges {
            for (from, dst) in [(u, v), (v, u)] {
                let idx = cursor[from as usize];
                cursor[from as usize] += 1;
                to[idx] = dst;
                weight[idx] = w;
            }
        }

        Self {
            vertex_count,
            edge_count: edges.len(),
            offsets,
            to,
            weight,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges, i.e. the `M` the graph was built from.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> Neighbors<'_, W> {
        let start = self.offsets[v];
        let end = self.offsets[v + 1];
        Neighbors {
            to: &self.to[start..end],
            weight: &self.weight[start..end],
            idx: 0,
        }
    }

    /// Largest weight on any edge, or `None` for an edgeless graph.
    pub fn max_edge_weight(&self) -> Option<W> {
        self.weight
            .iter()
            .copied()
            .max_by(|a, b| a.total_cmp(b))
    }
}

pub struct Neighbors<'a, W> {
    to: &'a [u32],
    weight: &'a [W],
    idx: usize,
}

impl<W: Copy> Iterator for Neighbors<'_, W> {
    type Item = Edge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.to.len() {
            return None;
        }
        let edge = Edge {
            to: self.to[self.idx],
            weight: self.weight[self.idx],
        };
        self.idx += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.to.len() - self.idx;
        (remain, Some(remain))
    }
}

impl<W: Copy> ExactSizeIterator for Neighbors<'_, W> {}

#[cfg(test)]
mod tests {
    use super::{Edge, UndirectedGraph};

    #[test]
    fn adjacency_is_symmetric() {
        let g = UndirectedGraph::from_edges(4, &[(0, 1, 4_u64), (1, 2, 4), (0, 2, 9), (2, 3, 1)]);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);

        for u in 0..g.vertex_count() {
            for edge in g.neighbors(u) {
                let back = g
                    .neighbors(edge.to as usize)
                    .filter(|e| e.to as usize == u && e.weight == edge.weight)
                    .count();
                assert!(back >= 1, "missing reverse of {u} -> {}", edge.to);
            }
        }

        let n2: Vec<_> = g.neighbors(2).collect();
        assert_eq!(
            n2,
            vec![
                Edge { to: 1, weight: 4 },
                Edge { to: 0, weight: 9 },
                Edge { to: 3, weight: 1 },
            ]
        );
    }

    #[test]
    fn self_loop_listed_twice() {
        let g = UndirectedGraph::from_edges(2, &[(1, 1, 3_u64)]);
        assert_eq!(g.degree(0), 0);
        assert_eq!(g.degree(1), 2);
    }

    #[test]
    fn max_edge_weight() {
        let g = UndirectedGraph::from_edges(3, &[(0, 1, 1.4_f64), (1, 2, 2.6)]);
        assert_eq!(g.max_edge_weight(), Some(2.6));
        assert_eq!(UndirectedGraph::<u64>::new(5).max_edge_weight(), None);
        assert_eq!(UndirectedGraph::<u64>::new(5).degree(4), 0);
    }
}
