use crate::graph::UndirectedGraph;
use crate::queue::FrontierQueue;
use crate::weight::Weight;

/// One Dijkstra relaxation engine rooted at a fixed vertex.
///
/// The engine owns its distance array and queue; the graph is shared. It can be
/// run to completion or driven one settled vertex at a time, which is how the
/// bidirectional search interleaves two of them.
pub struct Search<'g, W, Q> {
    graph: &'g UndirectedGraph<W>,
    dist: Vec<W>,
    queue: Q,
    settled: usize,
    relaxations: usize,
}

impl<'g, W, Q> Search<'g, W, Q>
where
    W: Weight,
    Q: FrontierQueue<W>,
{
    /// Starts a search at `root`. An out-of-range root leaves every distance at
    /// infinity and the queue empty.
    pub fn new(graph: &'g UndirectedGraph<W>, root: usize, mut queue: Q) -> Self {
        let mut dist = vec![W::INFINITY; graph.vertex_count()];
        if root < dist.len() {
            dist[root] = W::ZERO;
            queue.push(W::ZERO, root);
        }
        Self {
            graph,
            dist,
            queue,
            settled: 0,
            relaxations: 0,
        }
    }

    #[inline]
    pub fn distance(&self, v: usize) -> W {
        self.dist[v]
    }

    #[inline]
    pub fn distances(&self) -> &[W] {
        &self.dist
    }

    pub fn into_distances(self) -> Vec<W> {
        self.dist
    }

    /// Vertices extracted from the queue so far.
    #[inline]
    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Successful distance improvements so far.
    #[inline]
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }

    /// Priority of the next vertex `step` would settle, or `None` once the
    /// frontier is exhausted.
    pub fn frontier_min(&mut self) -> Option<W> {
        loop {
            let (d, u) = self.queue.peek_min()?;
            if Q::STALE_ENTRIES && d != self.dist[u] {
                self.queue.pop_min();
                continue;
            }
            return Some(d);
        }
    }

    /// Settles the frontier minimum and relaxes its edges, calling
    /// `on_relax(v, new_distance)` for every improved neighbor. Returns the
    /// settled vertex, or `None` if the frontier was empty.
    pub fn step<F>(&mut self, mut on_relax: F) -> Option<usize>
    where
        F: FnMut(usize, W),
    {
        let (d, u) = loop {
            let (d, u) = self.queue.pop_min()?;
            if Q::STALE_ENTRIES && d != self.dist[u] {
                continue;
            }
            break (d, u);
        };
        self.settled += 1;

        for edge in self.graph.neighbors(u) {
            let v = edge.to as usize;
            let cand = d.extend(edge.weight);
            if cand < self.dist[v] {
                self.dist[v] = cand;
                self.relaxations += 1;
                self.queue.push(cand, v);
                on_relax(v, cand);
            }
        }

        Some(u)
    }

    /// Runs until the frontier is empty, or until `target` is settled.
    pub fn run(&mut self, target: Option<usize>) {
        while let Some(u) = self.step(|_, _| {}) {
            if Some(u) == target {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Search;
    use crate::INF;
    use crate::graph::UndirectedGraph;
    use crate::queue::{DialQueue, HeapQueue};

    fn scenario() -> UndirectedGraph<u64> {
        UndirectedGraph::from_edges(4, &[(0, 1, 4), (1, 2, 4), (0, 2, 9), (2, 3, 1)])
    }

    #[test]
    fn full_run_heap_and_dial() {
        let g = scenario();
        let mut heap = Search::new(&g, 0, HeapQueue::new());
        heap.run(None);
        assert_eq!(heap.distances(), &[0, 4, 8, 9]);
        assert_eq!(heap.settled(), 4);

        let mut dial = Search::new(&g, 0, DialQueue::new(9, 4));
        dial.run(None);
        assert_eq!(dial.into_distances(), vec![0, 4, 8, 9]);
    }

    #[test]
    fn stepping_reports_relaxations() {
        let g = scenario();
        let mut search = Search::new(&g, 0, DialQueue::new(9, 4));
        assert_eq!(search.frontier_min(), Some(0));

        let mut improved = Vec::new();
        assert_eq!(search.step(|v, d| improved.push((v, d))), Some(0));
        assert_eq!(improved, vec![(1, 4), (2, 9)]);
        assert_eq!(search.frontier_min(), Some(4));

        improved.clear();
        assert_eq!(search.step(|v, d| improved.push((v, d))), Some(1));
        assert_eq!(improved, vec![(2, 8)]);
        assert_eq!(search.relaxations(), 3);
    }

    #[test]
    fn heap_frontier_skips_stale_entries() {
        let g = scenario();
        let mut search = Search::new(&g, 0, HeapQueue::new());
        search.step(|_, _| {});
        search.step(|_, _| {});
        // vertex 2 now has entries at 9 (stale) and 8
        assert_eq!(search.step(|_, _| {}), Some(2));
        assert_eq!(search.frontier_min(), Some(9));
        assert_eq!(search.step(|_, _| {}), Some(3));
        assert_eq!(search.frontier_min(), None);
        assert_eq!(search.step(|_, _| {}), None);
        assert_eq!(search.settled(), 4);
    }

    #[test]
    fn early_exit_stops_at_target() {
        let g = UndirectedGraph::from_edges(5, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)]);
        let mut search = Search::new(&g, 0, HeapQueue::new());
        search.run(Some(1));
        assert_eq!(search.distance(1), 1);
        assert_eq!(search.distance(2), 2);
        assert_eq!(search.distance(4), INF);
    }

    #[test]
    fn out_of_range_root() {
        let g = scenario();
        let mut search = Search::new(&g, 9, HeapQueue::new());
        assert_eq!(search.frontier_min(), None);
        search.run(None);
        assert_eq!(search.into_distances(), vec![INF; 4]);
    }
}
