use crate::graph::UndirectedGraph;
use crate::queue::{DialQueue, HeapQueue};
use crate::search::Search;
use crate::weight::Weight;

pub fn dijkstra_binary_heap<W: Weight>(graph: &UndirectedGraph<W>, source: usize) -> Vec<W> {
    let mut search = Search::new(graph, source, HeapQueue::new());
    search.run(None);
    search.into_distances()
}

pub fn dijkstra_dial(graph: &UndirectedGraph<u64>, source: usize) -> Vec<u64> {
    let mut search = Search::new(graph, source, dial_queue(graph));
    search.run(None);
    search.into_distances()
}

/// Distance from `source` to `target`, stopping as soon as `target` is settled.
pub fn shortest_distance_binary_heap<W: Weight>(
    graph: &UndirectedGraph<W>,
    source: usize,
    target: usize,
) -> W {
    let mut search = Search::new(graph, source, HeapQueue::new());
    search.run(Some(target));
    finish(&search, target)
}

pub fn shortest_distance_dial(graph: &UndirectedGraph<u64>, source: usize, target: usize) -> u64 {
    let mut search = Search::new(graph, source, dial_queue(graph));
    search.run(Some(target));
    finish(&search, target)
}

pub(crate) fn dial_queue(graph: &UndirectedGraph<u64>) -> DialQueue {
    DialQueue::new(graph.max_edge_weight().unwrap_or(0), graph.vertex_count())
}

fn finish<W, Q>(search: &Search<'_, W, Q>, target: usize) -> W
where
    W: Weight,
    Q: crate::queue::FrontierQueue<W>,
{
    let dist = search.distances().get(target).copied().unwrap_or(W::INFINITY);
    tracing::debug!(
        target_vertex = target,
        settled = search.settled(),
        relaxations = search.relaxations(),
        reachable = !dist.is_infinite(),
        "single-target search finished"
    );
    dist
}
