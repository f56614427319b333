use crate::dijkstra::dial_queue;
use crate::graph::UndirectedGraph;
use crate::queue::{FrontierQueue, HeapQueue};
use crate::search::Search;
use crate::weight::Weight;

/// Bidirectional Dijkstra between `source` and `target` with binary heaps.
pub fn bidirectional_binary_heap<W: Weight>(
    graph: &UndirectedGraph<W>,
    source: usize,
    target: usize,
) -> W {
    bidirectional(graph, source, target, HeapQueue::new(), HeapQueue::new())
}

/// Bidirectional Dijkstra between `source` and `target` with one Dial queue
/// per direction.
pub fn bidirectional_dial(graph: &UndirectedGraph<u64>, source: usize, target: usize) -> u64 {
    bidirectional(graph, source, target, dial_queue(graph), dial_queue(graph))
}

/// Alternates one settled vertex forward and one backward, tracking
/// `best = min(fwd[v] + bwd[v])` over every relaxed vertex.
///
/// Stops once either frontier is empty or the sum of the two unextracted
/// frontier minima reaches `best`: any path through a vertex neither side has
/// settled costs at least that sum.
pub fn bidirectional<W, Q>(
    graph: &UndirectedGraph<W>,
    source: usize,
    target: usize,
    forward_queue: Q,
    backward_queue: Q,
) -> W
where
    W: Weight,
    Q: FrontierQueue<W>,
{
    let n = graph.vertex_count();
    if source >= n || target >= n {
        return W::INFINITY;
    }

    let mut forward = Search::new(graph, source, forward_queue);
    let mut backward = Search::new(graph, target, backward_queue);

    let mut best = W::INFINITY;
    for v in [source, target] {
        let through = forward.distance(v).extend(backward.distance(v));
        if through < best {
            best = through;
        }
    }

    let mut rounds = 0_usize;
    loop {
        let (Some(f), Some(b)) = (forward.frontier_min(), backward.frontier_min()) else {
            break;
        };
        if f.extend(b) >= best {
            break;
        }
        rounds += 1;

        forward.step(|v, d| {
            let through = d.extend(backward.distance(v));
            if through < best {
                best = through;
            }
        });
        backward.step(|v, d| {
            let through = forward.distance(v).extend(d);
            if through < best {
                best = through;
            }
        });
    }

    tracing::debug!(
        source,
        target_vertex = target,
        rounds,
        forward_settled = forward.settled(),
        backward_settled = backward.settled(),
        relaxations = forward.relaxations() + backward.relaxations(),
        reachable = !best.is_infinite(),
        "bidirectional search finished"
    );
    best
}
