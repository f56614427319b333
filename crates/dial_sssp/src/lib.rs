mod bidirectional;
mod dijkstra;
pub mod error;
pub mod generator;
pub mod graph;
pub mod input;
pub mod queue;
pub mod search;
pub mod weight;

pub use bidirectional::bidirectional;
pub use bidirectional::bidirectional_binary_heap;
pub use bidirectional::bidirectional_dial;
pub use dijkstra::dijkstra_binary_heap;
pub use dijkstra::dijkstra_dial;
pub use dijkstra::shortest_distance_binary_heap;
pub use dijkstra::shortest_distance_dial;
pub use error::InputError;
pub use graph::Edge;
pub use graph::UndirectedGraph;
pub use input::Instance;
pub use input::WeightPolicy;
pub use weight::Weight;

/// Unreachable distance in the integer domain. Twice this still fits in `u64`.
pub const INF: u64 = u64::MAX / 4;
