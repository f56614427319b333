use std::io::Read;
use std::str::FromStr;
use std::str::SplitAsciiWhitespace;

use crate::error::InputError;
use crate::graph::UndirectedGraph;
use crate::queue::MAX_BUCKET_SPAN;

/// How real input weights become integers for the Dial variants.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WeightPolicy {
    /// Round to the nearest integer, halves away from zero.
    #[default]
    Round,
    /// Reject any weight with a fractional part.
    Exact,
}

/// A validated shortest-path query: vertex count, endpoints and edge list.
///
/// Text format, whitespace separated:
///
/// ```text
/// N M S D
/// u_1 v_1 c_1
/// ...
/// u_M v_M c_M
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    vertex_count: usize,
    source: usize,
    target: usize,
    edges: Vec<(u32, u32, f64)>,
}

impl Instance {
    pub fn new(
        vertex_count: usize,
        source: usize,
        target: usize,
        edges: Vec<(u32, u32, f64)>,
    ) -> Result<Self, InputError> {
        if vertex_count > u32::MAX as usize {
            return Err(InputError::TooManyVertices(vertex_count as u64));
        }
        for (role, vertex) in [("source", source), ("destination", target)] {
            if vertex >= vertex_count {
                return Err(InputError::QueryVertexOutOfRange {
                    role,
                    vertex: vertex as u64,
                    vertex_count,
                });
            }
        }
        for (i, &(u, v, w)) in edges.iter().enumerate() {
            for endpoint in [u, v] {
                if endpoint as usize >= vertex_count {
                    return Err(InputError::EdgeEndpointOutOfRange {
                        edge: i + 1,
                        vertex: endpoint as u64,
                        vertex_count,
                    });
                }
            }
            if !w.is_finite() || w < 0.0 {
                return Err(InputError::InvalidWeight {
                    edge: i + 1,
                    weight: w,
                });
            }
        }

        Ok(Self {
            vertex_count,
            source,
            target,
            edges,
        })
    }

    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut tokens = Tokens::new(text);

        let vertex_count: u64 = tokens.next("vertex count")?;
        if vertex_count > u32::MAX as u64 {
            return Err(InputError::TooManyVertices(vertex_count));
        }
        let vertex_count = vertex_count as usize;
        let edge_count: usize = tokens.next("edge count")?;
        let source = tokens.vertex("source vertex", vertex_count, |vertex| {
            InputError::QueryVertexOutOfRange {
                role: "source",
                vertex,
                vertex_count,
            }
        })?;
        let target = tokens.vertex("destination vertex", vertex_count, |vertex| {
            InputError::QueryVertexOutOfRange {
                role: "destination",
                vertex,
                vertex_count,
            }
        })?;

        let mut edges = Vec::with_capacity(edge_count.min(1 << 20));
        for i in 1..=edge_count {
            let out_of_range = move |vertex| InputError::EdgeEndpointOutOfRange {
                edge: i,
                vertex,
                vertex_count,
            };
            let u = tokens.vertex("edge endpoint", vertex_count, out_of_range)?;
            let v = tokens.vertex("edge endpoint", vertex_count, out_of_range)?;
            let w: f64 = tokens.next("edge weight")?;
            edges.push((u as u32, v as u32, w));
        }

        if let Some(token) = tokens.rest() {
            return Err(InputError::TrailingInput {
                token: token.to_string(),
            });
        }

        let instance = Self::new(vertex_count, source, target, edges)?;
        tracing::debug!(
            vertices = instance.vertex_count,
            edges = instance.edges.len(),
            source = instance.source,
            target_vertex = instance.target,
            "parsed instance"
        );
        Ok(instance)
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    #[inline]
    pub fn edges(&self) -> &[(u32, u32, f64)] {
        &self.edges
    }

    pub fn real_graph(&self) -> UndirectedGraph<f64> {
        UndirectedGraph::from_edges(self.vertex_count, &self.edges)
    }

    /// Integer-weighted graph for the Dial variants. Weights above
    /// `MAX_BUCKET_SPAN` are rejected since the queue allocates one bucket per
    /// unit of the largest weight.
    pub fn integer_graph(&self, policy: WeightPolicy) -> Result<UndirectedGraph<u64>, InputError> {
        let mut edges = Vec::with_capacity(self.edges.len());
        for (i, &(u, v, w)) in self.edges.iter().enumerate() {
            let edge = i + 1;
            let rounded = match policy {
                WeightPolicy::Round => w.round(),
                WeightPolicy::Exact if w.fract() != 0.0 => {
                    return Err(InputError::NonIntegralWeight { edge, weight: w });
                }
                WeightPolicy::Exact => w,
            };
            if rounded > MAX_BUCKET_SPAN as f64 {
                return Err(InputError::WeightSpanTooLarge {
                    edge,
                    weight: w,
                    limit: MAX_BUCKET_SPAN,
                });
            }
            edges.push((u, v, rounded as u64));
        }
        Ok(UndirectedGraph::from_edges(self.vertex_count, &edges))
    }
}

impl FromStr for Instance {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct Tokens<'a> {
    iter: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_ascii_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, what: &'static str) -> Result<T, InputError> {
        let token = self
            .iter
            .next()
            .ok_or(InputError::UnexpectedEnd { expected: what })?;
        token.parse().map_err(|_| InputError::InvalidToken {
            what,
            token: token.to_string(),
        })
    }

    fn vertex<F>(
        &mut self,
        what: &'static str,
        vertex_count: usize,
        out_of_range: F,
    ) -> Result<usize, InputError>
    where
        F: FnOnce(u64) -> InputError,
    {
        let vertex: u64 = self.next(what)?;
        if vertex >= vertex_count as u64 {
            return Err(out_of_range(vertex));
        }
        Ok(vertex as usize)
    }

    fn rest(&mut self) -> Option<&'a str> {
        self.iter.next()
    }
}

#[cfg(test)]
mod tests {
    use super::{Instance, WeightPolicy};
    use crate::error::InputError;

    const SCENARIO: &str = "4 4 0 3\n0 1 4\n1 2 4\n0 2 9\n2 3 1\n";

    #[test]
    fn parses_scenario() {
        let instance: Instance = SCENARIO.parse().unwrap();
        assert_eq!(instance.vertex_count(), 4);
        assert_eq!(instance.source(), 0);
        assert_eq!(instance.target(), 3);
        assert_eq!(instance.edges().len(), 4);
        assert_eq!(instance.edges()[2], (0, 2, 9.0));

        let g = instance.real_graph();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.degree(2), 3);
    }

    #[test]
    fn layout_is_not_significant() {
        let flat = Instance::parse("3 2 0 2 0 1 1.5 1 2 2.5").unwrap();
        let spread = Instance::parse("3\t2\n0 2\n\n0 1 1.5\n1\n2 2.5\n").unwrap();
        assert_eq!(flat, spread);
    }

    #[test]
    fn reads_from_reader() {
        let instance = Instance::read_from(SCENARIO.as_bytes()).unwrap();
        assert_eq!(instance.edges()[3], (2, 3, 1.0));
    }

    #[test]
    fn rejects_missing_edges() {
        let err = Instance::parse("4 3 0 3\n0 1 4\n1 2 4\n").unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEnd { expected: "edge endpoint" }));
    }

    #[test]
    fn rejects_bad_tokens() {
        let err = Instance::parse("four 0 0 0").unwrap_err();
        assert!(matches!(err, InputError::InvalidToken { what: "vertex count", .. }));

        let err = Instance::parse("2 1 0 1\n0 1 x\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidToken { what: "edge weight", .. }));

        let err = Instance::parse("2 1 0 1\n0 -1 3\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidToken { what: "edge endpoint", .. }));
    }

    #[test]
    fn rejects_out_of_range_vertices() {
        let err = Instance::parse("3 0 3 0").unwrap_err();
        assert!(matches!(
            err,
            InputError::QueryVertexOutOfRange { role: "source", vertex: 3, vertex_count: 3 }
        ));

        let err = Instance::parse("3 0 0 7").unwrap_err();
        assert!(matches!(err, InputError::QueryVertexOutOfRange { role: "destination", .. }));

        let err = Instance::parse("3 2 0 1\n0 1 1\n1 5 1\n").unwrap_err();
        assert!(matches!(err, InputError::EdgeEndpointOutOfRange { edge: 2, vertex: 5, .. }));
    }

    #[test]
    fn rejects_negative_and_non_finite_weights() {
        let err = Instance::parse("2 1 0 1\n0 1 -2\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidWeight { edge: 1, .. }));

        let err = Instance::parse("2 2 0 1\n0 1 1\n0 1 inf\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidWeight { edge: 2, .. }));

        let err = Instance::new(2, 0, 1, vec![(0, 1, f64::NAN)]).unwrap_err();
        assert!(matches!(err, InputError::InvalidWeight { edge: 1, .. }));
    }

    #[test]
    fn rejects_trailing_tokens() {
        let err = Instance::parse("2 1 0 1\n0 1 1\n1 0 1\n").unwrap_err();
        assert!(matches!(err, InputError::TrailingInput { .. }));
    }

    #[test]
    fn round_policy_rounds_half_away_from_zero() {
        let instance = Instance::parse("3 3 0 2\n0 1 0.5\n1 2 2.49\n0 2 7.5\n").unwrap();
        let g = instance.integer_graph(WeightPolicy::Round).unwrap();
        let weights: Vec<u64> = g.neighbors(0).map(|e| e.weight).collect();
        assert_eq!(weights, vec![1, 8]);
        assert_eq!(g.max_edge_weight(), Some(8));
        assert_eq!(g.neighbors(2).next().map(|e| e.weight), Some(2));
    }

    #[test]
    fn exact_policy_rejects_fractions() {
        let instance = Instance::parse("3 2 0 2\n0 1 3\n1 2 2.25\n").unwrap();
        let err = instance.integer_graph(WeightPolicy::Exact).unwrap_err();
        assert!(matches!(err, InputError::NonIntegralWeight { edge: 2, .. }));

        let integral = Instance::parse("3 2 0 2\n0 1 3\n1 2 2.0\n").unwrap();
        let g = integral.integer_graph(WeightPolicy::Exact).unwrap();
        assert_eq!(g.max_edge_weight(), Some(3));
    }

    #[test]
    fn rejects_weights_beyond_bucket_span() {
        let instance = Instance::parse("2 1 0 1\n0 1 1e12\n").unwrap();
        let err = instance.integer_graph(WeightPolicy::Round).unwrap_err();
        assert!(matches!(err, InputError::WeightSpanTooLarge { edge: 1, .. }));
        assert_eq!(instance.real_graph().max_edge_weight(), Some(1e12));
    }
}
