use std::error::Error;
use std::fmt;

/// Fatal input errors raised while building a [`Tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// A tree on `n` vertices needs exactly `n - 1` edges.
    EdgeCount { expected: usize, got: usize },
    VertexOutOfRange { vertex: usize, len: usize },
    /// The edge set does not reach every vertex. With the edge count
    /// already checked this also covers cycles, self-loops and duplicate
    /// edges, all of which strand some other vertex.
    Disconnected,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EdgeCount { expected, got } => {
                write!(f, "expected {expected} edges, got {got}")
            }
            Self::VertexOutOfRange { vertex, len } => {
                write!(f, "vertex {vertex} out of range for {len} vertices")
            }
            Self::Disconnected => write!(f, "edges do not form a connected tree"),
        }
    }
}

impl Error for TreeError {}

/// Undirected tree over vertices `0..n` as a CSR adjacency list.
///
/// Built once and immutable afterwards; construction validates that the
/// input is exactly a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    vertex_count: usize,
    offsets: Vec<usize>,
    to: Vec<u32>,
}

impl Tree {
    /// Build from `n - 1` undirected edges.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, TreeError> {
        let expected = vertex_count.saturating_sub(1);
        if edges.len() != expected {
            return Err(TreeError::EdgeCount {
                expected,
                got: edges.len(),
            });
        }
        for &(u, v) in edges {
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(TreeError::VertexOutOfRange {
                        vertex,
                        len: vertex_count,
                    });
                }
            }
        }

        let mut degree = vec![0_usize; vertex_count];
        for &(u, v) in edges {
            degree[u] += 1;
            degree[v] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + degree[v];
        }

        let mut to = vec![0_u32; 2 * edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();
        for &(u, v) in edges {
            to[cursor[u]] = v as u32;
            cursor[u] += 1;
            to[cursor[v]] = u as u32;
            cursor[v] += 1;
        }

        let tree = Self {
            vertex_count,
            offsets,
            to,
        };
        if !tree.is_connected() {
            return Err(TreeError::Disconnected);
        }
        Ok(tree)
    }

    /// Build from parent pointers: `parents[i]` is the parent of vertex
    /// `i + 1`, and vertex 0 is the root.
    pub fn from_parents(parents: &[usize]) -> Result<Self, TreeError> {
        let vertex_count = parents.len() + 1;
        let edges = parents
            .iter()
            .enumerate()
            .map(|(i, &p)| (i + 1, p))
            .collect::<Vec<_>>();
        Self::from_edges(vertex_count, &edges)
    }

    fn is_connected(&self) -> bool {
        if self.vertex_count == 0 {
            return true;
        }
        let mut seen = vec![false; self.vertex_count];
        let mut stack = Vec::with_capacity(self.vertex_count);
        seen[0] = true;
        stack.push(0_usize);
        let mut reached = 1_usize;
        while let Some(v) = stack.pop() {
            for &w in self.neighbors(v) {
                let w = w as usize;
                if !seen[w] {
                    seen[w] = true;
                    reached += 1;
                    stack.push(w);
                }
            }
        }
        reached == self.vertex_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[u32] {
        &self.to[self.offsets[v]..self.offsets[v + 1]]
    }
}
