use std::ops::Range;

use crate::tree::Tree;

const NIL: u32 = u32::MAX;

/// Heavy-light decomposition of a rooted tree.
///
/// Two passes over the tree, both iterative so that path-shaped inputs
/// cannot overflow the call stack:
///
/// 1. a preorder sweep recording parent and depth, then a reverse-preorder
///    sweep accumulating subtree sizes and picking each vertex's heavy
///    child (largest subtree, first-encountered child wins ties);
/// 2. an explicit-stack preorder that visits the heavy child before light
///    children, so each chain occupies a contiguous, increasing run of
///    positions and every subtree occupies `pos[v]..pos[v] + size[v]`.
#[derive(Clone, Debug)]
pub struct HeavyLight {
    parent: Vec<u32>,
    depth: Vec<u32>,
    size: Vec<u32>,
    heavy: Vec<u32>,
    top: Vec<u32>,
    pos: Vec<u32>,
    order: Vec<u32>,
}

impl HeavyLight {
    /// Decompose `tree` rooted at `root`.
    pub fn new(tree: &Tree, root: usize) -> Self {
        let n = tree.len();
        if n == 0 {
            return Self {
                parent: Vec::new(),
                depth: Vec::new(),
                size: Vec::new(),
                heavy: Vec::new(),
                top: Vec::new(),
                pos: Vec::new(),
                order: Vec::new(),
            };
        }
        debug_assert!(root < n, "root {root} out of range 0..{n}");

        let mut parent = vec![NIL; n];
        let mut depth = vec![0_u32; n];
        let mut preorder = Vec::with_capacity(n);
        let mut stack = Vec::with_capacity(n);
        stack.push(root as u32);
        while let Some(v) = stack.pop() {
            preorder.push(v);
            for &w in tree.neighbors(v as usize) {
                if w != parent[v as usize] {
                    parent[w as usize] = v;
                    depth[w as usize] = depth[v as usize] + 1;
                    stack.push(w);
                }
            }
        }
        debug_assert_eq!(preorder.len(), n);

        let mut size = vec![1_u32; n];
        for &v in preorder.iter().rev() {
            let p = parent[v as usize];
            if p != NIL {
                size[p as usize] += size[v as usize];
            }
        }

        let mut heavy = vec![NIL; n];
        for v in 0..n {
            let mut best = 0_u32;
            for &w in tree.neighbors(v) {
                if parent[w as usize] == v as u32 && size[w as usize] > best {
                    best = size[w as usize];
                    heavy[v] = w;
                }
            }
        }

        let mut top = vec![0_u32; n];
        let mut pos = vec![0_u32; n];
        let mut order = vec![0_u32; n];
        let mut counter = 0_u32;
        // (vertex, chain top); light children pushed in reverse adjacency
        // order so they pop in adjacency order, heavy child pushed last so
        // it pops first and the chain stays contiguous.
        let mut label_stack: Vec<(u32, u32)> = Vec::with_capacity(n);
        label_stack.push((root as u32, root as u32));
        while let Some((v, t)) = label_stack.pop() {
            top[v as usize] = t;
            pos[v as usize] = counter;
            order[counter as usize] = v;
            counter += 1;
            let h = heavy[v as usize];
            for &w in tree.neighbors(v as usize).iter().rev() {
                if parent[w as usize] == v && w != h {
                    label_stack.push((w, w));
                }
            }
            if h != NIL {
                label_stack.push((h, t));
            }
        }
        debug_assert_eq!(counter as usize, n);

        Self {
            parent,
            depth,
            size,
            heavy,
            top,
            pos,
            order,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    #[inline]
    pub fn parent(&self, v: usize) -> Option<usize> {
        let p = self.parent[v];
        (p != NIL).then_some(p as usize)
    }

    #[inline]
    pub fn depth(&self, v: usize) -> usize {
        self.depth[v] as usize
    }

    #[inline]
    pub fn size(&self, v: usize) -> usize {
        self.size[v] as usize
    }

    #[inline]
    pub fn heavy(&self, v: usize) -> Option<usize> {
        let h = self.heavy[v];
        (h != NIL).then_some(h as usize)
    }

    /// Topmost vertex of the chain containing `v`.
    #[inline]
    pub fn top(&self, v: usize) -> usize {
        self.top[v] as usize
    }

    /// Position of `v` in the decomposition order.
    #[inline]
    pub fn pos(&self, v: usize) -> usize {
        self.pos[v] as usize
    }

    /// Vertex at position `p` (inverse of [`Self::pos`]).
    #[inline]
    pub fn vertex_at(&self, p: usize) -> usize {
        self.order[p] as usize
    }

    /// Half-open range of positions occupied by the subtree rooted at `v`.
    #[inline]
    pub fn subtree_range(&self, v: usize) -> Range<usize> {
        let start = self.pos[v] as usize;
        start..start + self.size[v] as usize
    }

    /// Call `f` with every contiguous position range covering the u–v path
    /// and return the lowest common ancestor.
    ///
    /// Each time the two endpoints sit on different chains, the one whose
    /// chain top is deeper contributes its chain prefix and hops above the
    /// chain; the final shared-chain segment runs from the shallower to the
    /// deeper endpoint. At most O(log n) ranges are produced.
    pub fn path_segments(&self, mut u: usize, mut v: usize, mut f: impl FnMut(Range<usize>)) -> usize {
        debug_assert!(u < self.len() && v < self.len());
        while self.top[u] != self.top[v] {
            if self.depth[self.top[u] as usize] < self.depth[self.top[v] as usize] {
                std::mem::swap(&mut u, &mut v);
            }
            let t = self.top[u] as usize;
            f(self.pos[t] as usize..self.pos[u] as usize + 1);
            debug_assert!(self.parent[t] != NIL);
            u = self.parent[t] as usize;
        }
        if self.depth[u] > self.depth[v] {
            std::mem::swap(&mut u, &mut v);
        }
        f(self.pos[u] as usize..self.pos[v] as usize + 1);
        u
    }

    /// Lowest common ancestor of `u` and `v`.
    pub fn lca(&self, u: usize, v: usize) -> usize {
        self.path_segments(u, v, |_| {})
    }
}
