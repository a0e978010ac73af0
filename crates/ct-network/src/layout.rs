//! Force-directed layout.
//!
//! Positions are cosmetic: they never influence the epidemic.  Callers run
//! [`relax`] (or [`apply_forces`] in a loop) a fixed number of times before a
//! run starts and then leave positions frozen.
//!
//! One step:
//!
//! 1. zero every velocity;
//! 2. repel every unordered pair with `repulsion / d²` (d floored at 1);
//! 3. pull or push each edge's endpoints by `(d - rest_length) * spring`;
//! 4. pull every node toward the centre by `centering * offset`;
//! 5. `pos += vel * damping`, then clamp into the padded rectangle.
//!
//! The repulsion term is the exact O(n²) pairwise sum.  Networks here are in
//! the tens to low hundreds of nodes.

use ct_core::{Bounds, Node, Vec2};

use crate::Edge;

/// Force constants for one layout step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    /// Numerator of the inverse-square repulsion.
    pub repulsion:   f64,
    /// Edge length at which the spring exerts no force.
    pub rest_length: f64,
    pub spring:      f64,
    pub centering:   f64,
    /// Velocity multiplier applied on integration, in `[0, 1)`.
    pub damping:     f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            repulsion:   500.0,
            rest_length: 60.0,
            spring:      0.05,
            centering:   0.01,
            damping:     0.85,
        }
    }
}

/// One relaxation step with [`LayoutParams::default`].
pub fn apply_forces(nodes: &[Node], edges: &[Edge], bounds: &Bounds) -> Vec<Node> {
    apply_forces_with(nodes, edges, bounds, &LayoutParams::default())
}

/// Run `passes` relaxation steps and return the final generation.
pub fn relax(nodes: &[Node], edges: &[Edge], bounds: &Bounds, passes: usize) -> Vec<Node> {
    let params = LayoutParams::default();
    let mut current = nodes.to_vec();
    for _ in 0..passes {
        current = apply_forces_with(&current, edges, bounds, &params);
    }
    current
}

/// One relaxation step with explicit force constants.
///
/// Edges naming a node outside `nodes` are ignored.  The caller must keep
/// `params.damping` in `[0, 1)`; debug builds panic otherwise.
pub fn apply_forces_with(
    nodes:  &[Node],
    edges:  &[Edge],
    bounds: &Bounds,
    params: &LayoutParams,
) -> Vec<Node> {
    debug_assert!(
        (0.0..1.0).contains(&params.damping),
        "damping must be in [0, 1), got {}",
        params.damping
    );
    let mut next = nodes.to_vec();
    for node in &mut next {
        node.vel = Vec2::ZERO;
    }

    // ── Pairwise repulsion ────────────────────────────────────────────────
    for i in 0..next.len() {
        for j in (i + 1)..next.len() {
            let delta = next[i].pos - next[j].pos;
            let dist = delta.length().max(1.0);
            let push = delta * (params.repulsion / (dist * dist) / dist);
            next[i].vel += push;
            next[j].vel -= push;
        }
    }

    // ── Edge springs ──────────────────────────────────────────────────────
    for edge in edges {
        let (a, b) = (edge.source.index(), edge.target.index());
        if a >= next.len() || b >= next.len() || a == b {
            continue;
        }
        let delta = next[b].pos - next[a].pos;
        let dist = delta.length().max(1.0);
        let pull = delta * ((dist - params.rest_length) * params.spring / dist);
        next[a].vel += pull;
        next[b].vel -= pull;
    }

    // ── Centering, integration, clamp ─────────────────────────────────────
    let center = bounds.center();
    for node in &mut next {
        node.vel += (center - node.pos) * params.centering;
        node.pos = bounds.clamp(node.pos + node.vel * params.damping);
    }

    next
}
