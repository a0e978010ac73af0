//! Random network generation.
//!
//! # Algorithm
//!
//! 1. Scatter `node_count` nodes uniformly over the padded rectangle.
//! 2. For each node `i` in id order, rank every other node by distance and
//!    draw a target degree `max(1, round(density + U(-1, 1)))`.
//! 3. Walk the ranking until `i` reaches its target degree.  The nearest
//!    candidate is always linked; any other candidate `j` is linked with
//!    probability `exp(-d(i, j) / (0.15 * diagonal))`, so links are mostly
//!    local (Waxman-style decay).  Already-linked pairs are skipped, which
//!    keeps the edge list free of duplicates.
//! 4. Shuffle all ids uniformly and infect the first `initial_infected`.
//!
//! A node's final degree can exceed its own target because later nodes may
//! link to it.  Every node ends with degree ≥ 1 whenever `node_count ≥ 2`.

use tracing::debug;

use ct_core::{Bounds, ContagionConfig, CtResult, Node, NodeId, SimRng, Tick, Vec2};

use crate::{Edge, Network};

/// Distance scale of the edge acceptance decay, as a fraction of the
/// bounding-box diagonal.
const DISTANCE_DECAY_FRACTION: f64 = 0.15;

/// Build a network for `config` inside `bounds`, drawing all randomness from
/// `rng`.
///
/// Fails only on an invalid config or bounds; see
/// [`ContagionConfig::validated`] and [`Bounds::validate`].
pub fn generate_network(
    config: &ContagionConfig,
    bounds: &Bounds,
    rng:    &mut SimRng,
) -> CtResult<Network> {
    let config = config.validated()?;
    bounds.validate()?;

    let mut nodes = scatter_nodes(config.node_count, bounds, rng);
    let edges = connect_nodes(&mut nodes, config.connection_density, bounds, rng);
    seed_infections(&mut nodes, config.initial_infected, rng);

    let network = Network { nodes, edges };
    debug!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        mean_degree = network.mean_degree(),
        seeds = config.initial_infected,
        "generated network"
    );
    Ok(network)
}

// ── Steps ─────────────────────────────────────────────────────────────────────

fn scatter_nodes(count: usize, bounds: &Bounds, rng: &mut SimRng) -> Vec<Node> {
    let pad = bounds.padding;
    (0..count)
        .map(|i| {
            let pos = Vec2::new(
                rng.gen_range(pad..bounds.width - pad),
                rng.gen_range(pad..bounds.height - pad),
            );
            Node::new(NodeId(i as u32), pos)
        })
        .collect()
}

fn connect_nodes(
    nodes:   &mut [Node],
    density: f64,
    bounds:  &Bounds,
    rng:     &mut SimRng,
) -> Vec<Edge> {
    let decay = bounds.diagonal() * DISTANCE_DECAY_FRACTION;
    let mut edges = Vec::new();
    let mut ranked: Vec<(usize, f64)> = Vec::with_capacity(nodes.len());

    for i in 0..nodes.len() {
        let origin = nodes[i].pos;
        ranked.clear();
        ranked.extend(
            nodes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(j, n)| (j, origin.distance(n.pos))),
        );
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

        let target_degree = target_degree(density, rng);

        for (rank, &(j, dist)) in ranked.iter().enumerate() {
            if nodes[i].degree() >= target_degree {
                break;
            }
            let other = NodeId(j as u32);
            if nodes[i].is_connected_to(other) {
                continue;
            }
            let accept = rank == 0 || rng.gen_bool((-dist / decay).exp());
            if accept {
                let this = nodes[i].id;
                nodes[i].connections.push(other);
                nodes[j].connections.push(this);
                edges.push(Edge::new(this, other));
            }
        }
    }
    edges
}

/// Per-node degree target: the density perturbed by up to ±1, at least 1.
fn target_degree(density: f64, rng: &mut SimRng) -> usize {
    let jitter: f64 = rng.gen_range(-1.0..=1.0);
    (density + jitter).round().max(1.0) as usize
}

fn seed_infections(nodes: &mut [Node], count: usize, rng: &mut SimRng) {
    let mut ids: Vec<usize> = (0..nodes.len()).collect();
    rng.shuffle(&mut ids);
    for &i in ids.iter().take(count) {
        nodes[i].infect(Tick::ZERO);
    }
}
