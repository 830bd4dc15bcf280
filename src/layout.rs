//! Force-directed placement of notes inside a terminal region.
//!
//! Every round, all node pairs push each other apart and every link pulls its two ends
//! together. Each node then moves exactly one cell-length along its net force, which keeps
//! large graphs from oscillating, and is clamped back inside the drawable margin.

use crate::model::{NoteName, Outgoing};
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

pub const DEFAULT_ITERATIONS: usize = 200;

/// Added to every distance so coincident nodes never divide by zero.
const DISTANCE_EPSILON: f64 = 0.01;
/// Below this distance nodes get the strong overlap correction instead of normal repulsion.
const MIN_SEPARATION: f64 = 2.0;
const OVERLAP_STRENGTH: f64 = 5.0;
const REPULSION_STRENGTH: f64 = 0.02;
const ATTRACTION_STRENGTH: f64 = 1.0;

/// Final cell of each note, `(x, y)`.
pub type Positions = BTreeMap<NoteName, (u16, u16)>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Inclusive clamp bounds: one cell of border on the sides and top, border plus status
/// line at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn for_region(width: u16, height: u16) -> Self {
        let max_x = (i32::from(width) - 2).max(1);
        let max_y = (i32::from(height) - 3).max(1);
        Self {
            min_x: 1.0,
            max_x: f64::from(max_x),
            min_y: 1.0,
            max_y: f64::from(max_y),
        }
    }

    fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: p.x.clamp(self.min_x, self.max_x),
            y: p.y.clamp(self.min_y, self.max_y),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        let (x, y) = (f64::from(x), f64::from(y));
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[derive(Debug, Clone)]
pub struct ForceLayout {
    pub width: u16,
    pub height: u16,
    pub iterations: usize,
}

impl ForceLayout {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::for_region(self.width, self.height)
    }

    /// Ideal edge length for `node_count` nodes in this region.
    pub fn ideal_distance(&self, node_count: usize) -> f64 {
        let area = f64::from(self.width) * f64::from(self.height);
        (area / (node_count as f64 + 1.0)).sqrt()
    }

    pub fn compute<R: Rng>(&self, graph: &Outgoing, rng: &mut R) -> Positions {
        let never = AtomicBool::new(false);
        // Cannot be cancelled, so there is always a result
        self.compute_until(graph, rng, &never).unwrap_or_default()
    }

    /// Run the simulation, checking `cancel` before every round.
    pub fn compute_until<R: Rng>(
        &self,
        graph: &Outgoing,
        rng: &mut R,
        cancel: &AtomicBool,
    ) -> Option<Positions> {
        let names: Vec<&NoteName> = graph.keys().collect();
        let index: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let edges: Vec<(usize, usize)> = graph
            .iter()
            .flat_map(|(source, targets)| {
                let v = index[source.as_str()];
                targets
                    .iter()
                    .filter_map(|target| index.get(target.as_str()))
                    .map(move |&u| (v, u))
                    .collect::<Vec<_>>()
            })
            .collect();

        let bounds = self.bounds();
        let mut positions: Vec<Vec2> = names
            .iter()
            .map(|_| Vec2 {
                x: f64::from(rng.gen_range(bounds.min_x as i32..=bounds.max_x as i32)),
                y: f64::from(rng.gen_range(bounds.min_y as i32..=bounds.max_y as i32)),
            })
            .collect();

        let k = self.ideal_distance(names.len());

        for _ in 0..self.iterations {
            if cancel.load(Ordering::Relaxed) {
                log::info!("Layout cancelled");
                return None;
            }
            step(&mut positions, &edges, k, &bounds);
        }

        log::debug!(
            "Laid out {} notes and {} links in {}x{}",
            names.len(),
            edges.len(),
            self.width,
            self.height
        );

        Some(
            names
                .into_iter()
                .zip(positions)
                .map(|(name, p)| (name.clone(), (p.x.round() as u16, p.y.round() as u16)))
                .collect(),
        )
    }
}

/// One simulation round: accumulate forces, then move every node one unit and clamp.
fn step(positions: &mut [Vec2], edges: &[(usize, usize)], k: f64, bounds: &Bounds) {
    let n = positions.len();
    let mut disp = vec![Vec2::ZERO; n];

    for v in 0..n {
        for u in 0..n {
            if u == v {
                continue;
            }
            let dx = positions[v].x - positions[u].x;
            let dy = positions[v].y - positions[u].y;
            let dist = (dx * dx + dy * dy).sqrt() + DISTANCE_EPSILON;

            let force = if dist < MIN_SEPARATION {
                OVERLAP_STRENGTH * (MIN_SEPARATION - dist)
            } else {
                REPULSION_STRENGTH * (k * k) / dist
            };

            disp[v].x += (dx / dist) * force;
            disp[v].y += (dy / dist) * force;
        }
    }

    for &(v, u) in edges {
        let dx = positions[v].x - positions[u].x;
        let dy = positions[v].y - positions[u].y;
        let dist = (dx * dx + dy * dy).sqrt() + DISTANCE_EPSILON;
        let force = ATTRACTION_STRENGTH * (dist * dist) / k;

        let fx = (dx / dist) * force;
        let fy = (dy / dist) * force;
        disp[v].x -= fx;
        disp[v].y -= fy;
        disp[u].x += fx;
        disp[u].y += fy;
    }

    for (p, d) in positions.iter_mut().zip(disp) {
        let len = d.length();
        if len > 0.0 {
            p.x += d.x / len;
            p.y += d.y / len;
        }
        *p = bounds.clamp(*p);
    }
}
