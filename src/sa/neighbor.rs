//! Neighborhood move operators.
//!
//! A candidate is always a structurally independent clone of the current
//! assignment with one local change applied. Three operators, picked by
//! weighted roulette:
//!
//! - **intra_swap** (0.40) — swap two orders within one route
//! - **inter_move** (0.40) — move one order to a random position of a random
//!   route (the source route itself is a legal destination)
//! - **inter_swap** (0.20) — swap one order between two different routes
//!
//! Every operator preserves the partition invariant: no order is duplicated
//! or dropped, whatever the route shapes are.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::Assignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveOperator {
    IntraSwap,
    InterMove,
    InterSwap,
}

const OPERATOR_WEIGHTS: [(MoveOperator, f64); 3] = [
    (MoveOperator::IntraSwap, 0.40),
    (MoveOperator::InterMove, 0.40),
    (MoveOperator::InterSwap, 0.20),
];

/// Produces a candidate assignment one move away from `assignment`.
///
/// The input is never mutated. Operators that cannot apply (a swap with no
/// route of two orders, an inter-route swap with fewer than two non-empty
/// routes, or an entirely empty assignment) return the clone unchanged.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_dispatch::models::Assignment;
/// use u_dispatch::sa::neighbor;
///
/// let current = Assignment::from_routes(vec![vec![0, 1], vec![2]]);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let candidate = neighbor(&current, &mut rng);
/// assert!(candidate.is_partition(3));
/// assert_eq!(current, Assignment::from_routes(vec![vec![0, 1], vec![2]]));
/// ```
pub fn neighbor<R: Rng>(assignment: &Assignment, rng: &mut R) -> Assignment {
    let mut candidate = assignment.clone();
    if candidate.non_empty_routes().is_empty() {
        return candidate;
    }

    match select_operator(rng) {
        MoveOperator::IntraSwap => intra_route_swap(&mut candidate, rng),
        MoveOperator::InterMove => inter_route_move(&mut candidate, rng),
        MoveOperator::InterSwap => inter_route_swap(&mut candidate, rng),
    }
    candidate
}

/// Roulette selection over the fixed operator weights.
fn select_operator<R: Rng>(rng: &mut R) -> MoveOperator {
    let mut roll = rng.random_range(0.0..1.0);
    for &(op, weight) in &OPERATOR_WEIGHTS {
        if roll < weight {
            return op;
        }
        roll -= weight;
    }
    OPERATOR_WEIGHTS[OPERATOR_WEIGHTS.len() - 1].0
}

/// Swaps two orders within one route that has at least two of them.
fn intra_route_swap<R: Rng>(candidate: &mut Assignment, rng: &mut R) {
    let eligible: Vec<usize> = (0..candidate.num_routes())
        .filter(|&i| candidate.routes()[i].len() >= 2)
        .collect();
    let Some(&route_idx) = eligible.choose(rng) else {
        return;
    };

    let route = &mut candidate.routes_mut()[route_idx];
    let (i, j) = distinct_pair(route.len(), rng);
    route.swap(i, j);
}

/// Removes one order from a non-empty route and reinserts it at a random
/// position of a random route. The destination is drawn over all routes, so
/// a same-route relocate is possible.
fn inter_route_move<R: Rng>(candidate: &mut Assignment, rng: &mut R) {
    let non_empty = candidate.non_empty_routes();
    let Some(&from_idx) = non_empty.choose(rng) else {
        return;
    };

    let routes = candidate.routes_mut();
    let from_pos = rng.random_range(0..routes[from_idx].len());
    let order = routes[from_idx].remove(from_pos);

    let to_idx = rng.random_range(0..routes.len());
    // Insertion bound reflects the post-removal length when to == from.
    let to_pos = rng.random_range(0..=routes[to_idx].len());
    routes[to_idx].insert(to_pos, order);
}

/// Swaps one order between two distinct non-empty routes.
fn inter_route_swap<R: Rng>(candidate: &mut Assignment, rng: &mut R) {
    let non_empty = candidate.non_empty_routes();
    if non_empty.len() < 2 {
        return;
    }

    let (a, b) = distinct_pair(non_empty.len(), rng);
    let (ra, rb) = (non_empty[a], non_empty[b]);

    let routes = candidate.routes_mut();
    let pa = rng.random_range(0..routes[ra].len());
    let pb = rng.random_range(0..routes[rb].len());

    let tmp = routes[ra][pa];
    routes[ra][pa] = routes[rb][pb];
    routes[rb][pb] = tmp;
}

/// Two distinct indices drawn uniformly from `0..len`. Requires `len >= 2`.
fn distinct_pair<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
