//! Working solution representation for the solvers.
//!
//! Routes are stored as `Vec<Vec<usize>>` (order index sequences, one route
//! per vehicle, empty routes included). This keeps candidate generation a
//! plain clone-and-splice on integer vectors; full [`Route`] objects with IDs
//! and distances are only built once, from the final best assignment.
//!
//! [`Route`]: super::Route

/// An assignment of every order to exactly one vehicle route.
///
/// `routes[i]` is the ordered sequence of order indices served by vehicle
/// `i`, indices pointing into the problem's order slice. The solvers maintain
/// the partition invariant: across all routes, every order index appears
/// exactly once — no duplicates, no omissions.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Assignment;
///
/// let a = Assignment::from_routes(vec![vec![0, 2], vec![1]]);
/// assert_eq!(a.num_routes(), 2);
/// assert_eq!(a.order_count(), 3);
/// assert!(a.is_partition(3));
/// assert!(!a.is_partition(4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    routes: Vec<Vec<usize>>,
}

impl Assignment {
    /// Creates an assignment with one empty route per vehicle.
    pub fn empty(num_vehicles: usize) -> Self {
        Self {
            routes: vec![Vec::new(); num_vehicles],
        }
    }

    /// Creates an assignment from explicit route sequences.
    pub fn from_routes(routes: Vec<Vec<usize>>) -> Self {
        Self { routes }
    }

    /// Returns the routes as order index sequences.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Returns mutable routes.
    pub fn routes_mut(&mut self) -> &mut Vec<Vec<usize>> {
        &mut self.routes
    }

    /// Number of routes (= number of vehicles).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of assigned orders across all routes.
    pub fn order_count(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }

    /// Indices of routes that currently serve at least one order.
    pub fn non_empty_routes(&self) -> Vec<usize> {
        (0..self.routes.len())
            .filter(|&i| !self.routes[i].is_empty())
            .collect()
    }

    /// Checks the partition invariant: every order index in
    /// `0..order_count` appears exactly once across all routes.
    pub fn is_partition(&self, order_count: usize) -> bool {
        let mut seen = vec![false; order_count];
        for route in &self.routes {
            for &idx in route {
                if idx >= order_count || seen[idx] {
                    return false;
                }
                seen[idx] = true;
            }
        }
        seen.iter().all(|&s| s)
    }
}
