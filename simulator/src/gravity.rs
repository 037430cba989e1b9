//! Newtonian gravity between every pair of orbiters.

use crate::bodies::Orbiter;

use euclid::default::Vector2D;

/// Recompute every orbiter's acceleration from scratch.
///
/// Body `i` is pulled towards every other body `j` by `G * m_j / |r|^3 * r`,
/// where `r` points from `i` to `j`. Bodies sitting exactly on top of each
/// other don't pull on each other at all. It's O(n^2) but n is tiny.
pub fn accumulate_accelerations(orbiters: &mut [Orbiter], grav_constant: f64) {
    for Orbiter(_, kmat) in orbiters.iter_mut() {
        kmat.acc = Vector2D::zero();
    }

    for i in 0..orbiters.len() {
        let mut acc = Vector2D::zero();
        let pos = orbiters[i].1.pos;
        for (j, Orbiter(other_body, other_kmat)) in orbiters.iter().enumerate() {
            if i == j {
                continue;
            }
            let r = other_kmat.pos - pos;
            let dist = r.length();
            if dist == 0.0 {
                continue;
            }
            acc += r * (grav_constant * other_body.mass / (dist * dist * dist));
        }
        orbiters[i].1.acc = acc;
    }
}
