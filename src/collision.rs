//! Collision test and impulse resolution.
//!
//! Tests are pure: they read the current state and build a fresh
//! [`Collision`] record each call, so they are safe to run every frame
//! against every obstacle. Resolution mutates only circle velocities.

use crate::EPSILON;
use crate::items::{Circle, Segment};
use crate::vec2::Vec2;

/// Result of one collision test. Built fresh per test, never persisted
/// across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    pub colliding: bool,
    /// Nearest point on the obstacle to the circle's center.
    pub point: Vec2,
    /// Velocity of the circle relative to the obstacle.
    pub relative_velocity: Vec2,
    /// Coefficient of restitution to resolve with; 1 = perfectly elastic.
    pub elasticity: f32,
}

/// Circle vs. static segment. Colliding iff the nearest point on the
/// segment is strictly closer than the radius (exactly touching is not a
/// collision).
pub fn test(circle: &Circle, segment: &Segment, elasticity: f32) -> Collision {
    let point = segment.nearest_point(circle.position);
    Collision {
        colliding: point.distance(circle.position) < circle.radius,
        point,
        relative_velocity: circle.velocity - segment.velocity(),
        elasticity,
    }
}

/// Circle vs. circle. The contact point sits on `a`'s rim along the
/// center-to-center axis, so the normal derived from it points from `b`
/// toward `a`.
pub fn test_circles(a: &Circle, b: &Circle, elasticity: f32) -> Collision {
    let axis = a.position - b.position;
    let point = a.position - axis.normalize() * a.radius;
    let reach = a.radius + b.radius;
    Collision {
        colliding: axis.magnitude_squared() < reach * reach,
        point,
        relative_velocity: a.velocity - b.velocity,
        elasticity,
    }
}

/// Impulse scalar along `normal`, or `None` when the pair is already
/// separating (resolving then would pull the body back into the
/// obstacle).
fn impulse_scalar(collision: &Collision, normal: Vec2, inv_mass_sum: f32) -> Option<f32> {
    let vel_along_normal = collision.relative_velocity.dot(normal);
    if vel_along_normal >= 0.0 {
        return None;
    }
    Some(-(1.0 + collision.elasticity) * vel_along_normal / inv_mass_sum)
}

/// Contact normal from the contact point toward the circle's center, or
/// `None` when the two coincide (degenerate contact, skipped entirely so
/// no NaN can reach a velocity).
fn contact_normal(circle: &Circle, collision: &Collision) -> Option<Vec2> {
    let offset = circle.position - collision.point;
    if offset.magnitude() < EPSILON {
        return None;
    }
    Some(offset.normalize())
}

/// Apply the collision impulse to a single movable circle. The other
/// body contributes only its inverse mass: zero for a static segment,
/// which reduces the formula to a plain reflection scaled by the
/// elasticity. No positional correction is performed.
pub fn resolve(circle: &mut Circle, other_inv_mass: f32, collision: &Collision) {
    let Some(normal) = contact_normal(circle, collision) else {
        return;
    };
    let inv_mass_sum = circle.inv_mass() + other_inv_mass;
    let Some(j) = impulse_scalar(collision, normal, inv_mass_sum) else {
        return;
    };
    circle.velocity = circle.velocity + normal * (j * circle.inv_mass());
}

/// Apply equal and opposite impulses to two movable circles. `collision`
/// must come from [`test_circles`] with the same argument order.
pub fn resolve_pair(a: &mut Circle, b: &mut Circle, collision: &Collision) {
    let Some(normal) = contact_normal(a, collision) else {
        return;
    };
    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    let Some(j) = impulse_scalar(collision, normal, inv_mass_sum) else {
        return;
    };
    a.velocity = a.velocity + normal * (j * a.inv_mass());
    b.velocity = b.velocity - normal * (j * b.inv_mass());
}
