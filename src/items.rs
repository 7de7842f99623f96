use crate::EPSILON;
use crate::vec2::Vec2;

const MAX_VELOCITY: f32 = 2000.0;
const MIN_VELOCITY: f32 = -2000.0;

/// Static line-segment obstacle. Created once, never mutated.
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub mass: f32,
}

impl Segment {
    /// Mass defaults to infinite, which makes the segment immovable in
    /// impulse math (`inv_mass` is then exactly zero).
    pub fn new(start: Vec2, end: Vec2, mass: Option<f32>) -> Segment {
        Segment {
            start,
            end,
            mass: mass.unwrap_or(f32::INFINITY),
        }
    }

    pub fn inv_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// Segments never move, but the collision formulas are written
    /// against a relative velocity so they would generalize.
    pub fn velocity(&self) -> Vec2 {
        Vec2::ZERO
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).magnitude()
    }

    /// Unit direction from `start` to `end`, `ZERO` for a degenerate
    /// segment.
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize()
    }

    /// Closest point to `p` constrained to lie on the segment: the
    /// projection of `p` onto the carrying line, clamped to the
    /// endpoints.
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        let length = self.length();
        if length < EPSILON {
            return self.start;
        }
        let unit = self.direction();
        let t = (p - self.start).dot(unit);
        if t < 0.0 {
            return self.start;
        }
        if t > length {
            return self.end;
        }
        self.start + unit * t
    }
}

/// Moving body: a circle with velocity and mass, mutated once per tick
/// by gravity and by collision impulses.
pub struct Circle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub mass: f32,
}

impl Circle {
    pub fn new(
        position: Vec2,
        velocity: Option<Vec2>,
        radius: Option<f32>,
        mass: Option<f32>,
    ) -> Circle {
        Circle {
            position,
            velocity: velocity.unwrap_or(Vec2::ZERO),
            radius: radius.unwrap_or(10.0),
            mass: mass.unwrap_or(1.0),
        }
    }

    pub fn inv_mass(&self) -> f32 {
        1.0 / self.mass
    }

    pub fn apply_force(&mut self, accel: Vec2, dt: f32) {
        self.velocity = self.velocity + accel * dt;
    }

    /// Advance position by the current velocity, clamping each velocity
    /// component so a bad frame cannot launch the body off to infinity.
    pub fn integrate(&mut self, dt: f32) {
        self.position = self.position + self.velocity * dt;
        self.velocity = Vec2::new(
            self.velocity.x.clamp(MIN_VELOCITY, MAX_VELOCITY),
            self.velocity.y.clamp(MIN_VELOCITY, MAX_VELOCITY),
        );
    }
}
