//! Scene: explicit ownership of obstacles and moving bodies.
//!
//! Obstacles are added once at startup and never change; balls are
//! mutated every tick. `step` runs one synchronous tick to completion, so
//! a host frame loop can call it back to back with drawing without any
//! state crossing the frame boundary.

use crate::collision;
use crate::items::{Circle, Segment};
use crate::vec2::Vec2;

pub struct Scene {
    obstacles: Vec<Segment>,
    balls: Vec<Circle>,
    acceleration: Vec2,
    elasticity: f32,
}

impl Scene {
    pub fn new(acceleration: Vec2, elasticity: f32) -> Scene {
        Scene {
            obstacles: Vec::new(),
            balls: Vec::new(),
            acceleration,
            elasticity,
        }
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.obstacles.push(segment);
    }

    pub fn add_ball(&mut self, ball: Circle) -> usize {
        self.balls.push(ball);
        self.balls.len() - 1
    }

    pub fn obstacles(&self) -> &[Segment] {
        &self.obstacles
    }

    pub fn balls(&self) -> &[Circle] {
        &self.balls
    }

    pub fn ball(&self, idx: usize) -> &Circle {
        &self.balls[idx]
    }

    /// Pointer-input hook: teleport a ball, leaving its velocity alone.
    /// Happens outside the integration step.
    pub fn set_ball_position(&mut self, idx: usize, position: Vec2) {
        self.balls[idx].position = position;
    }

    /// One tick: apply the constant acceleration to every ball, run a
    /// single resolution pass per obstacle per ball and a single pass
    /// over ball pairs, then advance positions. No iterative contact
    /// solving; with several simultaneous contacts the obstacles are
    /// simply resolved in insertion order.
    pub fn step(&mut self, dt: f32) {
        for ball in &mut self.balls {
            ball.apply_force(self.acceleration, dt);
            for segment in &self.obstacles {
                let hit = collision::test(ball, segment, self.elasticity);
                if hit.colliding {
                    collision::resolve(ball, segment.inv_mass(), &hit);
                }
            }
        }
        for i in 0..self.balls.len() {
            for j in (i + 1)..self.balls.len() {
                let (head, tail) = self.balls.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                let hit = collision::test_circles(a, b, self.elasticity);
                if hit.colliding {
                    collision::resolve_pair(a, b, &hit);
                }
            }
        }
        for ball in &mut self.balls {
            ball.integrate(dt);
        }
    }
}
