//! Bouncing-ball demo written in Rust.
//!
//! One tracked ball falls under gravity inside a closed quadrilateral of
//! four line segments and bounces elastically off them, with the contact
//! points drawn each frame. The mouse teleports the tracked ball; a
//! click drops an extra ball with a random velocity.

mod render;

use rbounce::collision;
use rbounce::items::{Circle, Segment};
use rbounce::scene::Scene;
use rbounce::vec2::Vec2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::{Duration, Instant};

/// Window title displayed in the title bar
const TITLE: &str = "Bounce in Rust";
/// Width of the simulation window in pixels
const WINDOW_WIDTH: u32 = 660;
/// Height of the simulation window in pixels
const WINDOW_HEIGHT: u32 = 480;
/// Background color for the canvas
const BACKGROUND: Color = Color::BLACK;
/// Downward pull applied to every ball, in pixels per second squared
const GRAVITY: Vec2 = Vec2 { x: 0.0, y: 240.0 };
/// Coefficient of restitution; 1 is perfectly elastic
const ELASTICITY: f32 = 1.0;
/// Tracked ball when free of contacts
const BALL_COLOR: Color = Color::RED;
/// Tracked ball while any obstacle reports a collision
const HIT_COLOR: Color = Color::GREEN;
const WALL_COLOR: Color = Color::RED;
const CONTACT_COLOR: Color = Color::WHITE;

/// Main loop body: draws the scene with its contact overlay, then runs
/// one physics tick.
fn main_loop(scene: &mut Scene, tracked: usize, canvas: &mut Canvas<Window>, dt: f32) {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    for segment in scene.obstacles() {
        render::draw_segment(canvas, segment, WALL_COLOR);
    }

    // The tracked ball shows its nearest point on every obstacle and
    // turns green while overlapping any of them.
    let ball = scene.ball(tracked);
    let mut touching = false;
    for segment in scene.obstacles() {
        let hit = collision::test(ball, segment, ELASTICITY);
        render::draw_contact(canvas, ball.position, hit.point, CONTACT_COLOR);
        touching = touching || hit.colliding;
    }

    for (idx, ball) in scene.balls().iter().enumerate() {
        let color = if idx == tracked && touching { HIT_COLOR } else { BALL_COLOR };
        render::draw_ball(canvas, ball, color);
    }

    scene.step(dt);
}

/// Builds the closed quadrilateral the balls bounce inside and the
/// tracked ball at its center.
fn set_up(scene: &mut Scene) -> usize {
    let corners = [
        Vec2::new(50.0, 90.0),
        Vec2::new(600.0, 200.0),
        Vec2::new(600.0, 400.0),
        Vec2::new(50.0, 290.0),
    ];
    scene.add_segment(Segment::new(corners[0], corners[1], None));
    scene.add_segment(Segment::new(corners[1], corners[2], None));
    scene.add_segment(Segment::new(corners[3], corners[2], None));
    scene.add_segment(Segment::new(corners[0], corners[3], None));

    scene.add_ball(Circle::new(Vec2::new(200.0, 200.0), None, Some(30.0), None))
}

/// Drops an extra ball at the pointer with a random sideways kick.
fn spawn_ball(scene: &mut Scene, x: f32, y: f32) {
    let v: f32 = rand::random_range(-120.0..120.0);
    scene.add_ball(Circle::new(
        Vec2::new(x, y),
        Some(Vec2::new(v, 0.0)),
        Some(12.0),
        None,
    ));
}

fn main() {
    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init().unwrap();
    let video_subsystem = sdl_context.video().unwrap();

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .unwrap();

    let mut canvas = window.into_canvas().build().unwrap();
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let mut scene = Scene::new(GRAVITY, ELASTICITY);
    let tracked = set_up(&mut scene);

    let mut last_frame_time = Instant::now();
    let mut event_pump = sdl_context.event_pump().unwrap();

    // Cancellation is simply breaking out and not scheduling another
    // tick; each tick is synchronous so nothing is left in flight.
    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => break 'running,
                Event::MouseMotion { x, y, .. } => {
                    scene.set_ball_position(tracked, Vec2::new(x as f32, y as f32));
                }
                Event::MouseButtonDown { x, y, .. } => {
                    spawn_ball(&mut scene, x as f32, y as f32);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        main_loop(&mut scene, tracked, &mut canvas, dt);

        canvas.present();
        // Target 60 FPS
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
}
