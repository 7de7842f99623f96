use rbounce::items::{Circle, Segment};
use rbounce::vec2::Vec2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};

/// The gfx primitives interpret color bytes in ABGR order.
fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

pub fn draw_segment<T: RenderTarget>(canvas: &mut Canvas<T>, segment: &Segment, color: Color) {
    let _ = canvas.thick_line(
        segment.start.x as i16,
        segment.start.y as i16,
        segment.end.x as i16,
        segment.end.y as i16,
        1,
        to_abgr(color),
    );
}

pub fn draw_ball<T: RenderTarget>(canvas: &mut Canvas<T>, ball: &Circle, color: Color) {
    let _ = canvas.filled_circle(
        ball.position.x as i16,
        ball.position.y as i16,
        ball.radius as i16,
        to_abgr(color),
    );
}

/// Debug overlay for one contact: the nearest point on the obstacle and
/// a guide line from the ball's center to it.
pub fn draw_contact<T: RenderTarget>(canvas: &mut Canvas<T>, from: Vec2, point: Vec2, color: Color) {
    let abgr = to_abgr(color);
    let _ = canvas.filled_circle(point.x as i16, point.y as i16, 2, abgr);
    let _ = canvas.line(
        from.x as i16,
        from.y as i16,
        point.x as i16,
        point.y as i16,
        abgr,
    );
}
