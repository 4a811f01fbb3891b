//! World-space to surface-local projection

use crate::pipeline::Vertex2D;
use multiball_math::Vec2;

/// Project a world-space position into a surface's local space
///
/// Pure translation by the surface's desktop origin. Positions that fall
/// outside the surface are still produced; clipping is left to the
/// rasterizer.
#[inline]
pub fn project_to_surface(world_pos: Vec2, surface_origin: Vec2) -> Vec2 {
    world_pos - surface_origin
}

/// Expand a local position into the two triangles of a size x size quad
///
/// The position names the quad's top-left corner.
pub fn quad_vertices(local: Vec2, size: f32, color: [f32; 4]) -> [Vertex2D; 6] {
    let (x0, y0) = (local.x, local.y);
    let (x1, y1) = (local.x + size, local.y + size);
    [
        Vertex2D::new([x0, y0], color),
        Vertex2D::new([x1, y0], color),
        Vertex2D::new([x1, y1], color),
        Vertex2D::new([x0, y0], color),
        Vertex2D::new([x1, y1], color),
        Vertex2D::new([x0, y1], color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_subtracts_origin() {
        let local = project_to_surface(Vec2::new(200.0, 200.0), Vec2::new(20.0, 20.0));
        assert_eq!(local, Vec2::new(180.0, 180.0));
    }

    #[test]
    fn test_projection_off_surface_not_clipped() {
        // A surface to the right of the ball still gets a (negative) position
        let local = project_to_surface(Vec2::new(200.0, 200.0), Vec2::new(520.0, 20.0));
        assert_eq!(local, Vec2::new(-320.0, 180.0));
    }

    #[test]
    fn test_projection_is_pure() {
        let world = Vec2::new(123.0, 456.0);
        let origin = Vec2::new(20.0, 20.0);
        let first = project_to_surface(world, origin);
        let second = project_to_surface(world, origin);
        assert_eq!(first, second);
    }

    #[test]
    fn test_quad_vertices_corners() {
        let quad = quad_vertices(Vec2::new(10.0, 20.0), 10.0, [1.0; 4]);

        assert_eq!(quad[0].position, [10.0, 20.0]);
        assert_eq!(quad[2].position, [20.0, 30.0]);
        // Both triangles share the top-left and bottom-right corners
        assert_eq!(quad[0].position, quad[3].position);
        assert_eq!(quad[2].position, quad[4].position);
        assert_eq!(quad[5].position, [10.0, 30.0]);
    }
}
