use euclid::default::{Box2D, Point2D, Size2D, Transform2D, Vector2D};
use serde::{Deserialize, Serialize};

/// The current pan and zoom of a map view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Matrix taking world coords → viewport coords
    world_to_viewport: Transform2D<f32>,
    viewport: Size2D<f32>,
}

impl Projection {
    pub fn new(viewport: Size2D<f32>) -> Self {
        Self {
            world_to_viewport: Transform2D::identity(),
            viewport,
        }
    }

    pub fn get_viewport(&self) -> Size2D<f32> {
        self.viewport
    }
    pub fn set_viewport(&mut self, new_size: Size2D<f32>) {
        self.viewport = new_size;
    }

    /// The number of viewport pixels per world unit.
    pub fn scale(&self) -> f32 {
        self.world_to_viewport.m11
    }

    /// Pan by `delta` world units, the world point that was at `p` ends up at `p + delta`.
    pub fn pan_by(&mut self, delta: Vector2D<f32>) {
        let t = Transform2D::translation(delta.x, delta.y);
        // world → viewport = (translate_world) ∘ (old_world_to_viewport)
        self.world_to_viewport = t.then(&self.world_to_viewport);
    }

    /// Zoom about the **world** point `focus` by `factor`, `focus` stays put in the viewport.
    pub fn zoom_at(&mut self, focus: Point2D<f32>, factor: f32) {
        let zoom = Transform2D::translation(-focus.x, -focus.y)
            .then_scale(factor, factor)
            .then_translate(focus.to_vector());
        self.world_to_viewport = zoom.then(&self.world_to_viewport);
    }

    /// Fit the world rectangle `rect` into the viewport, centered.
    ///
    /// Empty rectangles are ignored.
    pub fn zoom_to_rect(&mut self, rect: Box2D<f32>) {
        if rect.is_empty() || self.viewport.is_empty() {
            return;
        }
        let scale = (self.viewport.width / rect.width()).min(self.viewport.height / rect.height());
        let center = rect.center();
        let viewport_center = Point2D::new(self.viewport.width / 2., self.viewport.height / 2.);
        self.world_to_viewport = Transform2D::translation(-center.x, -center.y)
            .then_scale(scale, scale)
            .then_translate(viewport_center.to_vector());
    }

    pub fn reset_zoom(&mut self) {
        self.world_to_viewport = Transform2D::identity();
    }

    pub fn world_to_viewport(&self, p: Point2D<f32>) -> Point2D<f32> {
        self.world_to_viewport.transform_point(p)
    }

    /// Map a point in viewport‐pixel space back to **world** coords.
    ///
    /// Returns `None` when the transform is degenerate.
    pub fn viewport_to_world(&self, p: Point2D<f32>) -> Option<Point2D<f32>> {
        self.world_to_viewport
            .inverse()
            .map(|inv| inv.transform_point(p))
    }
}

#[cfg(test)]
mod tests {
    use euclid::default::{Box2D, Point2D, Size2D, Vector2D};

    use super::Projection;

    fn approx_eq(a: Point2D<f32>, b: Point2D<f32>) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn zoom_keeps_focus_in_place() {
        let mut projection = Projection::new(Size2D::new(800., 600.));
        projection.pan_by(Vector2D::new(13., -7.));
        let focus = Point2D::new(120., 45.);
        let before = projection.world_to_viewport(focus);

        projection.zoom_at(focus, 2.);

        assert!(approx_eq(projection.world_to_viewport(focus), before));
        assert!((projection.scale() - 2.).abs() < 1e-6);
    }

    #[test]
    fn pan_moves_world_points() {
        let mut projection = Projection::new(Size2D::new(800., 600.));
        projection.zoom_at(Point2D::new(0., 0.), 4.);
        let origin = Point2D::new(10., 10.);
        let viewport_point = projection.world_to_viewport(origin);

        projection.pan_by(Vector2D::new(5., 0.));

        let world = projection.viewport_to_world(viewport_point).unwrap();
        assert!(approx_eq(world, Point2D::new(5., 10.)));
    }

    #[test]
    fn zoom_to_rect_centers_the_rect() {
        let mut projection = Projection::new(Size2D::new(800., 600.));
        let rect = Box2D::new(Point2D::new(100., 100.), Point2D::new(300., 200.));

        projection.zoom_to_rect(rect);

        assert!(approx_eq(
            projection.world_to_viewport(rect.center()),
            Point2D::new(400., 300.)
        ));
        assert!((projection.scale() - 4.).abs() < 1e-6);
    }

    #[test]
    fn zoom_to_empty_rect_is_ignored() {
        let mut projection = Projection::new(Size2D::new(800., 600.));
        let before = projection.clone();
        projection.zoom_to_rect(Box2D::new(Point2D::new(5., 5.), Point2D::new(5., 9.)));
        assert_eq!(projection, before);
    }

    #[test]
    fn degenerate_projection_has_no_world_point() {
        let mut projection = Projection::new(Size2D::new(800., 600.));
        projection.zoom_at(Point2D::new(0., 0.), 0.);
        assert_eq!(projection.viewport_to_world(Point2D::new(1., 1.)), None);
    }
}
