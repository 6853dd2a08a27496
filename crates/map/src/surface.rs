use euclid::default::{Box2D, Point2D, Vector2D};
use input::{CursorIcon, Key};

use crate::projection::Projection;

/// The interactive map surface the dispatcher drives.
///
/// All points are in world coordinates.
pub trait Surface {
    fn projection(&self) -> &Projection;

    /// One discrete zoom step in, keeping `center` in place.
    fn zoom_in(&mut self, center: Point2D<f32>);
    /// One discrete zoom step out, keeping `center` in place.
    fn zoom_out(&mut self, center: Point2D<f32>);
    fn zoom_to_rect(&mut self, rect: Box2D<f32>);
    fn pan_by(&mut self, delta: Vector2D<f32>);

    fn set_cursor(&mut self, icon: CursorIcon);

    /// Selects the feature under `point`, or clears the selection when nothing is hit and
    /// `extend` is unset.
    fn select_at(&mut self, point: Point2D<f32>, extend: bool);
    fn select_in_rect(&mut self, rect: Box2D<f32>, extend: bool);
    fn has_selection(&self) -> bool;
    fn clear_selection(&mut self);
    /// Deletes the selection, recording an undo entry named `undo_label` when anything was
    /// removed. Returns whether anything was removed.
    fn delete_selection(&mut self, undo_label: &str) -> bool;

    /// Whether the window owning the surface holds the keyboard focus.
    fn has_focus(&self) -> bool;
    /// Whether a focused control, e.g. a text field, wants to handle `key` itself.
    fn focused_control_claims(&self, key: &Key) -> bool;

    /// Shows or hides the rectangle feedback of a drag in progress.
    fn set_rubber_band(&mut self, rect: Option<Box2D<f32>>);
    fn request_redraw(&mut self);
}
