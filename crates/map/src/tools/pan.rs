use euclid::default::Point2D;
use input::{CursorIcon, MouseEvent};

use crate::tools::{Tool, ToolKind, ToolMessage};

/// Drags the map around.
///
/// The world point grabbed on the first drag sample stays under the pointer for the whole drag.
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct PanTool {
    pub grab: Option<Point2D<f32>>,
}
impl PanTool {
    pub fn new() -> Self {
        Self { grab: None }
    }

    fn drag_to(&mut self, point: Point2D<f32>) -> Vec<ToolMessage> {
        match self.grab {
            Some(origin) => vec![ToolMessage::PanBy(point - origin)],
            None => {
                self.grab = Some(point);
                vec![ToolMessage::CursorIcon(CursorIcon::Grabbing)]
            }
        }
    }
}

impl Tool for PanTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pan
    }

    fn pointer_down(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.grab = Some(point);
        vec![ToolMessage::CursorIcon(CursorIcon::Grabbing)]
    }
    fn drag_start(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.drag_to(point)
    }
    fn drag_update(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.drag_to(point)
    }
    fn drag_end(&mut self, _point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.grab = None;
        vec![ToolMessage::CursorIcon(self.default_cursor())]
    }
    fn click(&mut self, _point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.grab = None;
        vec![ToolMessage::CursorIcon(self.default_cursor())]
    }
    fn enter(&mut self, _point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.grab = None;
        vec![]
    }
    fn exit(&mut self, _point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.grab = None;
        vec![]
    }

    fn activate(&mut self) -> Vec<ToolMessage> {
        self.grab = None;
        vec![]
    }
    fn deactivate(&mut self) -> Vec<ToolMessage> {
        self.grab = None;
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use euclid::default::{Point2D, Vector2D};
    use input::{CursorIcon, MouseButton, MouseEvent};

    use super::PanTool;
    use crate::tools::{Tool, ToolMessage};

    #[test]
    fn drag_pans_relative_to_the_grab_point() {
        let mut tool = PanTool::new();
        let event = MouseEvent::press(Point2D::new(0., 0.), MouseButton::Left);

        assert_eq!(
            tool.pointer_down(Point2D::new(10., 10.), &event),
            vec![ToolMessage::CursorIcon(CursorIcon::Grabbing)]
        );
        assert_eq!(
            tool.drag_start(Point2D::new(14., 7.), &event),
            vec![ToolMessage::PanBy(Vector2D::new(4., -3.))]
        );
        assert_eq!(
            tool.drag_end(Point2D::new(10., 10.), &event),
            vec![ToolMessage::CursorIcon(CursorIcon::Grab)]
        );
        assert_eq!(tool.grab, None);
    }

    #[test]
    fn drag_without_press_grabs_lazily() {
        let mut tool = PanTool::new();
        let event = MouseEvent::motion(Point2D::new(0., 0.));

        assert_eq!(
            tool.drag_update(Point2D::new(3., 3.), &event),
            vec![ToolMessage::CursorIcon(CursorIcon::Grabbing)]
        );
        assert_eq!(
            tool.drag_update(Point2D::new(5., 3.), &event),
            vec![ToolMessage::PanBy(Vector2D::new(2., 0.))]
        );
    }
}
