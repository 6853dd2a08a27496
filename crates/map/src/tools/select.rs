use euclid::default::{Box2D, Point2D};
use input::{Key, KeyboardEvent, KeyboardEventKind, Modifiers, MouseEvent, SpecialKey};

use crate::tools::{KeyResponse, Tool, ToolKind, ToolMessage};

/// Selects map features by clicking them or by dragging a rubber band around them.
///
/// Holding shift extends the current selection instead of replacing it.
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct SelectTool {
    pub initial_point: Option<Point2D<f32>>,
    pub band: Option<Box2D<f32>>,
}
impl SelectTool {
    pub fn new() -> Self {
        Self {
            initial_point: None,
            band: None,
        }
    }

    fn stretch_band(&mut self, point: Point2D<f32>) -> Vec<ToolMessage> {
        let anchor = *self.initial_point.get_or_insert(point);
        let band = Box2D::from_points([anchor, point]);
        self.band = Some(band);
        vec![ToolMessage::RubberBand(band)]
    }

    fn cancel(&mut self) -> Vec<ToolMessage> {
        self.initial_point = None;
        match self.band.take() {
            Some(_) => vec![ToolMessage::ClearRubberBand],
            None => vec![],
        }
    }
}

fn extends(event: &MouseEvent) -> bool {
    event.modifiers.contains(Modifiers::SHIFT)
}

impl Tool for SelectTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Select
    }

    fn pointer_down(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.initial_point = Some(point);
        vec![]
    }
    fn drag_start(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.stretch_band(point)
    }
    fn drag_update(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.stretch_band(point)
    }
    fn drag_end(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        self.stretch_band(point);
        self.initial_point = None;
        match self.band.take() {
            Some(rect) => vec![
                ToolMessage::ClearRubberBand,
                ToolMessage::SelectInRect {
                    rect,
                    extend: extends(event),
                },
            ],
            None => vec![],
        }
    }
    fn click(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        self.initial_point = None;
        vec![ToolMessage::SelectAt {
            point,
            extend: extends(event),
        }]
    }
    fn exit(&mut self, _point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.cancel()
    }

    fn key_event(&mut self, event: &KeyboardEvent) -> KeyResponse {
        match &event.kind {
            KeyboardEventKind::Press(Key::SpecialKey(SpecialKey::Escape))
                if self.band.is_some() =>
            {
                KeyResponse::consumed(self.cancel())
            }
            KeyboardEventKind::Press(Key::SpecialKey(SpecialKey::Escape)) => KeyResponse {
                consumed: false,
                messages: vec![ToolMessage::ClearSelection],
            },
            _ => KeyResponse::ignored(),
        }
    }

    fn deactivate(&mut self) -> Vec<ToolMessage> {
        self.cancel()
    }
    fn pause(&mut self) -> Vec<ToolMessage> {
        match self.band {
            Some(_) => vec![ToolMessage::ClearRubberBand],
            None => vec![],
        }
    }
    fn resume(&mut self) -> Vec<ToolMessage> {
        match self.band {
            Some(band) => vec![ToolMessage::RubberBand(band)],
            None => vec![],
        }
    }
}
