use euclid::default::{Box2D, Point2D};
use input::MouseEvent;

use crate::tools::{Tool, ToolKind, ToolMessage};

/// Zooms in on click, or onto the rectangle dragged out by the pointer.
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct ZoomInTool {
    pub anchor: Option<Point2D<f32>>,
    pub band: Option<Box2D<f32>>,
}
impl ZoomInTool {
    pub fn new() -> Self {
        Self {
            anchor: None,
            band: None,
        }
    }

    fn stretch_band(&mut self, point: Point2D<f32>) -> Vec<ToolMessage> {
        let anchor = *self.anchor.get_or_insert(point);
        let band = Box2D::from_points([anchor, point]);
        self.band = Some(band);
        vec![ToolMessage::RubberBand(band)]
    }

    fn reset(&mut self) -> Vec<ToolMessage> {
        self.anchor = None;
        match self.band.take() {
            Some(_) => vec![ToolMessage::ClearRubberBand],
            None => vec![],
        }
    }
}

impl Tool for ZoomInTool {
    fn kind(&self) -> ToolKind {
        ToolKind::ZoomIn
    }

    fn pointer_down(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.anchor = Some(point);
        vec![]
    }
    fn drag_start(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.stretch_band(point)
    }
    fn drag_update(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.stretch_band(point)
    }
    fn drag_end(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.stretch_band(point);
        self.anchor = None;
        match self.band.take() {
            Some(rect) if !rect.is_empty() => {
                vec![ToolMessage::ClearRubberBand, ToolMessage::ZoomToRect(rect)]
            }
            // A band without area is a click that jittered.
            Some(_) => vec![ToolMessage::ClearRubberBand, ToolMessage::ZoomIn(point)],
            None => vec![],
        }
    }
    fn click(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.anchor = None;
        vec![ToolMessage::ZoomIn(point)]
    }
    fn exit(&mut self, _point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        self.reset()
    }

    fn deactivate(&mut self) -> Vec<ToolMessage> {
        self.reset()
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

/// Zooms out around the clicked point.
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct ZoomOutTool {}
impl ZoomOutTool {
    pub fn new() -> Self {
        Self {}
    }
}

impl Tool for ZoomOutTool {
    fn kind(&self) -> ToolKind {
        ToolKind::ZoomOut
    }

    fn click(&mut self, point: Point2D<f32>, _event: &MouseEvent) -> Vec<ToolMessage> {
        vec![ToolMessage::ZoomOut(point)]
    }
}
