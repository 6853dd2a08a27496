use euclid::default::{Box2D, Point2D, Vector2D};
use input::{CursorIcon, KeyboardEvent, MouseEvent};

mod pan;
mod select;
mod zoom;

pub use pan::PanTool;
pub use select::SelectTool;
pub use zoom::{ZoomInTool, ZoomOutTool};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
    ZoomIn,
    ZoomOut,
    /// Any tool defined outside of this crate.
    Custom,
}

impl ToolKind {
    pub const fn default_cursor(&self) -> CursorIcon {
        match self {
            ToolKind::Select => CursorIcon::Default,
            ToolKind::Pan => CursorIcon::Grab,
            ToolKind::ZoomIn => CursorIcon::ZoomIn,
            ToolKind::ZoomOut => CursorIcon::ZoomOut,
            ToolKind::Custom => CursorIcon::Crosshair,
        }
    }

    /// Whether the dispatcher may swap this tool in while modifier keys are held.
    pub const fn is_temporary(&self) -> bool {
        matches!(self, ToolKind::Pan | ToolKind::ZoomIn | ToolKind::ZoomOut)
    }
}

/// Creates a fresh instance of a built in tool, `None` for [`ToolKind::Custom`].
pub fn builtin(kind: ToolKind) -> Option<Box<dyn Tool>> {
    match kind {
        ToolKind::Select => Some(Box::new(SelectTool::new())),
        ToolKind::Pan => Some(Box::new(PanTool::new())),
        ToolKind::ZoomIn => Some(Box::new(ZoomInTool::new())),
        ToolKind::ZoomOut => Some(Box::new(ZoomOutTool::new())),
        ToolKind::Custom => None,
    }
}

/// An interaction mode of the map view.
///
/// Points are in world coordinates, the raw event is passed along for its button and modifiers.
/// Every callback returns the messages the dispatcher applies to the surface.
///
/// `pause`/`resume` bracket a temporary suspension and must keep any operation in progress,
/// `activate`/`deactivate` start and end a tool's lifetime as the active tool.
#[allow(unused_variables)]
pub trait Tool {
    fn kind(&self) -> ToolKind;

    fn default_cursor(&self) -> CursorIcon {
        self.kind().default_cursor()
    }

    fn pointer_down(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        vec![]
    }
    fn drag_start(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        vec![]
    }
    fn drag_update(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        vec![]
    }
    fn drag_end(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        vec![]
    }
    fn click(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        vec![]
    }
    fn enter(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        vec![]
    }
    fn exit(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        vec![]
    }
    fn moved(&mut self, point: Point2D<f32>, event: &MouseEvent) -> Vec<ToolMessage> {
        vec![]
    }

    fn key_event(&mut self, event: &KeyboardEvent) -> KeyResponse {
        KeyResponse::ignored()
    }

    fn activate(&mut self) -> Vec<ToolMessage> {
        vec![]
    }
    fn deactivate(&mut self) -> Vec<ToolMessage> {
        vec![]
    }
    fn pause(&mut self) -> Vec<ToolMessage> {
        vec![]
    }
    fn resume(&mut self) -> Vec<ToolMessage> {
        vec![]
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub messages: Vec<ToolMessage>,
}

impl KeyResponse {
    pub const fn ignored() -> Self {
        Self {
            consumed: false,
            messages: vec![],
        }
    }
    pub const fn consumed(messages: Vec<ToolMessage>) -> Self {
        Self {
            consumed: true,
            messages,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToolMessage {
    CursorIcon(CursorIcon),

    PanBy(Vector2D<f32>),
    ZoomIn(Point2D<f32>),
    ZoomOut(Point2D<f32>),
    ZoomToRect(Box2D<f32>),

    SelectAt { point: Point2D<f32>, extend: bool },
    SelectInRect { rect: Box2D<f32>, extend: bool },
    ClearSelection,

    RubberBand(Box2D<f32>),
    ClearRubberBand,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{ToolKind, builtin};

    #[test]
    fn builtin_tools_report_their_kind() {
        for kind in ToolKind::iter() {
            match builtin(kind) {
                Some(tool) => assert_eq!(tool.kind(), kind),
                None => assert_eq!(kind, ToolKind::Custom),
            }
        }
    }

    #[test]
    fn only_navigation_tools_are_temporary() {
        let temporary: Vec<_> = ToolKind::iter().filter(ToolKind::is_temporary).collect();
        assert_eq!(
            temporary,
            vec![ToolKind::Pan, ToolKind::ZoomIn, ToolKind::ZoomOut]
        );
    }

    #[test]
    fn kinds_display_in_snake_case() {
        assert_eq!(ToolKind::ZoomOut.to_string(), "zoom_out");
        let name: &'static str = ToolKind::Select.into();
        assert_eq!(name, "select");
    }
}
