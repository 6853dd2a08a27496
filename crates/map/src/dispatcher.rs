//! Routes pointer and keyboard input to the active tool.
//!
//! Besides forwarding events, the dispatcher swaps in temporary navigation tools while modifier
//! keys are held over the map:
//!
//! | held keys                                    | tool     |
//! |----------------------------------------------|----------|
//! | space only                                   | pan      |
//! | primary and secondary                        | zoom out |
//! | secondary, while zoom in is active           | zoom out |
//! | primary without secondary                    | zoom in  |
//!
//! The tool that was active before the first swap is paused and kept aside, and resumed once the
//! keys holding the temporary tool are released again.
use euclid::default::Point2D;
use input::{Key, KeyboardEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, trace, warn};

use crate::{
    InputResult,
    config::{InputConfig, PrimaryModifier},
    surface::Surface,
    tools::{self, Tool, ToolKind, ToolMessage},
};

/// Undo label of selections removed with the delete key.
pub const DELETE_UNDO_LABEL: &str = "Delete";

/// The three keys that select temporary tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackedKey {
    Space,
    Primary,
    Secondary,
}

impl TrackedKey {
    pub fn classify(key: &Key, primary: PrimaryModifier) -> Option<Self> {
        if key.is_space() {
            Some(TrackedKey::Space)
        } else if primary.matches(key) {
            Some(TrackedKey::Primary)
        } else if key.is_alt() {
            Some(TrackedKey::Secondary)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub space: bool,
    pub primary: bool,
    pub secondary: bool,
}

impl ModifierState {
    pub fn set(&mut self, key: TrackedKey, held: bool) {
        match key {
            TrackedKey::Space => self.space = held,
            TrackedKey::Primary => self.primary = held,
            TrackedKey::Secondary => self.secondary = held,
        }
    }

    /// Whether the held keys still keep the temporary tool `kind` active.
    pub fn holds(&self, kind: ToolKind) -> bool {
        match kind {
            ToolKind::Pan => self.space,
            ToolKind::ZoomIn => self.primary,
            ToolKind::ZoomOut => self.secondary,
            ToolKind::Select | ToolKind::Custom => false,
        }
    }
}

/// Everything the dispatcher remembers between events, apart from the tools themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatcherState {
    pub modifiers: ModifierState,
    /// Whether the pointer is over the map.
    pub pointer_over: bool,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Set once the current press turned into a drag, so that no click follows it.
    pub suppress_click: bool,
    /// The button held down, tracked for raw events only.
    pub pressed: Option<MouseButton>,
}

/// Picks the temporary tool for the held keys, `None` keeps the current tool.
///
/// Rules are checked in order and the first match wins.
pub fn select_tool(modifiers: ModifierState, active: Option<ToolKind>) -> Option<ToolKind> {
    let ModifierState {
        space,
        primary,
        secondary,
    } = modifiers;
    if space && !primary && !secondary && active != Some(ToolKind::Pan) {
        Some(ToolKind::Pan)
    } else if primary && secondary && active != Some(ToolKind::ZoomOut) {
        Some(ToolKind::ZoomOut)
    } else if secondary && active == Some(ToolKind::ZoomIn) {
        Some(ToolKind::ZoomOut)
    } else if primary && !secondary && active != Some(ToolKind::ZoomIn) {
        Some(ToolKind::ZoomIn)
    } else {
        None
    }
}

type MotionObserver = Box<dyn FnMut(Option<Point2D<f32>>)>;

pub struct ToolDispatcher {
    active: Option<Box<dyn Tool>>,
    suspended: Option<Box<dyn Tool>>,
    state: DispatcherState,
    config: InputConfig,
    motion_observers: Vec<MotionObserver>,
}

impl ToolDispatcher {
    /// A dispatcher without any tool, set one with [`ToolDispatcher::set_tool`].
    pub fn new(config: InputConfig) -> Self {
        Self {
            active: None,
            suspended: None,
            state: DispatcherState::default(),
            config,
            motion_observers: Vec::new(),
        }
    }

    pub fn with_tool(config: InputConfig, surface: &mut dyn Surface, tool: Box<dyn Tool>) -> Self {
        let mut dispatcher = Self::new(config);
        dispatcher.set_tool(surface, tool);
        dispatcher
    }

    pub const fn state(&self) -> &DispatcherState {
        &self.state
    }
    pub const fn config(&self) -> &InputConfig {
        &self.config
    }
    pub fn active_tool(&self) -> Option<&dyn Tool> {
        self.active.as_deref()
    }
    pub fn active_kind(&self) -> Option<ToolKind> {
        self.active.as_ref().map(|tool| tool.kind())
    }
    pub fn suspended_kind(&self) -> Option<ToolKind> {
        self.suspended.as_ref().map(|tool| tool.kind())
    }

    /// Registers a callback for pointer positions over the map, `None` once the pointer left.
    pub fn add_motion_observer<F>(&mut self, observer: F)
    where
        F: FnMut(Option<Point2D<f32>>) + 'static,
    {
        self.motion_observers.push(Box::new(observer));
    }

    /// Makes `tool` the active tool, ending the current and any suspended tool.
    pub fn set_tool(&mut self, surface: &mut dyn Surface, tool: Box<dyn Tool>) {
        if let Some(mut old) = self.active.take() {
            handle_tool_messages(surface, old.deactivate());
        }
        if let Some(mut suspended) = self.suspended.take() {
            debug!("discarding suspended {} tool", suspended.kind());
            handle_tool_messages(surface, suspended.deactivate());
        }
        self.activate(surface, tool);
    }

    fn activate(&mut self, surface: &mut dyn Surface, mut tool: Box<dyn Tool>) {
        debug!("activating {} tool", tool.kind());
        let messages = tool.activate();
        handle_tool_messages(surface, messages);
        surface.set_cursor(tool.default_cursor());
        self.active = Some(tool);
    }

    /// Swaps in a temporary tool, keeping the first preempted tool aside.
    fn switch_temporary(&mut self, surface: &mut dyn Surface, kind: ToolKind) {
        let Some(tool) = tools::builtin(kind) else {
            warn!("no built in tool for {kind}");
            return;
        };
        if let Some(mut old) = self.active.take() {
            if self.suspended.is_none() {
                debug!("suspending {} tool", old.kind());
                handle_tool_messages(surface, old.pause());
                self.suspended = Some(old);
            } else {
                handle_tool_messages(surface, old.deactivate());
            }
        }
        self.activate(surface, tool);
    }

    /// Ends the temporary tool and resumes the suspended one, returns whether one was pending.
    fn restore_suspended(&mut self, surface: &mut dyn Surface) -> bool {
        let Some(mut tool) = self.suspended.take() else {
            return false;
        };
        if let Some(mut temporary) = self.active.take() {
            handle_tool_messages(surface, temporary.deactivate());
        }
        debug!("restoring {} tool", tool.kind());
        let messages = tool.resume();
        handle_tool_messages(surface, messages);
        surface.set_cursor(tool.default_cursor());
        self.active = Some(tool);
        true
    }

    fn notify_motion(&mut self, point: Option<Point2D<f32>>) {
        for observer in &mut self.motion_observers {
            observer(point);
        }
    }

    fn forward<F>(&mut self, surface: &mut dyn Surface, callback: F)
    where
        F: FnOnce(&mut dyn Tool) -> Vec<ToolMessage>,
    {
        if let Some(tool) = self.active.as_deref_mut() {
            let messages = callback(tool);
            handle_tool_messages(surface, messages);
        }
    }

    pub fn pointer_down(
        &mut self,
        surface: &mut dyn Surface,
        point: Point2D<f32>,
        event: &MouseEvent,
    ) {
        self.state.pointer_over = true;
        self.state.dragging = false;
        self.state.suppress_click = false;
        self.forward(surface, |tool| tool.pointer_down(point, event));
    }

    pub fn pointer_dragged(
        &mut self,
        surface: &mut dyn Surface,
        point: Point2D<f32>,
        event: &MouseEvent,
    ) {
        if self.state.dragging {
            self.forward(surface, |tool| tool.drag_update(point, event));
        } else {
            self.forward(surface, |tool| tool.drag_start(point, event));
            self.state.dragging = true;
            self.state.suppress_click = true;
        }
        self.notify_motion(Some(point));
    }

    pub fn pointer_up(
        &mut self,
        surface: &mut dyn Surface,
        point: Point2D<f32>,
        event: &MouseEvent,
    ) {
        if self.state.dragging {
            self.forward(surface, |tool| tool.drag_end(point, event));
        }
        self.state.dragging = false;
    }

    pub fn pointer_clicked(
        &mut self,
        surface: &mut dyn Surface,
        point: Point2D<f32>,
        event: &MouseEvent,
    ) {
        if self.state.dragging || self.state.suppress_click {
            trace!("click after a drag ignored");
            self.state.suppress_click = false;
            return;
        }
        self.forward(surface, |tool| tool.click(point, event));
    }

    pub fn pointer_entered(
        &mut self,
        surface: &mut dyn Surface,
        point: Point2D<f32>,
        event: &MouseEvent,
    ) {
        self.state.pointer_over = true;
        self.forward(surface, |tool| tool.enter(point, event));
    }

    pub fn pointer_exited(
        &mut self,
        surface: &mut dyn Surface,
        point: Point2D<f32>,
        event: &MouseEvent,
    ) {
        self.state.pointer_over = false;
        self.state.dragging = false;
        self.forward(surface, |tool| tool.exit(point, event));
        self.notify_motion(None);
    }

    pub fn pointer_moved(
        &mut self,
        surface: &mut dyn Surface,
        point: Point2D<f32>,
        event: &MouseEvent,
    ) {
        self.forward(surface, |tool| tool.moved(point, event));
        self.notify_motion(Some(point));
    }

    /// Zooms one step per wheel notch around `point`, in for negative rotations.
    pub fn wheel(
        &mut self,
        surface: &mut dyn Surface,
        point: Point2D<f32>,
        rotation: i32,
    ) -> InputResult {
        if !self.config.wheel_zoom || rotation == 0 {
            return InputResult::Unhandled;
        }
        trace!("wheel zoom by {rotation} notches");
        for _ in 0..rotation.unsigned_abs() {
            if rotation < 0 {
                surface.zoom_in(point);
            } else {
                surface.zoom_out(point);
            }
        }
        InputResult::Handled
    }

    /// Routes a raw viewport event, converting its position with the surface projection.
    ///
    /// Motion with a button held is a drag, and releasing a button that was not dragged is a
    /// click.
    pub fn mouse_event(&mut self, surface: &mut dyn Surface, event: &MouseEvent) -> InputResult {
        let Some(point) = surface.projection().viewport_to_world(event.position) else {
            warn!("dropping mouse event, the projection is not invertible");
            return InputResult::Unhandled;
        };
        match event.kind {
            MouseEventKind::Enter => self.pointer_entered(surface, point, event),
            MouseEventKind::Leave => {
                self.state.pressed = None;
                self.pointer_exited(surface, point, event);
            }
            MouseEventKind::Motion { .. } => {
                if self.state.pressed.is_some() {
                    self.pointer_dragged(surface, point, event);
                } else {
                    self.pointer_moved(surface, point, event);
                }
            }
            MouseEventKind::Press { button, .. } => {
                if self.state.pressed.is_some() {
                    return InputResult::Unhandled;
                }
                self.state.pressed = Some(button);
                self.pointer_down(surface, point, event);
            }
            MouseEventKind::Release { button, .. } => {
                if self.state.pressed != Some(button) {
                    return InputResult::Unhandled;
                }
                self.state.pressed = None;
                let dragged = self.state.dragging;
                self.pointer_up(surface, point, event);
                if !dragged {
                    self.pointer_clicked(surface, point, event);
                }
            }
            MouseEventKind::Axis { vertical, .. } => {
                return self.wheel(surface, point, vertical.discrete);
            }
        }
        InputResult::Handled
    }

    /// Handles every key event of the application before focus based routing.
    pub fn key_event(&mut self, surface: &mut dyn Surface, event: &KeyboardEvent) -> InputResult {
        let released = event.is_release();
        let tracked = event
            .key()
            .and_then(|key| TrackedKey::classify(key, self.config.primary_modifier));
        if let Some(tracked) = tracked {
            self.state.modifiers.set(tracked, !released);
        }

        if let Some(key) = event.key()
            && released
            && key.is_delete()
        {
            return self.delete_key(surface, key, event);
        }

        if let Some(tool) = self.active.as_deref_mut() {
            let response = tool.key_event(event);
            handle_tool_messages(surface, response.messages);
            if response.consumed {
                return InputResult::Handled;
            }
        }

        if !self.state.pointer_over {
            return InputResult::Unhandled;
        }
        let Some(tracked) = tracked else {
            return InputResult::Unhandled;
        };

        let modifiers = self.state.modifiers;
        if tracked == TrackedKey::Space
            && released
            && self.active_kind() == Some(ToolKind::Pan)
            && !modifiers.primary
            && !modifiers.secondary
        {
            self.restore_suspended(surface);
            return InputResult::Handled;
        }

        if let Some(kind) = select_tool(modifiers, self.active_kind())
            && Some(kind) != self.active_kind()
        {
            self.switch_temporary(surface, kind);
            return InputResult::Handled;
        }

        let held = self
            .active_kind()
            .is_some_and(|kind| kind.is_temporary() && modifiers.holds(kind));
        let restored = released && !held && self.restore_suspended(surface);
        if restored || tracked == TrackedKey::Space {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    fn delete_key(
        &mut self,
        surface: &mut dyn Surface,
        key: &Key,
        event: &KeyboardEvent,
    ) -> InputResult {
        if !surface.has_focus() || surface.focused_control_claims(key) {
            trace!("delete key left to the focused control");
            return InputResult::Unhandled;
        }
        if let Some(tool) = self.active.as_deref_mut() {
            let response = tool.key_event(event);
            handle_tool_messages(surface, response.messages);
            if response.consumed {
                return InputResult::Handled;
            }
        }
        if surface.delete_selection(DELETE_UNDO_LABEL) {
            debug!("deleted the selection");
        }
        InputResult::Handled
    }
}

/// Applies the messages of a tool callback to the surface.
pub fn handle_tool_messages(surface: &mut dyn Surface, messages: Vec<ToolMessage>) {
    for message in messages {
        match message {
            ToolMessage::CursorIcon(icon) => surface.set_cursor(icon),
            ToolMessage::PanBy(delta) => surface.pan_by(delta),
            ToolMessage::ZoomIn(point) => surface.zoom_in(point),
            ToolMessage::ZoomOut(point) => surface.zoom_out(point),
            ToolMessage::ZoomToRect(rect) => surface.zoom_to_rect(rect),
            ToolMessage::SelectAt { point, extend } => surface.select_at(point, extend),
            ToolMessage::SelectInRect { rect, extend } => surface.select_in_rect(rect, extend),
            ToolMessage::ClearSelection => surface.clear_selection(),
            ToolMessage::RubberBand(rect) => surface.set_rubber_band(Some(rect)),
            ToolMessage::ClearRubberBand => surface.set_rubber_band(None),
        }
    }
}
