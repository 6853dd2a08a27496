use euclid::default::{Box2D, Point2D, Size2D, Vector2D};
use input::{CursorIcon, Key};
use tracing::{debug, info};

use crate::{
    config::InputConfig, projection::Projection, scene::Scene, surface::Surface,
    undo::UndoHistory,
};

/// An in-memory map view: projection, features, focus state and undo history.
pub struct MapView {
    pub scene: Scene,
    pub projection: Projection,

    cursor: CursorIcon,
    rubber_band: Option<Box2D<f32>>,

    /// Whether the window holds the keyboard focus.
    pub focused: bool,
    /// Whether a text field inside the window has the focus.
    pub text_focused: bool,

    history: UndoHistory<Scene>,
    zoom_factor: f32,
    redraws: u64,
}

impl MapView {
    pub fn new(viewport: Size2D<f32>, config: &InputConfig) -> Self {
        Self {
            scene: Scene::default(),
            projection: Projection::new(viewport),

            cursor: CursorIcon::default(),
            rubber_band: None,

            focused: true,
            text_focused: false,

            history: UndoHistory::default(),
            zoom_factor: config.zoom_factor,
            redraws: 0,
        }
    }

    pub fn update_viewport(&mut self, viewport: Size2D<f32>) {
        self.projection.set_viewport(viewport);
        self.request_redraw();
        info!("Updated the viewport size to: {viewport:?}!");
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }
    pub fn rubber_band(&self) -> Option<Box2D<f32>> {
        self.rubber_band
    }
    pub fn redraws(&self) -> u64 {
        self.redraws
    }
    pub fn history(&self) -> &UndoHistory<Scene> {
        &self.history
    }

    /// Reverts the last recorded edit, returning its label.
    pub fn undo(&mut self) -> Option<String> {
        let (label, scene) = self.history.pop()?;
        self.scene = scene;
        self.request_redraw();
        debug!("undid `{label}`");
        Some(label)
    }
}

impl Surface for MapView {
    fn projection(&self) -> &Projection {
        &self.projection
    }

    fn zoom_in(&mut self, center: Point2D<f32>) {
        self.projection.zoom_at(center, self.zoom_factor);
        self.request_redraw();
    }
    fn zoom_out(&mut self, center: Point2D<f32>) {
        self.projection.zoom_at(center, self.zoom_factor.recip());
        self.request_redraw();
    }
    fn zoom_to_rect(&mut self, rect: Box2D<f32>) {
        self.projection.zoom_to_rect(rect);
        self.request_redraw();
    }
    fn pan_by(&mut self, delta: Vector2D<f32>) {
        self.projection.pan_by(delta);
        self.request_redraw();
    }

    fn set_cursor(&mut self, icon: CursorIcon) {
        self.cursor = icon;
    }

    fn select_at(&mut self, point: Point2D<f32>, extend: bool) {
        let hit = self.scene.get_node_id_at_position(point);
        match (hit, extend) {
            (Some(id), true) => self.scene.toggle_selected(id),
            (Some(id), false) => {
                self.scene.clear_selection();
                self.scene.set_selected(id, true);
            }
            (None, true) => return,
            (None, false) => {
                if !self.scene.clear_selection() {
                    return;
                }
            }
        }
        self.request_redraw();
    }
    fn select_in_rect(&mut self, rect: Box2D<f32>, extend: bool) {
        if !extend {
            self.scene.clear_selection();
        }
        for id in self.scene.node_ids_in_rect(rect) {
            self.scene.set_selected(id, true);
        }
        self.request_redraw();
    }
    fn has_selection(&self) -> bool {
        self.scene.has_selection()
    }
    fn clear_selection(&mut self) {
        if self.scene.clear_selection() {
            self.request_redraw();
        }
    }
    fn delete_selection(&mut self, undo_label: &str) -> bool {
        if !self.scene.has_selection() {
            return false;
        }
        let snapshot = self.scene.clone();
        let removed = self.scene.remove_selected();
        debug!("deleted {} features", removed.len());
        self.history.push(undo_label, snapshot);
        self.request_redraw();
        true
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
    fn focused_control_claims(&self, key: &Key) -> bool {
        self.text_focused && key.is_delete()
    }

    fn set_rubber_band(&mut self, rect: Option<Box2D<f32>>) {
        self.rubber_band = rect;
        self.request_redraw();
    }
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}
