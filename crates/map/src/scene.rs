use std::collections::HashMap;

use anyhow::{Context, Result};
use euclid::default::{Box2D, Point2D};
use serde::{Deserialize, Serialize};

/// A selectable object on the map, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub bounds: Box2D<f32>,
    pub selected: bool,
}

/// The features shown on the map, with their stacking order and selection state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    nodes: HashMap<u32, Feature>,
    ordering: Vec<u32>,
    pub next_node_id: u32,
}

impl Scene {
    /// Add a new feature on top of the others; returns its unique ID.
    pub fn add_node(&mut self, bounds: Box2D<f32>) -> u32 {
        let id = self.next_node_id;
        self.nodes.insert(
            id,
            Feature {
                bounds,
                selected: false,
            },
        );
        self.ordering.push(id);
        self.next_node_id += 1;
        id
    }

    /// Remove a feature by its ID.
    pub fn remove_node(&mut self, id: u32) {
        _ = self.nodes.remove(&id);
        if let Some(position) = self.ordering.iter().position(|x| *x == id) {
            _ = self.ordering.remove(position);
        };
    }

    pub fn get_node(&self, id: u32) -> Option<&Feature> {
        self.nodes.get(&id)
    }
    pub fn len(&self) -> usize {
        self.ordering.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ordering.is_empty()
    }

    /// The topmost feature containing `point`.
    pub fn get_node_id_at_position(&self, point: Point2D<f32>) -> Option<u32> {
        self.ordering.iter().rev().copied().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|node| node.bounds.contains(point))
        })
    }

    /// All features overlapping `rect`, bottom to top.
    pub fn node_ids_in_rect(&self, rect: Box2D<f32>) -> Vec<u32> {
        self.ordering
            .iter()
            .copied()
            .filter(|id| {
                self.nodes
                    .get(id)
                    .is_some_and(|node| node.bounds.intersects(&rect))
            })
            .collect()
    }

    pub fn selected_ids(&self) -> Vec<u32> {
        self.ordering
            .iter()
            .copied()
            .filter(|id| self.nodes.get(id).is_some_and(|node| node.selected))
            .collect()
    }
    pub fn has_selection(&self) -> bool {
        self.nodes.values().any(|node| node.selected)
    }

    pub fn set_selected(&mut self, id: u32, selected: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.selected = selected;
        }
    }
    pub fn toggle_selected(&mut self, id: u32) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.selected = !node.selected;
        }
    }

    /// Deselects everything, returns whether anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        let mut changed = false;
        for node in self.nodes.values_mut() {
            changed |= node.selected;
            node.selected = false;
        }
        changed
    }

    /// Removes every selected feature, returning the removed IDs.
    pub fn remove_selected(&mut self) -> Vec<u32> {
        let removed = self.selected_ids();
        for id in &removed {
            self.remove_node(*id);
        }
        removed
    }

    /// Serialize the scene.
    pub fn serialize(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize the scene")
    }

    /// Deserialize a scene.
    pub fn deserialize(serialized: &str) -> Result<Self> {
        serde_json::from_str(serialized).context("failed to deserialize the scene")
    }
}
