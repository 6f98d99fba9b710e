//! Boundary with the physics/rendering engine
//!
//! The engine owns simulation and drawing. The game only registers bodies,
//! nudges velocities, flips static flags and sets gravity through
//! [`PhysicsWorld`]. [`BodyStore`] records those calls without integrating
//! motion; it backs the headless binary and the tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{BodyLabel, BodySpec};

/// Handle to a body registered with the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Two bodies that started touching this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionPair {
    pub body_a: BodyId,
    pub body_b: BodyId,
}

impl CollisionPair {
    pub fn new(body_a: BodyId, body_b: BodyId) -> Self {
        Self { body_a, body_b }
    }
}

/// Operations the game needs from the engine
pub trait PhysicsWorld {
    fn add_body(&mut self, spec: BodySpec) -> BodyId;

    /// Label of a registered body; None for unknown or unlabelled bodies
    fn label(&self, id: BodyId) -> Option<BodyLabel>;

    fn velocity(&self, id: BodyId) -> Vec2;
    fn set_velocity(&mut self, id: BodyId, velocity: Vec2);

    fn is_static(&self, id: BodyId) -> bool;
    fn set_static(&mut self, id: BodyId, is_static: bool);

    fn gravity(&self) -> Vec2;
    fn set_gravity(&mut self, gravity: Vec2);

    /// Every registered body, in registration order
    fn body_ids(&self) -> Vec<BodyId>;
}

/// A registered body and its mutable physics state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub spec: BodySpec,
    pub velocity: Vec2,
}

/// In-memory engine stand-in; bodies never move on their own
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyStore {
    /// Sorted by id (ids are handed out in increasing order)
    bodies: Vec<Body>,
    gravity: Vec2,
    next_id: u32,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|i| &self.bodies[i])
    }

    fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        match self.bodies.binary_search_by_key(&id, |b| b.id) {
            Ok(i) => Some(&mut self.bodies[i]),
            Err(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies carrying `label`
    pub fn with_label(&self, label: BodyLabel) -> impl Iterator<Item = &Body> {
        self.bodies
            .iter()
            .filter(move |b| b.spec.label == Some(label))
    }
}

impl PhysicsWorld for BodyStore {
    fn add_body(&mut self, spec: BodySpec) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            spec,
            velocity: Vec2::ZERO,
        });
        id
    }

    fn label(&self, id: BodyId) -> Option<BodyLabel> {
        self.get(id).and_then(|b| b.spec.label)
    }

    fn velocity(&self, id: BodyId) -> Vec2 {
        self.get(id).map(|b| b.velocity).unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(&mut self, id: BodyId, velocity: Vec2) {
        match self.get_mut(id) {
            Some(body) => body.velocity = velocity,
            None => log::warn!("set_velocity on unknown body {:?}", id),
        }
    }

    fn is_static(&self, id: BodyId) -> bool {
        self.get(id).is_some_and(|b| b.spec.is_static)
    }

    fn set_static(&mut self, id: BodyId, is_static: bool) {
        match self.get_mut(id) {
            Some(body) => body.spec.is_static = is_static,
            None => log::warn!("set_static on unknown body {:?}", id),
        }
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn body_ids(&self) -> Vec<BodyId> {
        self.bodies.iter().map(|b| b.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::geometry::{Fill, Shape};

    fn circle(label: Option<BodyLabel>) -> BodySpec {
        BodySpec {
            label,
            position: Vec2::new(10.0, 10.0),
            shape: Shape::Circle { radius: 4.0 },
            is_static: false,
            fill: Fill::LightBlue,
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut store = BodyStore::new();
        let a = store.add_body(circle(Some(BodyLabel::Ball)));
        let b = store.add_body(circle(None));
        assert_eq!((a, b), (BodyId(0), BodyId(1)));
        assert_eq!(store.body_ids(), vec![a, b]);
        assert_eq!(store.label(a), Some(BodyLabel::Ball));
        assert_eq!(store.label(b), None);
    }

    #[test]
    fn test_velocity_and_static_flags() {
        let mut store = BodyStore::new();
        let id = store.add_body(circle(Some(BodyLabel::Ball)));
        assert_eq!(store.velocity(id), Vec2::ZERO);

        store.set_velocity(id, Vec2::new(3.0, -2.0));
        assert_eq!(store.velocity(id), Vec2::new(3.0, -2.0));

        assert!(!store.is_static(id));
        store.set_static(id, true);
        assert!(store.is_static(id));
    }

    #[test]
    fn test_unknown_body_is_inert() {
        let mut store = BodyStore::new();
        let ghost = BodyId(42);
        store.set_velocity(ghost, Vec2::ONE);
        store.set_static(ghost, true);
        assert_eq!(store.velocity(ghost), Vec2::ZERO);
        assert!(!store.is_static(ghost));
        assert_eq!(store.label(ghost), None);
        assert!(store.is_empty());
    }
}
