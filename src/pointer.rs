use nalgebra::Vector2;
use std::sync::{Arc, Mutex};

pub trait PointerListener: Send + Sync {
    fn pointer_moved(&self, x: f64, y: f64);
}

/// Last-write-wins slot holding the offset pointer position.
#[derive(Clone, Debug)]
pub struct LeadPosition {
    offset: Vector2<f64>,
    position: Arc<Mutex<Vector2<f64>>>,
}

impl LeadPosition {
    pub fn new(offset: Vector2<f64>) -> LeadPosition {
        LeadPosition {
            offset,
            position: Arc::new(Mutex::new(Vector2::zeros())),
        }
    }

    pub fn set(&self, x: f64, y: f64) {
        let mut position = self.position.lock().unwrap_or_else(|e| e.into_inner());
        *position = Vector2::new(x, y) - self.offset;
    }

    pub fn get(&self) -> Vector2<f64> {
        *self.position.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PointerListener for LeadPosition {
    fn pointer_moved(&self, x: f64, y: f64) {
        self.set(x, y);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Fans pointer movement out to the subscribed listeners.
#[derive(Default)]
pub struct PointerHub {
    listeners: Vec<(ListenerId, Arc<dyn PointerListener>)>,
    next_id: u64,
}

impl PointerHub {
    pub fn add_listener(&mut self, listener: Arc<dyn PointerListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&self, x: f64, y: f64) {
        for (_, listener) in &self.listeners {
            listener.pointer_moved(x, y);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
