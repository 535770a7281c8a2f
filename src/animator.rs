use crate::{
    advance::advance_trail,
    config::{Rgb, TrailConfig},
    dot::Dot,
    error::TrailError,
    frame::CancelToken,
    pointer::{LeadPosition, ListenerId, PointerHub},
};
use legion::{system, world::SubWorld, Entity, EntityStore};
use log::{info, trace, warn};
use nalgebra::Vector2;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Running,
    Stopped,
}

/// A chain of points easing after the pointer, painted onto `Dot` entities.
pub struct CursorTrail {
    config: TrailConfig,
    points: Vec<Vector2<f64>>,
    lead: LeadPosition,
    handles: Vec<Option<Entity>>,
    lifecycle: Lifecycle,
    listener: Option<ListenerId>,
    cancel: CancelToken,
    frame: u64,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> Result<CursorTrail, TrailError> {
        config.validate()?;
        Ok(CursorTrail {
            points: vec![Vector2::zeros(); config.count],
            lead: LeadPosition::new(config.offset),
            handles: vec![None; config.count],
            lifecycle: Lifecycle::Idle,
            listener: None,
            cancel: CancelToken::default(),
            frame: 0,
            config,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    pub fn position(&self, index: usize) -> Option<Vector2<f64>> {
        self.points.get(index).copied()
    }

    pub fn lead(&self) -> LeadPosition {
        self.lead.clone()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn color_for(&self, index: usize) -> Rgb {
        self.config.color_for(index)
    }

    pub fn on_pointer_move(&self, x: f64, y: f64) {
        self.lead.set(x, y);
    }

    /// Returns the handle previously registered at `index`, if any.
    pub fn register_handle(
        &mut self,
        index: usize,
        entity: Entity,
    ) -> Result<Option<Entity>, TrailError> {
        let count = self.handles.len();
        let slot = self
            .handles
            .get_mut(index)
            .ok_or(TrailError::HandleIndexOutOfRange { index, count })?;
        Ok(slot.replace(entity))
    }

    pub fn release_handle(&mut self, index: usize) -> Option<Entity> {
        self.handles.get_mut(index).and_then(Option::take)
    }

    /// Subscribes to pointer movement and returns the token that keeps the
    /// frame loop alive. There is no way back from `Stopped`.
    pub fn start(&mut self, hub: &mut PointerHub) -> CancelToken {
        match self.lifecycle {
            Lifecycle::Idle => {
                self.listener = Some(hub.add_listener(Arc::new(self.lead.clone())));
                self.lifecycle = Lifecycle::Running;
                info!("Cursor trail started with {} points", self.points.len());
            }
            Lifecycle::Running => {}
            Lifecycle::Stopped => warn!("Ignoring start of a stopped cursor trail"),
        }
        self.cancel.clone()
    }

    pub fn stop(&mut self, hub: &mut PointerHub) {
        if self.lifecycle == Lifecycle::Stopped {
            return;
        }
        self.lifecycle = Lifecycle::Stopped;
        self.cancel.cancel();
        if let Some(listener) = self.listener.take() {
            hub.remove_listener(listener);
        }
        info!("Cursor trail stopped after {} frames", self.frame);
    }

    /// Advances the trail one frame and paints every live handle.
    /// Returns the number of handles painted.
    pub fn tick<S: EntityStore>(&mut self, world: &mut S) -> usize {
        if !self.is_running() {
            return 0;
        }
        self.points[0] = self.lead.get();
        advance_trail(&mut self.points, &self.config);
        self.frame += 1;

        let mut painted = 0;
        for (index, handle) in self.handles.iter().enumerate() {
            let entity = match handle {
                Some(entity) => *entity,
                None => continue,
            };
            let mut entry = match world.entry_mut(entity) {
                Ok(entry) => entry,
                Err(_) => {
                    trace!("Handle {} is gone, skipping", index);
                    continue;
                }
            };
            let dot = match entry.get_component_mut::<Dot>() {
                Ok(dot) => dot,
                Err(_) => {
                    trace!("Handle {} has no dot, skipping", index);
                    continue;
                }
            };
            dot.position = self.points[index];
            dot.color = self.config.color_for(index);
            dot.size = self.config.dot_size;
            dot.opacity = self.config.opacity;
            dot.painted_at = Some(self.frame);
            painted += 1;
        }
        painted
    }
}

#[system]
#[write_component(Dot)]
pub fn advance_cursor_trail(world: &mut SubWorld, #[resource] trail: &mut CursorTrail) {
    trail.tick(world);
}
