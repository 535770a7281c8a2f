use crate::{animator::CursorTrail, dot::Dot, error::TrailError};
use legion::{Entity, World};

/// Spawns one dot per trail point and registers it as that point's handle.
pub fn init_world(world: &mut World, trail: &mut CursorTrail) -> Result<Vec<Entity>, TrailError> {
    let count = trail.points().len();
    let mut dots = std::vec::Vec::<(Dot,)>::new();
    dots.reserve(count);
    dots.extend((0..count).map(|_| (Dot::default(),)));

    let entities = world.extend(dots).to_vec();
    for (index, entity) in entities.iter().enumerate() {
        trail.register_handle(index, *entity)?;
    }
    Ok(entities)
}
