//! Sprite-sheet animation.
//!
//! [`animation`] advances every [`Animation`] by the frame delta and points
//! its [`Sprite`] at the current frame of the sheet. Animations whose key is
//! not in the [`AnimationStore`] (for example because the texture failed to
//! load) are left on their first frame.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity animation state
//! - [`crate::resources::animationstore::AnimationStore`] – animation definitions

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        if animation.fps <= 0.0 || animation.frame_count == 0 {
            continue;
        }
        anim_comp.elapsed_time += time.delta;

        let frame_duration = 1.0 / animation.fps;
        while anim_comp.elapsed_time >= frame_duration {
            anim_comp.elapsed_time -= frame_duration;
            anim_comp.frame_index += 1;
            if anim_comp.frame_index >= animation.frame_count {
                anim_comp.frame_index = if animation.looped {
                    0
                } else {
                    animation.frame_count - 1 // stay on last frame
                };
            }
        }

        // Horizontal sheets: only x moves between frames.
        sprite.offset = Vector2 {
            x: animation.position.x + anim_comp.frame_index as f32 * animation.displacement,
            y: animation.position.y,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::VIRUS;
    use crate::resources::animationstore::AnimationResource;

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(animation);
        schedule.run(world);
    }

    #[test]
    fn test_animation_advances_and_loops() {
        let mut world = World::new();
        let mut store = AnimationStore::default();
        store.insert(
            VIRUS.key,
            AnimationResource::from_sheet(&VIRUS, VIRUS.frame_size.0 * 3.0).unwrap(),
        );
        world.insert_resource(store);
        world.insert_resource(WorldTime {
            delta: 0.061,
            ..Default::default()
        });
        let e = world
            .spawn((Animation::new(VIRUS.key), Sprite::from_def(&VIRUS)))
            .id();

        run(&mut world);
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 1);
        assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 90.0);

        run(&mut world);
        run(&mut world);
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 0);
        assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 0.0);
    }

    #[test]
    fn test_unknown_animation_is_untouched() {
        let mut world = World::new();
        world.insert_resource(AnimationStore::default());
        world.insert_resource(WorldTime {
            delta: 1.0,
            ..Default::default()
        });
        let e = world
            .spawn((Animation::new("missing"), Sprite::from_def(&VIRUS)))
            .id();
        run(&mut world);
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 0);
    }
}
