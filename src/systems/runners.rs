//! Falling runners: spawning, difficulty ticks, powerups and destruction.
//!
//! The three periodic controllers of a run are [`Timer`] entities. Their
//! expirations arrive at [`runner_timer_observer`]:
//! - [`TimerSignal::SpawnTick`] rolls whether a runner drops and what kind,
//! - [`TimerSignal::DifficultyTick`] raises the speed modifier,
//! - [`TimerSignal::SlowdownCooldown`] ends an active slowdown.
//!
//! Destruction is animated: the runner loses its hitbox, shrinks for
//! [`DESTROY_DURATION`] seconds and is then despawned.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::runner::{RUNNER_HITBOX, Runner, RunnerKind};
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::timer::{Timer, TimerSignal};
use crate::components::tint::Tint;
use crate::components::tween::{Easing, TweenCallback, TweenScale};
use crate::components::zindex::ZIndex;
use crate::events::gameplay::{FlashEvent, NukeEnemiesEvent, SlowdownEnemiesEvent};
use crate::events::timer::TimerEvent;
use crate::lanes::{BORDER_Y, LANE_COUNT, enemy_slots};
use crate::resources::difficulty::{BASE_FALL_SPEED, Difficulty, MAX_SPIN, SLOWDOWN_FACTOR};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::playerstate::PlayerState;
use crate::resources::rng::GameRng;

pub const RUNNER_GROUP: &str = "runners";
pub const RUNNER_Z: i32 = 20;
/// Seconds a destroyed runner takes to shrink away.
pub const DESTROY_DURATION: f32 = 0.4;
/// Runners below this line are off screen for good.
pub const CULL_Y: f32 = 700.0;
/// Seconds a slowdown lasts after the last charge was spent.
pub const SLOWDOWN_COOLDOWN: f32 = 3.0;

/// Start destroying `entity`. Does nothing if it is already being destroyed.
///
/// The hitbox is removed at once so no further contact can begin; the
/// entity itself is despawned when the shrink tween ends.
pub fn destroy_runner(
    commands: &mut Commands,
    entity: Entity,
    runner: &mut Runner,
    scale: Option<&Scale>,
) {
    if runner.destroying {
        return;
    }
    runner.destroying = true;
    let from = scale.map(|s| s.scale).unwrap_or(Vector2::new(1.0, 1.0));
    commands.entity(entity).try_remove::<BoxCollider>();
    commands.entity(entity).try_insert(
        TweenScale::new(from, Vector2::new(0.01, 0.01), DESTROY_DURATION)
            .with_easing(Easing::QuadIn)
            .with_on_finish(TweenCallback::Despawn),
    );
}

/// A virus got past the border: one person is lost and the screen flashes.
pub fn register_miss(commands: &mut Commands, player_state: &mut PlayerState) {
    player_state.population.decrease(1);
    commands.trigger(FlashEvent {});
}

/// Roll the spawn gate and, when it passes, drop a runner in a random lane.
///
/// Returns the spawned entity.
pub fn spawn_runner(
    commands: &mut Commands,
    rng: &mut GameRng,
    difficulty: &Difficulty,
) -> Option<Entity> {
    if !difficulty.should_spawn(rng.0.f32()) {
        return None;
    }
    let lane = rng.0.usize(0..LANE_COUNT);
    let kind = RunnerKind::from_roll(rng.0.f32());
    let speed_mod = difficulty.effective_speed_mod(kind);
    let fall_speed = rng.range_f32(BASE_FALL_SPEED, BASE_FALL_SPEED + speed_mod);
    let spin = rng.range_f32(-MAX_SPIN, MAX_SPIN);
    let profile = kind.profile();

    let mut entity = commands.spawn((
        Runner::new(kind),
        Group::new(RUNNER_GROUP),
        MapPosition::from_vec(enemy_slots()[lane]),
        Rotation::default(),
        Scale::default(),
        Sprite::from_def(&profile.sprite),
        ZIndex(RUNNER_Z),
        RigidBody::with_velocity(Vector2::new(0.0, fall_speed), spin),
        BoxCollider::centered(RUNNER_HITBOX, RUNNER_HITBOX),
        profile.trigger,
        Tint::default(),
    ));
    if profile.sprite.frame_ms.is_some() {
        entity.insert(Animation::new(profile.sprite.key));
    }
    debug!("Spawned {:?} in lane {} at {:.0} u/s", kind, lane, fall_speed);
    Some(entity.id())
}

/// React to the periodic controllers of a run. Ignored outside play.
pub fn runner_timer_observer(
    trigger: On<TimerEvent>,
    mut commands: Commands,
    game_state: Res<GameState>,
    mut difficulty: ResMut<Difficulty>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
) {
    if game_state.get() != GameStates::Playing {
        return;
    }
    match trigger.event().signal {
        TimerSignal::SpawnTick => {
            spawn_runner(&mut commands, &mut rng, &difficulty);
        }
        TimerSignal::DifficultyTick => difficulty.ramp(config.speed_mod_increment),
        TimerSignal::SlowdownCooldown => {
            debug!("Slowdown over");
            difficulty.slowdown_power = 0;
        }
    }
}

/// Slow every falling virus and (re)start the slowdown cooldown.
pub fn slowdown_observer(
    _trigger: On<SlowdownEnemiesEvent>,
    mut difficulty: ResMut<Difficulty>,
    mut runners: Query<(&Runner, &mut RigidBody)>,
    mut timers: Query<&mut Timer>,
) {
    difficulty.slowdown_power += 1;
    info!("Slowdown level {}", difficulty.slowdown_power);
    for (runner, mut body) in runners.iter_mut() {
        if runner.kind.is_hazard() && !runner.destroying {
            body.scale_velocity(SLOWDOWN_FACTOR);
        }
    }
    for mut timer in timers.iter_mut() {
        if timer.signal == TimerSignal::SlowdownCooldown {
            timer.arm();
        }
    }
}

/// Destroy every virus on the field.
pub fn nuke_observer(
    _trigger: On<NukeEnemiesEvent>,
    mut commands: Commands,
    mut runners: Query<(Entity, &mut Runner, Option<&Scale>)>,
) {
    let mut destroyed = 0;
    for (entity, mut runner, scale) in runners.iter_mut() {
        if runner.kind.is_hazard() && !runner.destroying {
            destroy_runner(&mut commands, entity, &mut runner, scale);
            destroyed += 1;
        }
    }
    info!("Nuke destroyed {} viruses", destroyed);
}

/// Count a miss for every live virus already below the border line.
///
/// A long frame can carry a virus across the border hitbox without the two
/// ever overlapping, so position alone decides here. Runs after movement and
/// before the cull.
pub fn catch_missed_hazards(
    mut commands: Commands,
    game_state: Res<GameState>,
    mut player_state: ResMut<PlayerState>,
    mut runners: Query<(Entity, &mut Runner, &MapPosition, Option<&Scale>)>,
) {
    if game_state.get() != GameStates::Playing {
        return;
    }
    for (entity, mut runner, position, scale) in runners.iter_mut() {
        if runner.kind.is_hazard() && !runner.destroying && position.pos.y > BORDER_Y {
            debug!("Virus passed the border at y={:.0}", position.pos.y);
            register_miss(&mut commands, &mut player_state);
            destroy_runner(&mut commands, entity, &mut runner, scale);
        }
    }
}

/// Despawn runners that fell past the bottom of the screen. Only pickups and
/// the runners left over after game over get this far.
pub fn cull_offscreen_runners(
    mut commands: Commands,
    runners: Query<(Entity, &MapPosition), With<Runner>>,
) {
    for (entity, position) in runners.iter() {
        if position.pos.y > CULL_Y {
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::difficulty::MIN_SPAWN_GATE;

    fn spawn_with(world: &mut World, difficulty: Difficulty, seed: u64, attempts: usize) -> usize {
        let mut rng = GameRng::seeded(seed);
        let mut spawned = 0;
        for _ in 0..attempts {
            let mut commands = world.commands();
            if spawn_runner(&mut commands, &mut rng, &difficulty).is_some() {
                spawned += 1;
            }
        }
        world.flush();
        spawned
    }

    #[test]
    fn test_spawned_runner_layout() {
        let mut world = World::new();
        let difficulty = Difficulty {
            speed_mod: 200.0,
            slowdown_power: 0,
        };
        let spawned = spawn_with(&mut world, difficulty, 7, 400);
        assert!(spawned > 0);

        let slots = enemy_slots();
        let mut q = world.query::<(&Runner, &MapPosition, &RigidBody, &BoxCollider, &ZIndex)>();
        assert_eq!(q.iter(&world).count(), spawned);
        for (runner, pos, body, collider, z) in q.iter(&world) {
            assert!(slots.iter().any(|s| s.x == pos.pos.x && s.y == pos.pos.y));
            assert!(body.velocity.y >= BASE_FALL_SPEED);
            assert!(body.velocity.y <= BASE_FALL_SPEED + 200.0);
            assert_eq!(body.velocity.x, 0.0);
            assert!(body.angular_velocity.abs() <= MAX_SPIN);
            assert_eq!(collider.size.x, RUNNER_HITBOX);
            assert_eq!(z.0, RUNNER_Z);
            assert!(!runner.destroying);
        }
    }

    #[test]
    fn test_spawn_rate_follows_gate() {
        let mut world = World::new();
        let attempts = 4000;
        let slow = spawn_with(&mut world, Difficulty::default(), 11, attempts);
        let rate = slow as f32 / attempts as f32;
        assert!((rate - 0.2).abs() < 0.04, "rate {rate}");

        let mut world = World::new();
        let fast = Difficulty {
            speed_mod: 5000.0,
            slowdown_power: 0,
        };
        let many = spawn_with(&mut world, fast, 11, attempts);
        let rate = many as f32 / attempts as f32;
        assert!((rate - (1.0 - MIN_SPAWN_GATE)).abs() < 0.04, "rate {rate}");
    }

    #[test]
    fn test_slowed_hazards_spawn_slower() {
        let mut world = World::new();
        let difficulty = Difficulty {
            speed_mod: 1000.0,
            slowdown_power: 3,
        };
        spawn_with(&mut world, difficulty, 3, 2000);
        let cap = BASE_FALL_SPEED + 1000.0 * SLOWDOWN_FACTOR.powi(3);
        let mut q = world.query::<(&Runner, &RigidBody)>();
        let mut hazards = 0;
        for (runner, body) in q.iter(&world) {
            if runner.kind.is_hazard() {
                hazards += 1;
                assert!(body.velocity.y <= cap + 1e-3);
            }
        }
        assert!(hazards > 0);
    }

    #[test]
    fn test_destroy_runner_is_idempotent() {
        let mut world = World::new();
        let entity = world
            .spawn((
                Runner::new(RunnerKind::Hazard),
                Scale::default(),
                BoxCollider::centered(RUNNER_HITBOX, RUNNER_HITBOX),
            ))
            .id();
        let mut runner = *world.get::<Runner>(entity).unwrap();
        {
            let mut commands = world.commands();
            destroy_runner(&mut commands, entity, &mut runner, Some(&Scale::default()));
            destroy_runner(&mut commands, entity, &mut runner, Some(&Scale::default()));
        }
        world.flush();
        assert!(runner.destroying);
        assert!(world.get::<BoxCollider>(entity).is_none());
        let tween = world.get::<TweenScale>(entity).unwrap();
        assert_eq!(tween.duration, DESTROY_DURATION);
        assert!((tween.to.x - 0.01).abs() < 1e-6);
        assert_eq!(tween.easing, Easing::QuadIn);
        assert!(matches!(tween.on_finish, Some(TweenCallback::Despawn)));
    }
}
