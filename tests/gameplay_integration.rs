//! Whole-game integration tests.
//!
//! Each test builds a headless world with `init_world`, starts a run and
//! drives the full gameplay schedule frame by frame. Runners are placed by
//! hand; the spawn timer is pushed out of reach unless a test wants it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use hopeinsoap::components::boxcollider::BoxCollider;
use hopeinsoap::components::group::Group;
use hopeinsoap::components::mapposition::MapPosition;
use hopeinsoap::components::player::{LaneMovement, Player};
use hopeinsoap::components::rigidbody::RigidBody;
use hopeinsoap::components::runner::{RUNNER_HITBOX, Runner, RunnerKind};
use hopeinsoap::components::scale::Scale;
use hopeinsoap::components::tween::{Easing, TweenPosition};
use hopeinsoap::events::gameplay::FlashEvent;
use hopeinsoap::events::input::{InputAction, InputEvent};
use hopeinsoap::game::{gameplay_schedule, init_world, request_state};
use hopeinsoap::lanes::{BORDER_Y, hero_slots};
use hopeinsoap::resources::difficulty::Difficulty;
use hopeinsoap::resources::gameconfig::GameConfig;
use hopeinsoap::resources::gamestate::{GameState, GameStates};
use hopeinsoap::resources::input::InputQueue;
use hopeinsoap::resources::playerstate::PlayerState;
use hopeinsoap::systems::runners::RUNNER_GROUP;
use hopeinsoap::systems::time::update_world_time;

const FRAME: f32 = 0.05;
const FAR_LANE: usize = 0;

struct Game {
    world: World,
    schedule: Schedule,
}

impl Game {
    fn start(config: GameConfig) -> Self {
        let mut world = World::new();
        init_world(&mut world, config, Some(0xC0FFEE));
        request_state(&mut world, GameStates::Playing);
        Game {
            world,
            schedule: gameplay_schedule(),
        }
    }

    /// A run with no random runners.
    fn quiet() -> Self {
        Self::start(quiet_config())
    }

    fn tick(&mut self) {
        self.tick_with(FRAME);
    }

    fn tick_with(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    fn ticks(&mut self, frames: usize) {
        for _ in 0..frames {
            self.tick();
        }
    }

    fn run_for(&mut self, seconds: f32) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            self.tick();
        }
    }

    fn press(&mut self, action: InputAction) {
        let mut queue = self.world.resource_mut::<InputQueue>();
        queue.push(InputEvent::pressed(action));
        queue.push(InputEvent::released(action));
    }

    fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }

    fn player_state(&self) -> &PlayerState {
        self.world.resource::<PlayerState>()
    }

    fn player(&mut self) -> Entity {
        let mut query = self.world.query_filtered::<Entity, With<Player>>();
        query.single(&self.world).unwrap()
    }

    fn lane_movement(&mut self) -> LaneMovement {
        let player = self.player();
        *self.world.get::<LaneMovement>(player).unwrap()
    }

    fn player_x(&mut self) -> f32 {
        let player = self.player();
        self.world.get::<MapPosition>(player).unwrap().pos.x
    }

    fn runner_count(&mut self) -> usize {
        let mut query = self.world.query::<&Runner>();
        query.iter(&self.world).count()
    }

    /// Place a runner of `kind` at `pos`, falling at `speed`.
    fn drop_runner(&mut self, kind: RunnerKind, pos: Vector2, speed: f32) -> Entity {
        self.world
            .spawn((
                Runner::new(kind),
                Group::new(RUNNER_GROUP),
                MapPosition::from_vec(pos),
                Scale::default(),
                RigidBody::with_velocity(Vector2::new(0.0, speed), 0.0),
                BoxCollider::centered(RUNNER_HITBOX, RUNNER_HITBOX),
                kind.profile().trigger,
            ))
            .id()
    }

    /// A runner already touching the border in a lane away from the player.
    fn drop_on_border(&mut self, kind: RunnerKind) -> Entity {
        let x = hero_slots()[FAR_LANE].x;
        self.drop_runner(kind, Vector2::new(x, BORDER_Y), 0.0)
    }

    /// A runner already touching the player.
    fn drop_on_player(&mut self, kind: RunnerKind) -> Entity {
        let player = self.player();
        let pos = self.world.get::<MapPosition>(player).unwrap().pos;
        self.drop_runner(kind, pos, 0.0)
    }

    fn count<E: Event>(&mut self) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        self.world.add_observer(move |_trigger: On<E>| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        self.world.flush();
        count
    }
}

fn quiet_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.spawn_interval_ms = 1_000_000;
    config
}

// =============================================================================
// Run start
// =============================================================================

#[test]
fn new_run_starts_playing_with_full_counters() {
    let mut game = Game::quiet();

    assert_eq!(game.state(), GameStates::Playing);
    let ps = game.player_state();
    assert_eq!(ps.population, 300);
    assert_eq!(ps.fuel, 50000);
    assert_eq!(ps.slowdown_charges, 0);
    assert_eq!(ps.nuke_charges, 0);
    assert_eq!(ps.score, 0);

    let movement = game.lane_movement();
    assert_eq!(movement.current_lane, 2);
    assert!(!movement.is_moving);
    assert!(!movement.is_frozen);
    assert_eq!(game.runner_count(), 0);
}

#[test]
fn spawn_timer_drops_runners_and_difficulty_ramps() {
    let mut game = Game::start(GameConfig::new());

    let mut seen = false;
    for _ in 0..200 {
        game.tick();
        seen |= game.runner_count() > 0;
    }

    assert!(seen);
    assert!(game.world.resource::<Difficulty>().speed_mod >= 3.0);
    assert_eq!(game.state(), GameStates::Playing);
}

// =============================================================================
// Collisions
// =============================================================================

#[test]
fn missed_viruses_cost_people_and_flash() {
    let mut game = Game::quiet();
    let flashes = game.count::<FlashEvent>();

    for _ in 0..3 {
        game.drop_on_border(RunnerKind::Hazard);
    }
    game.tick();

    assert_eq!(game.player_state().population, 297);
    assert_eq!(game.player_state().score, 0);
    assert_eq!(flashes.load(Ordering::SeqCst), 3);

    game.run_for(0.5);
    assert_eq!(game.runner_count(), 0);
    assert_eq!(game.player_state().population, 297);
}

#[test]
fn dropped_pickups_have_no_effect() {
    let mut game = Game::quiet();
    let flashes = game.count::<FlashEvent>();

    game.drop_on_border(RunnerKind::FuelPickup);
    game.drop_on_border(RunnerKind::NukePickup);
    game.tick();

    assert_eq!(game.player_state().population, 300);
    assert_eq!(game.player_state().nuke_charges, 0);
    assert_eq!(flashes.load(Ordering::SeqCst), 0);
    game.run_for(0.5);
    assert_eq!(game.runner_count(), 0);
}

#[test]
fn intercepted_virus_scores_once() {
    let mut game = Game::quiet();
    let virus = game.drop_on_player(RunnerKind::Hazard);

    game.tick();
    assert_eq!(game.player_state().score, 10);
    assert!(game.world.get::<BoxCollider>(virus).is_none());
    assert!(game.world.get::<Runner>(virus).unwrap().destroying);

    game.run_for(0.2);
    assert_eq!(game.player_state().score, 10);
    assert_eq!(game.player_state().population, 300);

    game.run_for(0.5);
    assert!(game.world.get_entity(virus).is_err());
}

#[test]
fn falling_virus_is_caught_by_the_border() {
    let mut game = Game::quiet();
    let x = hero_slots()[FAR_LANE].x;
    game.drop_runner(RunnerKind::Hazard, Vector2::new(x, -500.0), 300.0);

    game.run_for(2.0);
    assert_eq!(game.player_state().population, 300);

    game.run_for(1.5);
    assert_eq!(game.player_state().population, 299);
    assert_eq!(game.runner_count(), 0);
}

#[test]
fn long_frame_cannot_carry_a_virus_past_the_border() {
    let mut game = Game::quiet();
    let flashes = game.count::<FlashEvent>();
    let x = hero_slots()[FAR_LANE].x;
    let virus = game.drop_runner(RunnerKind::Hazard, Vector2::new(x, 300.0), 400.0);

    // One slow frame moves the virus from above the border to well below it.
    game.tick_with(0.25);
    assert_eq!(game.player_state().population, 299);
    assert_eq!(flashes.load(Ordering::SeqCst), 1);
    assert!(game.world.get::<Runner>(virus).unwrap().destroying);

    game.run_for(1.0);
    assert_eq!(game.player_state().population, 299);
    assert_eq!(flashes.load(Ordering::SeqCst), 1);
    assert_eq!(game.runner_count(), 0);
}

#[test]
fn pickups_below_the_border_are_not_misses() {
    let mut game = Game::quiet();
    let x = hero_slots()[FAR_LANE].x;
    game.drop_runner(RunnerKind::FuelPickup, Vector2::new(x, 300.0), 400.0);

    game.tick_with(0.25);
    game.run_for(1.0);

    assert_eq!(game.player_state().population, 300);
    assert_eq!(game.runner_count(), 0);
}

#[test]
fn fuel_pickup_refills_the_meter() {
    let mut game = Game::quiet();
    game.run_for(1.0);
    let before = i32::from(game.player_state().fuel);
    assert!(before < 50000);

    game.drop_on_player(RunnerKind::FuelPickup);
    game.tick();

    assert_eq!(game.player_state().fuel, 50000);
}

// =============================================================================
// Player movement
// =============================================================================

#[test]
fn lane_move_completes_after_tween() {
    let mut game = Game::quiet();

    game.press(InputAction::MoveRight);
    game.press(InputAction::MoveRight);
    game.tick();
    let movement = game.lane_movement();
    assert_eq!(movement.current_lane, 3);
    assert!(movement.is_moving);
    let player = game.player();
    let tween = game.world.get::<TweenPosition>(player).unwrap();
    assert_eq!(tween.easing, Easing::QuadOut);

    game.run_for(0.2);
    let movement = game.lane_movement();
    assert_eq!(movement.current_lane, 3);
    assert!(!movement.is_moving);
    assert!((game.player_x() - hero_slots()[3].x).abs() < 1e-3);
}

#[test]
fn moves_past_the_edge_are_ignored() {
    let mut game = Game::quiet();

    for _ in 0..4 {
        game.press(InputAction::MoveLeft);
        game.run_for(0.2);
    }

    assert_eq!(game.lane_movement().current_lane, 0);
    assert!((game.player_x() - hero_slots()[0].x).abs() < 1e-3);
}

#[test]
fn oil_freezes_the_player_for_a_moment() {
    let mut game = Game::quiet();
    game.drop_on_player(RunnerKind::OilFreeze);
    game.tick();
    assert!(game.lane_movement().is_frozen);

    game.press(InputAction::MoveLeft);
    game.tick();
    assert_eq!(game.lane_movement().current_lane, 2);

    game.run_for(0.5);
    assert!(!game.lane_movement().is_frozen);

    game.press(InputAction::MoveLeft);
    game.run_for(0.2);
    assert_eq!(game.lane_movement().current_lane, 1);
}

// =============================================================================
// Powerups
// =============================================================================

#[test]
fn slowdown_charge_slows_viruses_until_cooldown() {
    let mut game = Game::quiet();
    game.drop_on_player(RunnerKind::SlowdownPickup);
    game.tick();
    assert_eq!(game.player_state().slowdown_charges, 1);

    let x = hero_slots()[FAR_LANE].x;
    let virus = game.drop_runner(RunnerKind::Hazard, Vector2::new(x, -2000.0), 300.0);
    let oil = game.drop_runner(RunnerKind::OilFreeze, Vector2::new(x, -3000.0), 300.0);

    game.press(InputAction::UseSlowdown);
    game.tick();
    assert_eq!(game.player_state().slowdown_charges, 0);
    assert_eq!(game.world.resource::<Difficulty>().slowdown_power, 1);
    let speed = game.world.get::<RigidBody>(virus).unwrap().velocity.y;
    assert!((speed - 195.0).abs() < 1e-3);
    let oil_speed = game.world.get::<RigidBody>(oil).unwrap().velocity.y;
    assert!((oil_speed - 300.0).abs() < 1e-3);

    // No charge left: nothing happens.
    game.press(InputAction::UseSlowdown);
    game.tick();
    assert_eq!(game.world.resource::<Difficulty>().slowdown_power, 1);

    game.run_for(3.2);
    assert_eq!(game.world.resource::<Difficulty>().slowdown_power, 0);
}

#[test]
fn second_slowdown_stacks_and_rearms_the_cooldown() {
    let mut game = Game::quiet();
    game.drop_on_player(RunnerKind::SlowdownPickup);
    game.drop_on_player(RunnerKind::SlowdownPickup);
    game.tick();
    assert_eq!(game.player_state().slowdown_charges, 2);

    let x = hero_slots()[FAR_LANE].x;
    let virus = game.drop_runner(RunnerKind::Hazard, Vector2::new(x, -3000.0), 300.0);

    game.press(InputAction::UseSlowdown);
    game.tick();
    assert_eq!(game.world.resource::<Difficulty>().slowdown_power, 1);

    // 2.5 s in, the first cooldown has not run out yet.
    game.ticks(50);
    assert_eq!(game.world.resource::<Difficulty>().slowdown_power, 1);

    game.press(InputAction::UseSlowdown);
    game.tick();
    assert_eq!(game.player_state().slowdown_charges, 0);
    assert_eq!(game.world.resource::<Difficulty>().slowdown_power, 2);
    let speed = game.world.get::<RigidBody>(virus).unwrap().velocity.y;
    assert!((speed - 126.75).abs() < 1e-3);

    // The cooldown restarted at the second use: 2.9 s after it, still slowed.
    game.ticks(57);
    assert_eq!(game.world.resource::<Difficulty>().slowdown_power, 2);

    // 3.1 s after it, over.
    game.ticks(4);
    assert_eq!(game.world.resource::<Difficulty>().slowdown_power, 0);
}

#[test]
fn nuke_destroys_every_virus_but_keeps_pickups() {
    let mut game = Game::quiet();
    game.drop_on_player(RunnerKind::NukePickup);
    game.tick();
    assert_eq!(game.player_state().nuke_charges, 1);

    let left = hero_slots()[0].x;
    let right = hero_slots()[4].x;
    let v1 = game.drop_runner(RunnerKind::Hazard, Vector2::new(left, -2000.0), 0.0);
    let v2 = game.drop_runner(RunnerKind::Hazard, Vector2::new(right, -2000.0), 0.0);
    let pickup = game.drop_runner(RunnerKind::FuelPickup, Vector2::new(left, -1000.0), 0.0);

    game.press(InputAction::UseNuke);
    game.tick();
    assert_eq!(game.player_state().nuke_charges, 0);

    game.run_for(0.5);
    assert!(game.world.get_entity(v1).is_err());
    assert!(game.world.get_entity(v2).is_err());
    assert!(game.world.get_entity(pickup).is_ok());
    assert_eq!(game.player_state().score, 0);
}

#[test]
fn charges_are_capped_at_three() {
    let mut game = Game::quiet();
    for _ in 0..5 {
        game.drop_on_player(RunnerKind::NukePickup);
        game.tick();
        game.run_for(0.5);
    }
    assert_eq!(game.player_state().nuke_charges, 3);
}

// =============================================================================
// Game over and restart
// =============================================================================

#[test]
fn empty_population_ends_the_run() {
    let mut config = quiet_config();
    config.population_initial = 2;
    let mut game = Game::start(config);

    game.drop_on_border(RunnerKind::Hazard);
    game.drop_on_border(RunnerKind::Hazard);
    game.tick();
    assert_eq!(game.player_state().population, 0);

    game.tick();
    assert_eq!(game.state(), GameStates::GameOver);

    let player = game.player();
    assert!(game.world.get::<BoxCollider>(player).is_none());
    game.press(InputAction::MoveLeft);
    game.tick();
    assert_eq!(game.lane_movement().current_lane, 2);

    // Collisions no longer count once the run is over.
    game.drop_on_border(RunnerKind::Hazard);
    game.tick();
    assert_eq!(game.player_state().population, 0);

    game.run_for(2.0);
    assert!(game.world.get_entity(player).is_err());
}

#[test]
fn empty_soap_meter_ends_the_run() {
    let mut config = quiet_config();
    config.fuel_max = 100;
    let mut game = Game::start(config);

    game.tick();
    assert_eq!(game.state(), GameStates::Playing);
    assert_eq!(game.player_state().fuel, 50);

    game.tick();
    assert_eq!(game.player_state().fuel, 0);
    assert_eq!(game.state(), GameStates::GameOver);
}

#[test]
fn restart_after_game_over_starts_a_fresh_run() {
    let mut config = quiet_config();
    config.population_initial = 1;
    let mut game = Game::start(config);
    game.drop_on_player(RunnerKind::Hazard);
    game.tick();
    game.drop_on_border(RunnerKind::Hazard);
    game.tick();
    game.tick();
    assert_eq!(game.state(), GameStates::GameOver);
    assert_eq!(game.player_state().score, 10);

    game.press(InputAction::Restart);
    game.tick();

    assert_eq!(game.state(), GameStates::Playing);
    assert_eq!(game.player_state().population, 1);
    assert_eq!(game.player_state().score, 0);
    assert_eq!(game.runner_count(), 0);
    assert_eq!(game.lane_movement().current_lane, 2);
}

#[test]
fn restart_is_ignored_while_playing() {
    let mut game = Game::quiet();
    let player = game.player();

    game.press(InputAction::Restart);
    game.tick();

    assert_eq!(game.state(), GameStates::Playing);
    assert_eq!(game.player(), player);
}

#[test]
fn quit_works_in_any_state() {
    let mut game = Game::quiet();
    game.press(InputAction::Quit);
    game.tick();
    assert_eq!(game.state(), GameStates::Quitting);
}
