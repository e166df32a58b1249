//! World assembly, scene construction and state hooks.
//!
//! [`init_world`] inserts every gameplay resource and registers the
//! observers, the collision rules and the state hooks that do not need a
//! window. [`gameplay_schedule`] builds the per-frame schedule. The hooks
//! run on state transitions:
//! - [`setup`] loads textures and fonts (requires raylib), then starts a run,
//! - [`enter_play`] cleans the scene and builds a fresh play field,
//! - [`enter_game_over`] kills the soap and raises the game-over screen,
//! - [`quit_game`] only logs; the main loop stops on its own.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use log::{info, warn};
use raylib::prelude::*;

use crate::assets::{
    ANTIVIRUS, HAND, LIQUID_SOAP, PEOPLE, SOAP, SOAP_METER, SpriteDef, UI_FONT, WATER_BACK,
    WATER_FRONT, all_sprites,
};
use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::collision::{TriggerTag, gameplay_rules};
use crate::components::dynamictext::DynamicText;
use crate::components::fill::Fill;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::player::{LaneMovement, Player};
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::timer::{Timer, TimerSignal};
use crate::components::tint::Tint;
use crate::components::ttl::Ttl;
use crate::components::tween::{LoopMode, TweenPosition, TweenScale, TweenTint};
use crate::components::ui::{
    CounterIcon, CounterKind, CounterLayout, Flasher, GameOverCurtain, GameOverText, ScoreText,
    SoapMeter,
};
use crate::components::visible::Visible;
use crate::components::zindex::ZIndex;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::lanes::{BORDER_HALF_WIDTH, BORDER_Y, START_LANE, hero_slots};
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::camerashake::CameraShake;
use crate::resources::contacts::ActiveContacts;
use crate::resources::difficulty::Difficulty;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::{InputQueue, InputState};
use crate::resources::playerstate::{MAX_CHARGES, PlayerState};
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::{StateHook, SystemsStore};
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::effects::{camera_shake_system, flash_observer};
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::lifecycle::lifecycle_system;
use crate::systems::movement::movement_system;
use crate::systems::player::{apply_player_input, freeze_player_observer};
use crate::systems::runners::{
    SLOWDOWN_COOLDOWN, catch_missed_hazards, cull_offscreen_runners, nuke_observer,
    runner_timer_observer, slowdown_observer,
};
use crate::systems::timer::update_timers;
use crate::systems::ttl::ttl_system;
use crate::systems::tween::{
    tween_finished_observer, tween_mapposition_system, tween_scale_system, tween_tint_system,
};
use crate::systems::ui::{MAX_PEOPLE_ICONS, PEOPLE_ICONS_PER_ROW, update_ui};

pub const PLAYER_SCALE: f32 = 0.7;
/// Unscaled size of the soap's hitbox.
pub const PLAYER_HITBOX: (f32, f32) = (138.0, 330.0);
/// Seconds the soap takes to dissolve after game over.
pub const DEATH_DURATION: f32 = 1.5;

const UI_Z: i32 = 50;
const FLASHER_Z: i32 = 100;
const CURTAIN_Z: i32 = 150;
const GAME_OVER_TEXT_Z: i32 = 151;

const CURTAIN_COLOR: Color = Color::new(0, 0, 0, 204);
const CURTAIN_FADE: f32 = 30.0;
const GAME_OVER_TEXT_FADE: f32 = 3.0;

// ---------------------------------------------------------------------------
// World assembly
// ---------------------------------------------------------------------------

/// Register `system` as the one-shot hook for `hook`.
///
/// Registered systems are entities in bevy_ecs 0.18; they are marked
/// [`Persistent`] so that cleaning the scene never removes them.
pub fn register_hook<M>(
    world: &mut World,
    hook: StateHook,
    system: impl IntoSystem<(), (), M> + 'static,
) -> SystemId {
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    world
        .get_resource_or_insert_with(SystemsStore::new)
        .insert(hook, id);
    id
}

/// Insert the gameplay resources, observers, collision rules and the
/// window-independent state hooks.
///
/// The world starts in [`GameStates::None`]. The caller registers
/// [`StateHook::Setup`] when textures are available, or requests
/// [`GameStates::Playing`] directly.
pub fn init_world(world: &mut World, config: GameConfig, seed: Option<u64>) {
    let (w, h) = config.window_size();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(PlayerState::from_config(&config));
    world.insert_resource(Difficulty::default());
    world.insert_resource(match seed {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::default(),
    });
    world.insert_resource(CameraShake::default());
    world.insert_resource(ActiveContacts::default());
    world.insert_resource(Camera2DRes::centered(w as f32, h as f32));
    world.insert_resource(ScreenSize {
        w: w as i32,
        h: h as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(InputQueue::default());
    world.insert_resource(AnimationStore::default());
    world.insert_resource(TextureStore::new());
    world.insert_resource(config);
    world.insert_resource(SystemsStore::new());

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(collision_observer), Persistent));
    world.spawn((Observer::new(runner_timer_observer), Persistent));
    world.spawn((Observer::new(slowdown_observer), Persistent));
    world.spawn((Observer::new(nuke_observer), Persistent));
    world.spawn((Observer::new(freeze_player_observer), Persistent));
    world.spawn((Observer::new(flash_observer), Persistent));
    world.spawn((Observer::new(tween_finished_observer), Persistent));

    for rule in gameplay_rules() {
        world.spawn((rule, Persistent));
    }

    register_hook(world, StateHook::EnterPlay, enter_play);
    register_hook(world, StateHook::EnterGameOver, enter_game_over);
    register_hook(world, StateHook::QuitGame, quit_game);

    // Observers must be in place before the first event fires.
    world.flush();
}

/// Request `state` and apply the transition right away.
pub fn request_state(world: &mut World, state: GameStates) {
    world.resource_mut::<NextGameState>().set(state);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

/// The per-frame gameplay schedule.
///
/// Rendering and raylib polling are not part of it, so it runs headless.
pub fn gameplay_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            apply_player_input,
            lifecycle_system.run_if(state_is_playing),
            check_pending_state,
            update_timers,
            (
                tween_mapposition_system,
                tween_scale_system,
                tween_tint_system,
            ),
            movement_system,
            catch_missed_hazards,
            cull_offscreen_runners,
            ttl_system,
            collision_detector,
            animation,
            camera_shake_system,
            update_ui,
        )
            .chain(),
    );
    schedule
}

// ---------------------------------------------------------------------------
// State hooks
// ---------------------------------------------------------------------------

/// Load every sprite and the UI font from the assets directory, then start
/// the first run. Missing files are logged and drawn with fallback colours.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut fonts: NonSendMut<FontStore>,
    config: Res<GameConfig>,
) {
    let font_path = config.assets_dir.join(UI_FONT.1);
    match rl.load_font(&th, &font_path.to_string_lossy()) {
        Ok(font) => fonts.add(UI_FONT.0, font),
        Err(e) => warn!("Font {:?} not loaded, using default: {}", font_path, e),
    }

    let mut tex_store = TextureStore::new();
    let mut anim_store = AnimationStore::default();
    for def in all_sprites() {
        let path = config.assets_dir.join(def.file);
        match rl.load_texture(&th, &path.to_string_lossy()) {
            Ok(tex) => {
                if let Some(anim) = AnimationResource::from_sheet(def, tex.width as f32) {
                    anim_store.insert(def.key, anim);
                }
                tex_store.insert(def.key, tex);
            }
            Err(e) => warn!("Texture {:?} not loaded, using fallback: {}", path, e),
        }
    }
    info!(
        "Loaded {} textures, {} animations, {} fonts",
        tex_store.len(),
        anim_store.animations.len(),
        fonts.len()
    );
    commands.insert_resource(tex_store);
    commands.insert_resource(anim_store);

    next_state.set(GameStates::Playing);
}

/// Reset the run state and build a fresh play field.
pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut camera: ResMut<Camera2DRes>,
    scene: Query<Entity, (With<Group>, Without<Persistent>)>,
) {
    for entity in scene.iter() {
        commands.entity(entity).try_despawn();
    }

    commands.insert_resource(PlayerState::from_config(&config));
    commands.insert_resource(Difficulty::default());
    commands.insert_resource(CameraShake::default());
    commands.insert_resource(ActiveContacts::default());
    camera.0.target = Vector2::zero();

    spawn_player(&mut commands);
    spawn_border(&mut commands);
    spawn_controllers(&mut commands, &config);
    spawn_background(&mut commands);
    spawn_effects(&mut commands);
    spawn_ui(&mut commands, &mut rng);
    info!("New run started");
}

/// Dissolve the soap and fade in the game-over screen.
pub fn enter_game_over(
    mut commands: Commands,
    players: Query<(Entity, Option<&Scale>, Option<&Tint>), With<Player>>,
    curtains: Query<(Entity, &Tint), With<GameOverCurtain>>,
    texts: Query<(Entity, &Tint), With<GameOverText>>,
) {
    for (entity, scale, tint) in players.iter() {
        let from_scale = scale.map(|s| s.scale).unwrap_or(Vector2::new(1.0, 1.0));
        let from_tint = tint.map(|t| t.color).unwrap_or(Color::WHITE);
        commands.entity(entity).try_remove::<BoxCollider>();
        commands.entity(entity).try_insert((
            TweenScale::new(from_scale, Vector2::zero(), DEATH_DURATION),
            TweenTint::new(from_tint, Color::new(255, 0, 0, 0), DEATH_DURATION),
            Ttl::new(DEATH_DURATION),
        ));
    }
    for (entity, tint) in curtains.iter() {
        commands
            .entity(entity)
            .try_insert(TweenTint::new(tint.color, CURTAIN_COLOR, CURTAIN_FADE));
    }
    for (entity, tint) in texts.iter() {
        commands
            .entity(entity)
            .try_insert(TweenTint::new(tint.color, Color::WHITE, GAME_OVER_TEXT_FADE));
    }
}

pub fn quit_game() {
    info!("Quitting");
}

// ---------------------------------------------------------------------------
// Scene construction
// ---------------------------------------------------------------------------

fn animation_for(def: &SpriteDef) -> Option<Animation> {
    def.frame_ms.map(|_| Animation::new(def.key))
}

fn spawn_player(commands: &mut Commands) {
    let mut player = commands.spawn((
        Player,
        LaneMovement::default(),
        Group::new("player"),
        MapPosition::from_vec(hero_slots()[START_LANE]),
        Scale::uniform(PLAYER_SCALE),
        Rotation::default(),
        Sprite::from_def(&SOAP),
        ZIndex(30),
        BoxCollider::centered(PLAYER_HITBOX.0 * PLAYER_SCALE, PLAYER_HITBOX.1 * PLAYER_SCALE),
        TriggerTag::Player,
        Tint::default(),
    ));
    if let Some(anim) = animation_for(&SOAP) {
        player.insert(anim);
    }
}

fn spawn_border(commands: &mut Commands) {
    commands.spawn((
        Group::new("border"),
        MapPosition::new(0.0, BORDER_Y),
        BoxCollider::centered(BORDER_HALF_WIDTH * 2.0, 1.0),
        TriggerTag::Border,
    ));
}

fn spawn_controllers(commands: &mut Commands, config: &GameConfig) {
    commands.spawn((
        Group::new("controllers"),
        Timer::repeating(config.spawn_interval(), TimerSignal::SpawnTick),
    ));
    commands.spawn((
        Group::new("controllers"),
        Timer::repeating(config.ramp_interval(), TimerSignal::DifficultyTick),
    ));
    commands.spawn((
        Group::new("controllers"),
        Timer::once_idle(SLOWDOWN_COOLDOWN, TimerSignal::SlowdownCooldown),
    ));
}

fn spawn_background(commands: &mut Commands) {
    for (def, z, period) in [(&WATER_BACK, -10, 9.0), (&WATER_FRONT, 10, 3.0)] {
        let height = def.frame_size.1;
        for start in [0.0, -height] {
            let from = Vector2::new(0.0, start);
            let to = Vector2::new(0.0, start + height);
            commands.spawn((
                Group::new("background"),
                MapPosition::from_vec(from),
                Sprite::from_def(def),
                ZIndex(z),
                TweenPosition::new(from, to, period).with_loop_mode(LoopMode::Loop),
            ));
        }
    }
    commands.spawn((
        Group::new("background"),
        MapPosition::new(0.0, 0.0),
        Sprite::from_def(&HAND),
        ZIndex(0),
    ));
}

fn spawn_effects(commands: &mut Commands) {
    commands.spawn((
        Group::new("effects"),
        Flasher,
        MapPosition::new(0.0, 0.0),
        Fill::new(1400.0, 800.0),
        Tint::transparent(),
        ZIndex(FLASHER_Z),
    ));
    commands.spawn((
        Group::new("effects"),
        GameOverCurtain,
        MapPosition::new(0.0, 0.0),
        Fill::new(1400.0, 1000.0),
        Tint::transparent(),
        ZIndex(CURTAIN_Z),
    ));
    commands.spawn((
        Group::new("effects"),
        GameOverText,
        MapPosition::new(0.0, 0.0),
        DynamicText::new("GAME OVER", UI_FONT.0, 56.0, Color::WHITE).centered(),
        Tint::transparent(),
        ZIndex(GAME_OVER_TEXT_Z),
    ));
}

fn spawn_label(commands: &mut Commands, at: Vector2, text: &str, size: f32) -> Entity {
    commands
        .spawn((
            Group::new("ui"),
            MapPosition::from_vec(at),
            DynamicText::new(text, UI_FONT.0, size, Color::WHITE),
            ZIndex(UI_Z),
        ))
        .id()
}

fn spawn_counter_row(
    commands: &mut Commands,
    counter: CounterKind,
    layout: CounterLayout,
    mut sprite_for: impl FnMut() -> &'static SpriteDef,
) {
    for index in 0..layout.max_count {
        commands.spawn((
            Group::new("ui"),
            CounterIcon { counter, index },
            MapPosition::from_vec(layout.position(index)),
            Sprite::from_def(sprite_for()),
            ZIndex(UI_Z + index as i32),
            Visible(false),
        ));
    }
}

fn spawn_ui(commands: &mut Commands, rng: &mut GameRng) {
    let root = Vector2::new(0.0, 240.0);
    let at = |x: f32, y: f32| root + Vector2::new(x, y);

    let meter_origin = Vector2::new(0.0, SOAP_METER.frame_size.1 * 0.5);
    commands.spawn((
        Group::new("ui"),
        SoapMeter,
        MapPosition::from_vec(at(320.0, 20.0)),
        Scale::default(),
        Sprite::from_def(&SOAP_METER).with_origin(meter_origin),
        ZIndex(UI_Z),
    ));
    spawn_label(commands, at(320.0, -15.0), "Soap-o-meter", 42.0);
    let score = spawn_label(commands, at(-470.0, -15.0), "Score: 0", 36.0);
    commands.entity(score).insert(ScoreText);
    spawn_label(commands, at(-620.0, -15.0), "People:", 36.0);

    let charges = MAX_CHARGES as usize;
    spawn_counter_row(
        commands,
        CounterKind::Slowdown,
        CounterLayout::stack(at(450.0, -130.0), charges),
        || &LIQUID_SOAP,
    );
    spawn_counter_row(
        commands,
        CounterKind::Nuke,
        CounterLayout::stack(at(530.0, -130.0), charges),
        || &ANTIVIRUS,
    );
    spawn_counter_row(
        commands,
        CounterKind::Population,
        CounterLayout {
            origin: at(-620.0, 10.0),
            max_count: MAX_PEOPLE_ICONS,
            break_count: PEOPLE_ICONS_PER_ROW,
            minor_sep: Vector2::new(7.0, 0.0),
            major_sep: Vector2::new(0.0, 12.0),
        },
        || &PEOPLE[rng.0.usize(0..PEOPLE.len())],
    );
}
