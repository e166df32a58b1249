//! Hope in Soap main entry point.
//!
//! A lane runner written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The soap bar guards the bottom of a five-lane play field. Viruses and
//! pickups fall down the lanes; every virus that gets past costs a person,
//! and the soap meter drains while the run lasts.
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini`
//! 2. Open the raylib window, build the ECS world and register the hooks
//! 3. Enter the Setup state, which loads assets and starts a run
//! 4. Each frame: poll input, run the gameplay schedule, render
//! 5. Stop when the window closes or the game enters the Quitting state
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};

use hopeinsoap::game::{self, gameplay_schedule, init_world, register_hook, request_state};
use hopeinsoap::resources::fontstore::FontStore;
use hopeinsoap::resources::gameconfig::GameConfig;
use hopeinsoap::resources::gamestate::{GameState, GameStates};
use hopeinsoap::resources::systemsstore::StateHook;
use hopeinsoap::systems::input::poll_input;
use hopeinsoap::systems::render::render_frame;
use hopeinsoap::systems::time::update_world_time;

/// Hope in Soap
#[derive(Parser)]
#[command(version, about = "Keep the soap between the viruses and the people.")]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed the gameplay RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Default configuration written to {}", cli.config.display());
        return;
    }
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = {
        let mut builder = raylib::init();
        builder
            .size(window_width as i32, window_height as i32)
            .resizable()
            .title("Hope in Soap");
        if config.vsync {
            builder.vsync();
        }
        builder.build()
    };
    rl.set_target_fps(config.target_fps);
    // Escape is bound to the Quit action instead.
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    init_world(&mut world, config, cli.seed);
    world.insert_non_send_resource(FontStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    register_hook(&mut world, StateHook::Setup, game::setup);
    world.flush();

    request_state(&mut world, GameStates::Setup);

    let mut input = Schedule::default();
    input.add_systems(poll_input);
    let mut update = gameplay_schedule();

    // --------------- Main loop ---------------
    info!("Hope in Soap started");
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        input.run(&mut world);
        update.run(&mut world);
        render_frame(&mut world);

        world.clear_trackers();
    }
    info!("Bye");
}
