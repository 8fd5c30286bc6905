// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::camera::{MOVEMENT_SPEED, TURN_SPEED};

#[derive(Parser, Debug, Clone)]
#[command(name = "cube-light")]
#[command(about = "Lit cube demo with a free-flying camera", long_about = None)]
pub struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Camera movement speed in world units per second
    #[arg(long, default_value_t = MOVEMENT_SPEED)]
    pub speed: f32,

    /// Camera turn speed in degrees per second
    #[arg(long = "turn-speed", default_value_t = TURN_SPEED)]
    pub turn_speed: f32,

    /// Present frames as fast as possible instead of syncing to the display
    #[arg(long = "no-vsync", default_value_t = false)]
    pub no_vsync: bool,
}
