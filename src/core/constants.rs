// Tick and timing
pub const TICKS_PER_SECOND: u32 = 32;

// Bird physics (units per tick, y grows downward)
pub const GRAVITY: f64 = 1.0;
pub const MAX_FALL_VELOCITY: f64 = 10.0;
pub const FLAP_IMPULSE: f64 = -8.0;
pub const LAUNCH_VELOCITY: f64 = -9.0;

// Bird spawn position as fractions of the screen
pub const PLAYER_X_DIVISOR: f64 = 5.0;
pub const PLAYER_Y_DIVISOR: f64 = 2.0;

// Pipe generation
pub const GAP_RANGE_TAIL_FACTOR: f64 = 1.2;

// Leading pipe spawns its successor once it drops below this x
pub const SPAWN_WINDOW_MAX_X: f64 = 5.0;

// Score when the bird's midpoint is within this many units past a pipe's midpoint
pub const SCORE_WINDOW: f64 = 4.0;

// Files under the data directory
pub const CONFIG_FILE: &str = "config.json";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const LOG_FILE: &str = "flappy.log";
