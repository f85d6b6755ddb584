//! Runtime constants and tuning parameters.

/// Physics tick rate (Hz).
pub const PHYSICS_RATE: u32 = 60;

/// Seconds per physics tick.
pub const DT: f32 = 1.0 / PHYSICS_RATE as f32;

/// Frame rate assumed by the turn controller when the host cannot report one.
pub const DEFAULT_FRAME_RATE: u32 = 60;

// --- Locomotion ---

/// Turn speed in degrees per frame at the reference frame rate.
pub const TURN_SPEED: f32 = 2.0;

/// Forward drive speed applied while the agent intends to move.
pub const MOVE_FORCE: f32 = 1.4;

/// Angular dead zone around the desired yaw (degrees).
/// Differences inside `[0, DEAD_ZONE)` or `(360 - DEAD_ZONE, 360)` are not corrected.
pub const TURN_DEAD_ZONE_DEGREES: f32 = 1.0;

/// Walk clip playback speed per unit of planar velocity.
pub const WALK_ANIMATION_SPEED_FACTOR: f32 = 0.3;

/// Crossfade time used when starting the walk clip (seconds).
pub const WALK_ANIMATION_FADE_SECS: f32 = 0.2;

// --- Navigation ---

/// Planar distance under which a destination counts as reached.
pub const ARRIVAL_RADIUS: f32 = 1.0;

/// Half-width of the square wander region around the agent.
pub const WANDER_RANGE: f32 = 5.0;

/// Height destinations are pinned to when chasing a target.
pub const GROUND_HEIGHT: f32 = 0.0;

// --- Perception ---

/// Default field of view (degrees).
pub const DEFAULT_FOV_DEGREES: f32 = 90.0;

/// Height of the forward trace above the agent's origin.
pub const EYE_HEIGHT: f32 = 0.9;

/// Maximum line-of-trace distance.
pub const TRACE_RANGE: f32 = 20.0;

/// Collision layer mask used by perception traces.
pub const TRACE_LAYER_MASK: u32 = 1;

// --- Engagement ---

/// Ticks between two consecutive shots.
pub const FIRE_COOLDOWN_TICKS: u32 = 50;

// --- Bodies ---

/// Collision layer shared by characters, obstacles and projectiles.
pub const CHARACTER_COLLISION_LAYER: u32 = 1;

/// Mass of a character rigid body.
pub const CHARACTER_MASS: f32 = 1.0;

/// Agent capsule diameter.
pub const AGENT_CAPSULE_DIAMETER: f32 = 1.0;

/// Player capsule diameter.
pub const PLAYER_CAPSULE_DIAMETER: f32 = 1.5;

/// Character capsule total height.
pub const CAPSULE_HEIGHT: f32 = 1.8;

/// Vertical offset of the capsule centre above the character origin.
pub const CAPSULE_CENTER_HEIGHT: f32 = 0.9;

/// Downward acceleration applied to bodies above the ground plane.
pub const GRAVITY: f32 = 9.81;

// --- Ground contact ---

/// Contacts lower than this distance below the body origin are ignored.
pub const GROUND_CONTACT_DEPTH: f32 = 1.0;

/// Minimum upward normal component for a contact to count as ground.
pub const GROUND_NORMAL_MIN_Y: f32 = 0.75;

// --- Projectiles ---

/// Projectile muzzle speed.
pub const PROJECTILE_SPEED: f32 = 10.0;

/// Distance ahead of the muzzle at which a projectile spawns.
pub const PROJECTILE_SPAWN_OFFSET: f32 = 1.0;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f32 = 0.05;

/// Projectile mass.
pub const PROJECTILE_MASS: f32 = 10.0;

/// Ticks a projectile lives before it is removed (3 seconds at 60Hz).
pub const PROJECTILE_LIFETIME_TICKS: u64 = 180;

// --- World bounds ---

/// Entities further than this from the origin are removed.
pub const WORLD_RADIUS: f32 = 500.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
