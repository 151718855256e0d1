//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World bounds ---

/// Maximum distance from the origin on each horizontal axis (units).
pub const WORLD_EXTENT: f32 = 2500.0;

/// Minimum player altitude. Downward velocity is zeroed when clamped.
pub const PLAYER_ALTITUDE_FLOOR: f32 = 10.0;

/// Minimum enemy altitude.
pub const ENEMY_ALTITUDE_FLOOR: f32 = 15.0;

// --- Player flight model ---

/// Maximum speed at full throttle without afterburner (units/s).
pub const PLAYER_MAX_SPEED: f32 = 400.0;

/// Speed ceiling while the afterburner is active (units/s).
pub const PLAYER_BOOST_SPEED: f32 = 600.0;

/// Base acceleration used for the afterburner thrust impulse (units/s²).
pub const PLAYER_ACCELERATION: f32 = 80.0;

/// Pitch rate (rad/s) about the local Z axis.
pub const PITCH_RATE: f32 = 2.5;

/// Yaw rate (rad/s) about the local Y axis.
pub const TURN_RATE: f32 = 3.5;

/// Roll rate (rad/s) about the local X axis.
pub const ROLL_RATE: f32 = 4.5;

/// Throttle ramp rate (fraction per second) while a throttle key is held.
pub const THROTTLE_RAMP: f32 = 1.5;

/// Per-tick velocity smoothing factor toward the throttle target.
/// Intentionally NOT dt-scaled: the steady-state speed is coupled to the
/// fixed 60 Hz tick rate. Do not convert to a continuous-time formula.
pub const VELOCITY_SMOOTHING: f32 = 0.05;

/// Isotropic drag multiplier applied to velocity each tick.
pub const DRAG_FACTOR: f32 = 0.995;

/// Afterburner fuel capacity.
pub const MAX_AFTERBURNER_FUEL: f32 = 100.0;

/// Afterburner fuel drain rate (units/s) while active.
pub const AFTERBURNER_DRAIN: f32 = 20.0;

/// Afterburner fuel regeneration rate (units/s) while inactive.
pub const AFTERBURNER_REGEN: f32 = 10.0;

/// Minimum throttle for the afterburner to engage.
pub const AFTERBURNER_MIN_THROTTLE: f32 = 0.5;

/// Mouse steering scale applied on top of the sensitivity setting.
pub const MOUSE_STEER_SCALE: f32 = 0.003;

/// Rotation inputs below this magnitude are ignored.
pub const INPUT_DEADZONE: f32 = 0.01;

/// Gravitational acceleration used for the G-force readout (units/s²).
pub const GRAVITY: f32 = 9.8;

/// Player hull radius, also the muzzle offset for spawned projectiles.
pub const PLAYER_HULL_RADIUS: f32 = 25.0;

// --- Weapons ---

/// Bullet muzzle velocity (units/s).
pub const BULLET_SPEED: f32 = 1200.0;

/// Bullet lifetime in ticks.
pub const BULLET_LIFE_TICKS: u32 = 120;

/// Bullet impact damage.
pub const BULLET_DAMAGE: f32 = 20.0;

/// Bullets below this altitude are removed.
pub const BULLET_FLOOR: f32 = -50.0;

/// Homing missile cruise speed (units/s).
pub const MISSILE_SPEED: f32 = 300.0;

/// Missile impact damage.
pub const MISSILE_DAMAGE: f32 = 50.0;

/// Missile guidance slerp rate (per second).
pub const MISSILE_TURN_RATE: f32 = 3.0;

/// Homing window after launch (seconds). Afterwards the missile flies straight.
pub const MISSILE_HOMING_SECS: f32 = 5.0;

/// Post-launch interval during which a missile cannot hit its own firer.
pub const MISSILE_GRACE_SECS: f32 = 0.5;

/// Missile lifetime in ticks.
pub const MISSILE_LIFE_TICKS: u32 = 600;

/// Enemy missile cooldown (seconds).
pub const ENEMY_MISSILE_COOLDOWN_SECS: f32 = 3.0;

// --- Collision ---

/// Hit radius for projectiles against an enemy craft (units).
pub const ENEMY_HIT_RADIUS: f32 = 15.0;

/// Hit radius for projectiles against the player (units).
pub const PLAYER_HIT_RADIUS: f32 = 20.0;

// --- Scoring ---

/// Score per bullet hit on an enemy.
pub const SCORE_BULLET_HIT: u32 = 100;

/// Score per missile hit on an enemy.
pub const SCORE_MISSILE_HIT: u32 = 200;

/// Bonus score for destroying an enemy with a bullet.
pub const SCORE_BULLET_KILL: u32 = 500;

/// Bonus score for destroying an enemy with a missile.
pub const SCORE_MISSILE_KILL: u32 = 1000;

// --- Enemy AI ---

/// Minimum range for enemy cannon fire (units).
pub const ENEMY_FIRE_MIN_RANGE: f32 = 150.0;

/// Maximum range for enemy cannon fire (units).
pub const ENEMY_FIRE_MAX_RANGE: f32 = 800.0;

/// Aim-cone dot product gate for enemy cannon fire.
pub const ENEMY_AIM_CONE: f32 = 0.7;

/// Per-tick fire probability scale (multiplied by aggressiveness * dt).
pub const ENEMY_FIRE_PROB_SCALE: f32 = 0.3;

/// Maximum range for enemy missile fire (units).
pub const ENEMY_MISSILE_RANGE: f32 = 1000.0;

/// Aim-cone dot product gate for enemy missile fire.
pub const ENEMY_MISSILE_AIM_CONE: f32 = 0.2;

/// Bullet threat detection radius (units).
pub const BULLET_THREAT_RADIUS: f32 = 100.0;

/// Missile threat detection radius (units).
pub const MISSILE_THREAT_RADIUS: f32 = 200.0;

/// Evasion duration after a bullet threat (seconds).
pub const BULLET_EVADE_SECS: f32 = 1.0;

/// Evasion duration after a missile threat or proximity retreat (seconds).
pub const MISSILE_EVADE_SECS: f32 = 2.0;

/// Bullet-threat evasion steering strength. Doubled for missile threats.
pub const EVADE_STRENGTH: f32 = 0.2;

/// Probability per tick of flipping the circling direction.
pub const CIRCLE_FLIP_PROB: f32 = 0.01;

/// Range-error band before circling applies a distance correction (units).
pub const CIRCLE_DISTANCE_BAND: f32 = 50.0;

/// Velocity smoothing rate for enemy steering (scaled by dt).
pub const ENEMY_STEER_SMOOTHING: f32 = 1.5;

/// Speed below which an enemy keeps its current facing.
pub const ENEMY_FACING_THRESHOLD: f32 = 0.1;

// --- Mission setup ---

/// Player starting health.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Cannon rounds at mission start.
pub const CANNON_ROUNDS: u32 = 500;

/// Missile rounds at mission start.
pub const MISSILE_ROUNDS: u32 = 20;

/// Minimum enemy spawn radius around the player (units).
pub const SPAWN_RADIUS_MIN: f32 = 500.0;

/// Maximum enemy spawn radius around the player (units).
pub const SPAWN_RADIUS_MAX: f32 = 1500.0;

/// Minimum enemy spawn altitude (units).
pub const SPAWN_ALTITUDE_MIN: f32 = 50.0;

/// Maximum enemy spawn altitude (units).
pub const SPAWN_ALTITUDE_MAX: f32 = 250.0;

/// Radar display range for contact reporting (units).
pub const RADAR_RANGE: f32 = 1000.0;
