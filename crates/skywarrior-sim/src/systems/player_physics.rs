//! Player flight model.
//!
//! Arcade physics: velocity chases a throttle-scaled forward target
//! with per-tick smoothing, the afterburner adds a thrust impulse and
//! raises the speed ceiling, and rotation is direct rate control about
//! the craft's local axes.

use glam::Vec3;
use hecs::World;

use skywarrior_core::components::{FlightState, PlayerShip};
use skywarrior_core::constants::*;
use skywarrior_core::enums::ControlMode;
use skywarrior_core::input::{InputSnapshot, PlayerSettings};
use skywarrior_core::types::{Orientation, Position, Velocity};

/// Advance the player one tick. No-op if no player entity exists.
pub fn run(world: &mut World, input: &InputSnapshot, settings: &PlayerSettings, dt: f32) {
    for (_entity, (_ship, position, orientation, velocity, flight)) in world.query_mut::<(
        &PlayerShip,
        &mut Position,
        &mut Orientation,
        &mut Velocity,
        &mut FlightState,
    )>() {
        // Throttle ramp while a key is held.
        if input.throttle_up {
            flight.throttle = (flight.throttle + THROTTLE_RAMP * dt).min(1.0);
        }
        if input.throttle_down {
            flight.throttle = (flight.throttle - THROTTLE_RAMP * dt).max(0.0);
        }

        // Afterburner needs the key, enough throttle, and fuel.
        flight.afterburner_on = input.boost
            && flight.throttle > AFTERBURNER_MIN_THROTTLE
            && flight.afterburner_fuel > 0.0;
        if flight.afterburner_on {
            flight.afterburner_fuel = (flight.afterburner_fuel - AFTERBURNER_DRAIN * dt).max(0.0);
        } else {
            flight.afterburner_fuel = (flight.afterburner_fuel + AFTERBURNER_REGEN * dt)
                .min(MAX_AFTERBURNER_FUEL);
        }

        let forward = orientation.forward();

        // Velocity chases the throttle target. The smoothing factor is
        // per-tick, not dt-scaled; see `VELOCITY_SMOOTHING`.
        let target = forward * flight.throttle * PLAYER_MAX_SPEED;
        velocity.0 = velocity.0.lerp(target, VELOCITY_SMOOTHING);

        if flight.afterburner_on {
            velocity.0 += forward * PLAYER_ACCELERATION * 2.0 * dt;
        }

        velocity.0 *= DRAG_FACTOR;

        // Hard speed ceiling: boost speed with the afterburner lit,
        // otherwise the throttle-scaled maximum.
        let ceiling = if flight.afterburner_on {
            PLAYER_BOOST_SPEED
        } else {
            flight.throttle * PLAYER_MAX_SPEED
        };
        let speed = velocity.0.length();
        if speed > ceiling && speed > 0.0 {
            velocity.0 *= ceiling / speed;
        }

        position.0 += velocity.0 * dt;

        // Merge mouse steering into the keyboard axes. Only arcade mode
        // steers with the mouse, and only while the pointer is captured.
        let mut pitch_input = input.pitch;
        let mut yaw_input = input.yaw;
        let roll_input = input.roll;
        if input.pointer_locked && settings.control_mode == ControlMode::Arcade {
            let sensitivity = settings.mouse_sensitivity * MOUSE_STEER_SCALE;
            yaw_input += input.mouse_dx * sensitivity;
            let invert = if settings.invert_y { -1.0 } else { 1.0 };
            pitch_input += input.mouse_dy * sensitivity * invert;
        }

        if pitch_input.abs() > INPUT_DEADZONE {
            orientation.rotate_local(Vec3::Z, pitch_input * PITCH_RATE * dt);
        }
        if yaw_input.abs() > INPUT_DEADZONE {
            orientation.rotate_local(Vec3::Y, yaw_input * TURN_RATE * dt);
        }
        if roll_input.abs() > INPUT_DEADZONE {
            orientation.rotate_local(Vec3::X, roll_input * ROLL_RATE * dt);
        }

        // G readout from the frame-to-frame acceleration.
        let acceleration = (velocity.0 - flight.previous_velocity) / dt;
        flight.g_force = 1.0 + acceleration.length() / GRAVITY;
        flight.previous_velocity = velocity.0;

        // Altitude floor and arena walls.
        if position.0.y < PLAYER_ALTITUDE_FLOOR {
            position.0.y = PLAYER_ALTITUDE_FLOOR;
            if velocity.0.y < 0.0 {
                velocity.0.y = 0.0;
            }
        }
        position.0.x = position.0.x.clamp(-WORLD_EXTENT, WORLD_EXTENT);
        position.0.z = position.0.z.clamp(-WORLD_EXTENT, WORLD_EXTENT);
    }
}
