use bevy::prelude::*;

/// Movement state machine for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementState {
    #[default]
    Idle,
    Moving,
}

/// The single player entity, in world pixel coordinates (y grows downward)
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    target: Option<Vec2>,
    /// Pixels advanced per update tick
    pub speed: f32,
}

impl Player {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            target: None,
            speed,
        }
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn state(&self) -> MovementState {
        if self.target.is_some() {
            MovementState::Moving
        } else {
            MovementState::Idle
        }
    }

    /// Start moving toward `target` (Idle -> Moving, or retarget while Moving)
    pub fn set_target(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Drop the current target; the player stops where it stands
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Advance one tick at constant speed. Once the target is within one step
    /// the position snaps onto it exactly and the player goes Idle.
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        let delta = target - self.position;
        let distance = delta.length();

        if distance > self.speed {
            self.position += delta / distance * self.speed;
        } else {
            self.position = target;
            self.target = None;
        }
    }
}

/// Marker component for the player's sprite entity
#[derive(Component)]
pub struct PlayerSprite;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_tick_is_noop() {
        let mut player = Player::new(Vec2::new(10.0, 10.0), 5.0);
        player.tick();
        assert_eq!(player.position, Vec2::new(10.0, 10.0));
        assert_eq!(player.state(), MovementState::Idle);
    }

    #[test]
    fn test_arrival_within_one_step() {
        let mut player = Player::new(Vec2::new(100.0, 100.0), 5.0);
        let target = Vec2::new(103.0, 104.0); // distance exactly 5
        player.set_target(target);
        assert_eq!(player.state(), MovementState::Moving);

        player.tick();

        assert_eq!(player.position, target);
        assert_eq!(player.target(), None);
        assert_eq!(player.state(), MovementState::Idle);
    }

    #[test]
    fn test_approach_moves_exactly_speed() {
        let start = Vec2::new(50.0, 80.0);
        let target = Vec2::new(350.0, 480.0);
        let mut player = Player::new(start, 5.0);
        player.set_target(target);

        let before = start.distance(target);
        player.tick();
        let after = player.position.distance(target);

        assert!((before - after - 5.0).abs() < 1e-3);
        assert_eq!(player.state(), MovementState::Moving);

        // Still heading straight at the target
        let original_dir = (target - start).normalize();
        let step_dir = (player.position - start).normalize();
        assert!(original_dir.dot(step_dir) > 0.9999);
    }

    #[test]
    fn test_clear_target_stops_in_place() {
        let mut player = Player::new(Vec2::ZERO, 5.0);
        player.set_target(Vec2::new(100.0, 0.0));
        player.tick();
        player.clear_target();
        player.tick();

        assert_eq!(player.position, Vec2::new(5.0, 0.0));
        assert_eq!(player.state(), MovementState::Idle);
    }
}
