use crate::error::{ErrorSeverity, GameError};
use crate::geometry::Vec2;

/// Match configuration constants and tunable parameters.
///
/// Every runtime field has a `DEFAULT_*` constant. Content files only need to
/// override the values they care about.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FightConfig {
    /// Y coordinate of the floor line. Y grows downward.
    pub floor_y: f32,
    /// Leftmost x an actor's body may reach.
    pub left_bound: f32,
    /// Rightmost x an actor's body may reach.
    pub right_bound: f32,
    pub start_positions: [Vec2; 2],

    /// Round length in seconds.
    pub round_time_secs: f32,
    /// Rounds needed to take the set.
    pub win_goal: u32,
    /// How long the set winner holds the victory pose.
    pub victory_pose_secs: f32,

    pub hitstop_hit_secs: f32,
    pub hitstop_block_secs: f32,
    pub knockback: f32,
    pub block_push: f32,
    pub attacker_pushback: f32,

    pub max_health: i32,
    pub dizzy_max: f32,
    pub dizzy_per_damage: f32,
    /// Dizzy drained per second of simulated time.
    pub dizzy_decay_per_sec: f32,
    /// Round closes once `ko_clock * ko_dizzy_factor > loser dizzy`.
    pub ko_dizzy_factor: f32,
    /// KO clock value that closes the round regardless of dizzy.
    pub ko_cap_secs: f32,
    /// Fraction of carried dizzy subtracted from next-round health.
    pub dizzy_health_penalty: f32,

    /// Consecutive mismatched ticks a motion input tolerates.
    pub motion_buffer_ticks: u32,
    /// Maximum camera scroll in either direction from center.
    pub camera_scroll_limit: f32,

    /// Push overlapping bodies apart while either actor is airborne.
    pub separate_airborne_bodies: bool,
    /// Stop the round clock while hitstop is active.
    pub hitstop_freezes_round_clock: bool,
}

impl FightConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INPUT_HISTORY: usize = 16;
    pub const MAX_MOTION_TOKENS: usize = 8;
    pub const MAX_PROJECTILES: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FLOOR_Y: f32 = 900.0;
    pub const DEFAULT_LEFT_BOUND: f32 = 0.0;
    pub const DEFAULT_RIGHT_BOUND: f32 = 1920.0;
    pub const DEFAULT_START_POSITIONS: [Vec2; 2] =
        [Vec2::new(500.0, Self::DEFAULT_FLOOR_Y), Vec2::new(1400.0, Self::DEFAULT_FLOOR_Y)];
    pub const DEFAULT_ROUND_TIME_SECS: f32 = 60.0;
    pub const DEFAULT_WIN_GOAL: u32 = 2;
    pub const DEFAULT_VICTORY_POSE_SECS: f32 = 3.0;
    pub const DEFAULT_HITSTOP_HIT_SECS: f32 = 0.1;
    pub const DEFAULT_HITSTOP_BLOCK_SECS: f32 = 0.05;
    pub const DEFAULT_KNOCKBACK: f32 = 1.3;
    pub const DEFAULT_BLOCK_PUSH: f32 = 0.5;
    pub const DEFAULT_ATTACKER_PUSHBACK: f32 = 1.0;
    pub const DEFAULT_MAX_HEALTH: i32 = 200;
    pub const DEFAULT_DIZZY_MAX: f32 = 100.0;
    pub const DEFAULT_DIZZY_PER_DAMAGE: f32 = 1.5;
    pub const DEFAULT_DIZZY_DECAY_PER_SEC: f32 = 5.0;
    pub const DEFAULT_KO_DIZZY_FACTOR: f32 = 20.0;
    pub const DEFAULT_KO_CAP_SECS: f32 = 10.0;
    pub const DEFAULT_DIZZY_HEALTH_PENALTY: f32 = 0.25;
    pub const DEFAULT_MOTION_BUFFER_TICKS: u32 = 15;
    pub const DEFAULT_CAMERA_SCROLL_LIMIT: f32 = 480.0;

    pub fn new() -> Self {
        Self {
            floor_y: Self::DEFAULT_FLOOR_Y,
            left_bound: Self::DEFAULT_LEFT_BOUND,
            right_bound: Self::DEFAULT_RIGHT_BOUND,
            start_positions: Self::DEFAULT_START_POSITIONS,
            round_time_secs: Self::DEFAULT_ROUND_TIME_SECS,
            win_goal: Self::DEFAULT_WIN_GOAL,
            victory_pose_secs: Self::DEFAULT_VICTORY_POSE_SECS,
            hitstop_hit_secs: Self::DEFAULT_HITSTOP_HIT_SECS,
            hitstop_block_secs: Self::DEFAULT_HITSTOP_BLOCK_SECS,
            knockback: Self::DEFAULT_KNOCKBACK,
            block_push: Self::DEFAULT_BLOCK_PUSH,
            attacker_pushback: Self::DEFAULT_ATTACKER_PUSHBACK,
            max_health: Self::DEFAULT_MAX_HEALTH,
            dizzy_max: Self::DEFAULT_DIZZY_MAX,
            dizzy_per_damage: Self::DEFAULT_DIZZY_PER_DAMAGE,
            dizzy_decay_per_sec: Self::DEFAULT_DIZZY_DECAY_PER_SEC,
            ko_dizzy_factor: Self::DEFAULT_KO_DIZZY_FACTOR,
            ko_cap_secs: Self::DEFAULT_KO_CAP_SECS,
            dizzy_health_penalty: Self::DEFAULT_DIZZY_HEALTH_PENALTY,
            motion_buffer_ticks: Self::DEFAULT_MOTION_BUFFER_TICKS,
            camera_scroll_limit: Self::DEFAULT_CAMERA_SCROLL_LIMIT,
            separate_airborne_bodies: true,
            hitstop_freezes_round_clock: false,
        }
    }

    #[must_use]
    pub fn with_round_time(mut self, secs: f32) -> Self {
        self.round_time_secs = secs;
        self
    }

    #[must_use]
    pub fn with_win_goal(mut self, rounds: u32) -> Self {
        self.win_goal = rounds;
        self
    }

    #[must_use]
    pub fn with_start_positions(mut self, one: Vec2, two: Vec2) -> Self {
        self.start_positions = [one, two];
        self
    }

    #[must_use]
    pub fn with_airborne_separation(mut self, enabled: bool) -> Self {
        self.separate_airborne_bodies = enabled;
        self
    }

    /// Checks that the configuration can produce a playable match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.left_bound < self.right_bound) {
            return Err(ConfigError::InvertedBounds {
                left: self.left_bound,
                right: self.right_bound,
            });
        }
        for (slot, start) in self.start_positions.iter().enumerate() {
            if start.x < self.left_bound || start.x > self.right_bound || start.y > self.floor_y {
                return Err(ConfigError::StartOutOfBounds { slot });
            }
        }
        if self.win_goal == 0 {
            return Err(ConfigError::ZeroWinGoal);
        }
        if self.max_health <= 0 {
            return Err(ConfigError::NonPositive("max_health"));
        }
        let positive = [
            ("round_time_secs", self.round_time_secs),
            ("victory_pose_secs", self.victory_pose_secs),
            ("dizzy_max", self.dizzy_max),
            ("ko_dizzy_factor", self.ko_dizzy_factor),
            ("ko_cap_secs", self.ko_cap_secs),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, value)| !(*value > 0.0)) {
            return Err(ConfigError::NonPositive(*name));
        }
        Ok(())
    }
}

impl Default for FightConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised by [`FightConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("arena bounds are inverted or empty ({left}..{right})")]
    InvertedBounds { left: f32, right: f32 },

    #[error("start position for slot {slot} lies outside the arena")]
    StartOutOfBounds { slot: usize },

    #[error("win goal must be at least one round")]
    ZeroWinGoal,

    #[error("{0} must be positive")]
    NonPositive(&'static str),
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvertedBounds { .. } => "CONFIG_INVERTED_BOUNDS",
            Self::StartOutOfBounds { .. } => "CONFIG_START_OUT_OF_BOUNDS",
            Self::ZeroWinGoal => "CONFIG_ZERO_WIN_GOAL",
            Self::NonPositive(_) => "CONFIG_NON_POSITIVE",
        }
    }
}
