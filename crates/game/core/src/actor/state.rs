use core::fmt;

/// Character-specific move identifier, resolved through the character table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveId(pub u16);

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move#{}", self.0)
    }
}

/// Every non-neutral thing an actor can be doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Jump,
    Crouch,
    Block,
    Throw,
    Hitstun,
    Victory,
    Defeat,
    /// Running an animation forced by the opponent (the receiving end of a throw).
    Grabbed,
    Attack(MoveId),
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack(id) => write!(f, "attack({id})"),
            other => f.write_str(other.as_ref()),
        }
    }
}

/// Transition target. `Action` kinds without a registered animation fall
/// back to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateId {
    Idle,
    Walking,
    TurningAround,
    Action(ActionKind),
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Walking => f.write_str("walking"),
            Self::TurningAround => f.write_str("turning_around"),
            Self::Action(kind) => write!(f, "action:{kind}"),
        }
    }
}

/// Per-entry bookkeeping of a running action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionState {
    pub kind: ActionKind,
    pub projectile_spawned: bool,
}

impl ActionState {
    pub const fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            projectile_spawned: false,
        }
    }
}

/// Current state of an actor's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorState {
    Idle,
    Walking,
    TurningAround,
    Action(ActionState),
}

impl ActorState {
    pub const fn id(&self) -> StateId {
        match self {
            Self::Idle => StateId::Idle,
            Self::Walking => StateId::Walking,
            Self::TurningAround => StateId::TurningAround,
            Self::Action(action) => StateId::Action(action.kind),
        }
    }

    pub fn is_action(&self, kind: ActionKind) -> bool {
        matches!(self, Self::Action(action) if action.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(ActionKind::Hitstun.to_string(), "hitstun");
        assert_eq!(ActionKind::Attack(MoveId(4)).to_string(), "attack(move#4)");
        assert_eq!(StateId::Action(ActionKind::Jump).to_string(), "action:jump");
    }

    #[test]
    fn is_action_compares_kind() {
        let state = ActorState::Action(ActionState::new(ActionKind::Attack(MoveId(2))));
        assert!(state.is_action(ActionKind::Attack(MoveId(2))));
        assert!(!state.is_action(ActionKind::Attack(MoveId(3))));
        assert!(!state.is_action(ActionKind::Hitstun));
        assert!(ActorState::Action(ActionState::new(ActionKind::Hitstun)).is_action(ActionKind::Hitstun));
        assert_eq!(state.id(), StateId::Action(ActionKind::Attack(MoveId(2))));
    }
}
