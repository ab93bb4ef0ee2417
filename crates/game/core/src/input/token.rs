use bitflags::bitflags;

/// Absolute (screen-relative) input token.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputToken {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Button1,
    Button2,
    Button3,
}

impl InputToken {
    pub const fn is_button(self) -> bool {
        matches!(self, Self::Button1 | Self::Button2 | Self::Button3)
    }

    pub const fn flag(self) -> InputSet {
        match self {
            Self::Up => InputSet::UP,
            Self::Down => InputSet::DOWN,
            Self::Left => InputSet::LEFT,
            Self::Right => InputSet::RIGHT,
            Self::UpLeft => InputSet::UP_LEFT,
            Self::UpRight => InputSet::UP_RIGHT,
            Self::DownLeft => InputSet::DOWN_LEFT,
            Self::DownRight => InputSet::DOWN_RIGHT,
            Self::Button1 => InputSet::BUTTON1,
            Self::Button2 => InputSet::BUTTON2,
            Self::Button3 => InputSet::BUTTON3,
        }
    }
}

bitflags! {
    /// One tick's normalized tokens for one actor.
    ///
    /// At most one direction token is set once normalized.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InputSet: u16 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const UP_LEFT = 1 << 4;
        const UP_RIGHT = 1 << 5;
        const DOWN_LEFT = 1 << 6;
        const DOWN_RIGHT = 1 << 7;
        const BUTTON1 = 1 << 8;
        const BUTTON2 = 1 << 9;
        const BUTTON3 = 1 << 10;

        const UPWARD = Self::UP.bits() | Self::UP_LEFT.bits() | Self::UP_RIGHT.bits();
        const DOWNWARD = Self::DOWN.bits() | Self::DOWN_LEFT.bits() | Self::DOWN_RIGHT.bits();
        const LEFTWARD = Self::LEFT.bits() | Self::UP_LEFT.bits() | Self::DOWN_LEFT.bits();
        const RIGHTWARD = Self::RIGHT.bits() | Self::UP_RIGHT.bits() | Self::DOWN_RIGHT.bits();
        const BUTTONS = Self::BUTTON1.bits() | Self::BUTTON2.bits() | Self::BUTTON3.bits();
    }
}

impl InputSet {
    pub fn from_tokens(tokens: &[InputToken]) -> Self {
        tokens
            .iter()
            .fold(Self::empty(), |set, token| set | token.flag())
    }

    pub fn has(self, token: InputToken) -> bool {
        self.contains(token.flag())
    }

    pub fn has_upward(self) -> bool {
        self.intersects(Self::UPWARD)
    }

    pub fn has_downward(self) -> bool {
        self.intersects(Self::DOWNWARD)
    }

    /// Horizontal direction held: -1, 0 or 1.
    pub fn horizontal(self) -> i8 {
        match (self.intersects(Self::LEFTWARD), self.intersects(Self::RIGHTWARD)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    /// Translates to facing-relative tokens.
    pub fn relative(self, facing_right: bool) -> RelativeSet {
        let (toward, away) = if facing_right {
            (Self::RIGHT, Self::LEFT)
        } else {
            (Self::LEFT, Self::RIGHT)
        };
        let (up_toward, up_away, down_toward, down_away) = if facing_right {
            (Self::UP_RIGHT, Self::UP_LEFT, Self::DOWN_RIGHT, Self::DOWN_LEFT)
        } else {
            (Self::UP_LEFT, Self::UP_RIGHT, Self::DOWN_LEFT, Self::DOWN_RIGHT)
        };
        let pairs = [
            (Self::UP, RelativeSet::UP),
            (Self::DOWN, RelativeSet::DOWN),
            (toward, RelativeSet::FORWARD),
            (away, RelativeSet::BACK),
            (up_toward, RelativeSet::UP_FORWARD),
            (up_away, RelativeSet::UP_BACK),
            (down_toward, RelativeSet::DOWN_FORWARD),
            (down_away, RelativeSet::DOWN_BACK),
            (Self::BUTTON1, RelativeSet::BUTTON1),
            (Self::BUTTON2, RelativeSet::BUTTON2),
            (Self::BUTTON3, RelativeSet::BUTTON3),
        ];
        pairs
            .into_iter()
            .filter(|(absolute, _)| self.contains(*absolute))
            .fold(RelativeSet::empty(), |set, (_, relative)| set | relative)
    }
}

/// Facing-relative token used by motion inputs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelativeToken {
    Up,
    Down,
    Forward,
    Back,
    UpForward,
    UpBack,
    DownForward,
    DownBack,
    Button1,
    Button2,
    Button3,
}

impl RelativeToken {
    pub const fn flag(self) -> RelativeSet {
        match self {
            Self::Up => RelativeSet::UP,
            Self::Down => RelativeSet::DOWN,
            Self::Forward => RelativeSet::FORWARD,
            Self::Back => RelativeSet::BACK,
            Self::UpForward => RelativeSet::UP_FORWARD,
            Self::UpBack => RelativeSet::UP_BACK,
            Self::DownForward => RelativeSet::DOWN_FORWARD,
            Self::DownBack => RelativeSet::DOWN_BACK,
            Self::Button1 => RelativeSet::BUTTON1,
            Self::Button2 => RelativeSet::BUTTON2,
            Self::Button3 => RelativeSet::BUTTON3,
        }
    }
}

bitflags! {
    /// Facing-relative counterpart of [`InputSet`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct RelativeSet: u16 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const FORWARD = 1 << 2;
        const BACK = 1 << 3;
        const UP_FORWARD = 1 << 4;
        const UP_BACK = 1 << 5;
        const DOWN_FORWARD = 1 << 6;
        const DOWN_BACK = 1 << 7;
        const BUTTON1 = 1 << 8;
        const BUTTON2 = 1 << 9;
        const BUTTON3 = 1 << 10;
    }
}

impl RelativeSet {
    pub fn has(self, token: RelativeToken) -> bool {
        self.contains(token.flag())
    }
}

/// Held keys for one player before normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub button1: bool,
    pub button2: bool,
    pub button3: bool,
}

impl RawInput {
    /// Folds orthogonal pairs into diagonals. Holding any opposing pair
    /// clears every direction; buttons are kept.
    pub fn normalize(self) -> InputSet {
        let opposed = (self.up && self.down) || (self.left && self.right);
        let vertical = match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        let horizontal = match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        let direction = match (vertical, horizontal) {
            _ if opposed => InputSet::empty(),
            (-1, -1) => InputSet::UP_LEFT,
            (-1, 1) => InputSet::UP_RIGHT,
            (1, -1) => InputSet::DOWN_LEFT,
            (1, 1) => InputSet::DOWN_RIGHT,
            (-1, _) => InputSet::UP,
            (1, _) => InputSet::DOWN,
            (_, -1) => InputSet::LEFT,
            (_, 1) => InputSet::RIGHT,
            _ => InputSet::empty(),
        };
        let mut set = direction;
        set.set(InputSet::BUTTON1, self.button1);
        set.set(InputSet::BUTTON2, self.button2);
        set.set(InputSet::BUTTON3, self.button3);
        set
    }
}
