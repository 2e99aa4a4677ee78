use std::fmt;

/// Unique identifier for any actor tracked in combat state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to an ability definition in the shared ability arena.
///
/// Players hold ids, never copies; one definition may be learned by any
/// number of players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityId(pub u32);

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ability:{}", self.0)
    }
}

/// Reference to an item definition stored outside the core (lookup via the
/// item catalog).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// One of the two opposing rosters in a combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Players,
    Monsters,
}

impl Side {
    /// Returns the side this one fights against.
    pub const fn opposing(self) -> Self {
        match self {
            Self::Players => Self::Monsters,
            Self::Monsters => Self::Players,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Players => "players",
            Self::Monsters => "monsters",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer health meter tracked per actor.
///
/// `current` never exceeds `maximum` and never drops below zero; both
/// mutations report the amount actually applied after clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Reduces the meter, saturating at zero. Returns the amount removed.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.current);
        self.current -= dealt;
        dealt
    }

    /// Restores the meter, clamping at the maximum. Returns the amount added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.maximum - self.current);
        self.current += restored;
        restored
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}
