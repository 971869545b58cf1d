/// Identifier of a status marker applied to a battler.
///
/// Ids are opaque to the engine. `StateId::NONE` (0) stands for "no marker"
/// and is the neutral position of every ladder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StateId(pub u16);

impl StateId {
    /// The neutral "no marker" id.
    pub const NONE: StateId = StateId(0);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns `Some(self)` unless this is the neutral id.
    #[inline]
    pub const fn some(self) -> Option<StateId> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl core::fmt::Display for StateId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_none() {
            f.write_str("none")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

impl From<u16> for StateId {
    fn from(value: u16) -> Self {
        StateId(value)
    }
}

/// Signed offset of a ladder position from neutral.
pub type Tier = i32;
