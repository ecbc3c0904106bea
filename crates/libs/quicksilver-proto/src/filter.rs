//! Routing filter vocabularies. Every member has a fixed numeric identity
//! because the value itself is what goes on the wire (as an i16 field).

/// Propagation scope relative to the node a message is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    SelfOnly = 0x0,
    Children = 0x1,
    SelfAndChildren = 0x2,
    Parents = 0x3,
    SelfAndParents = 0x4,
    Siblings = 0x5,
    Descendants = 0x6,
    All = 0x7,
}

impl LevelFilter {
    /// Scope applied when a caller does not pick one explicitly.
    pub const DEFAULT: LevelFilter = LevelFilter::SelfAndChildren;

    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for LevelFilter {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(LevelFilter::SelfOnly),
            0x1 => Ok(LevelFilter::Children),
            0x2 => Ok(LevelFilter::SelfAndChildren),
            0x3 => Ok(LevelFilter::Parents),
            0x4 => Ok(LevelFilter::SelfAndParents),
            0x5 => Ok(LevelFilter::Siblings),
            0x6 => Ok(LevelFilter::Descendants),
            0x7 => Ok(LevelFilter::All),
            _ => Err(()),
        }
    }
}

/// Activity eligibility. `All` is the zero member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilter {
    All = 0x0,
    Active = 0x1,
    Inactive = 0x2,
}

impl ActiveFilter {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for ActiveFilter {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(ActiveFilter::All),
            0x1 => Ok(ActiveFilter::Active),
            0x2 => Ok(ActiveFilter::Inactive),
            _ => Err(()),
        }
    }
}

/// Selection eligibility. `Selected` is the zero member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedFilter {
    Selected = 0x0,
    Unselected = 0x1,
    All = 0x2,
}

impl SelectedFilter {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for SelectedFilter {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(SelectedFilter::Selected),
            0x1 => Ok(SelectedFilter::Unselected),
            0x2 => Ok(SelectedFilter::All),
            _ => Err(()),
        }
    }
}

/// Delivery scope across the process boundary. `Local` is the zero member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFilter {
    Local = 0x0,
    Network = 0x1,
    All = 0x2,
}

impl NetworkFilter {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for NetworkFilter {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(NetworkFilter::Local),
            0x1 => Ok(NetworkFilter::Network),
            0x2 => Ok(NetworkFilter::All),
            _ => Err(()),
        }
    }
}

/// Application-defined grouping discriminator, carried as a 16-bit mask.
///
/// `EVERYTHING` (all bits set) matches any group; `NOTHING` matches none.
/// Applications claim individual bits via [`Tag::bit`] and combine them
/// with `|`. Any i16 is a valid tag on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub i16);

impl Tag {
    pub const NOTHING: Tag = Tag(0);
    pub const EVERYTHING: Tag = Tag(-1);

    /// Mask with the single bit `n` set. Bits 0 through 14 are available to
    /// applications; bit 15 participates in `EVERYTHING` only.
    pub fn bit(n: u8) -> Tag {
        Tag(1i16.wrapping_shl(u32::from(n)))
    }

    pub fn as_i16(self) -> i16 {
        self.0
    }

    /// True when either side matches everything or the masks overlap.
    pub fn matches(self, other: Tag) -> bool {
        self == Tag::EVERYTHING || other == Tag::EVERYTHING || (self.0 & other.0) != 0
    }
}

impl From<i16> for Tag {
    fn from(value: i16) -> Self {
        Tag(value)
    }
}

impl std::ops::BitOr for Tag {
    type Output = Tag;

    fn bitor(self, rhs: Tag) -> Tag {
        Tag(self.0 | rhs.0)
    }
}
