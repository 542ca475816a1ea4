//! Split keyboard identity

/// Physical half of a split keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// Controller role within the split pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Half connected to the host computer
    Primary,
    /// Half receiving state over the split link
    Secondary,
}

/// Query which half this controller drives
pub trait SplitInfo {
    /// Physical side of this half
    fn side(&self) -> Side;

    /// Role of this half
    fn role(&self) -> Role;

    /// Check if this half is the primary
    fn is_primary(&self) -> bool {
        self.role() == Role::Primary
    }
}

/// Fixed split identity, for boards where side and role are strapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedSplit {
    pub side: Side,
    pub role: Role,
}

impl SplitInfo for FixedSplit {
    fn side(&self) -> Side {
        self.side
    }

    fn role(&self) -> Role {
        self.role
    }
}
