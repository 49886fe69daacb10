use enum_iterator::Sequence;
use strum_macros::Display;
use strum_macros::EnumString;

/// Sales regions. Declaration order is the order rows are generated in.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Display, EnumString, Sequence)]
pub enum Region {
    North,
    South,
    East,
    West,
}
