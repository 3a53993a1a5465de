use strum::{Display, FromRepr};

/// Campus a College Checking holder is enrolled at. The discriminant is the
/// campus code used by bulk import files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromRepr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Campus {
    NewBrunswick = 0,
    Newark = 1,
    Camden = 2,
}

impl Campus {
    pub fn from_code(code: u8) -> Option<Self> {
        Campus::from_repr(code)
    }
}
