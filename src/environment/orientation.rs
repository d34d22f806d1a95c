/// Surface orientation.
///
/// Terminal cells are roughly twice as tall as they are wide, so a surface
/// counts as landscape when it has at least two columns per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_size(width: u16, height: u16) -> Self {
        if u32::from(width) >= u32::from(height) * 2 {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn is_landscape(&self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}
