#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const CYAN: Self = Self { r: 0, g: 255, b: 255 };
    pub const LIGHT_SALMON: Self = Self { r: 255, g: 160, b: 122 };
}
