use gpui::{Pixels, px};

pub struct Spacing;

impl Spacing {
    pub const SM: Pixels = px(8.0);
    pub const MD: Pixels = px(12.0);
    pub const LG: Pixels = px(16.0);
}

pub struct Heights;

impl Heights {
    pub const ROW: Pixels = px(32.0);
}

pub struct FontSizes;

impl FontSizes {
    pub const BASE: Pixels = px(14.0);
    pub const TITLE: Pixels = px(24.0);
}

pub struct Radii;

impl Radii {
    pub const LG: Pixels = px(6.0);
}
