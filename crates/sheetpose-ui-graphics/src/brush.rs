//! Brush definitions for painting: solid fills and blurred materials.

use crate::color::Color;

/// Translucent blurred background, ordered from most to least see-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    UltraThin,
    Thin,
    Regular,
    Thick,
    UltraThick,
}

impl Material {
    /// Gaussian blur radius applied to whatever is behind the surface.
    pub fn blur_radius(&self) -> f32 {
        match self {
            Material::UltraThin => 8.0,
            Material::Thin => 14.0,
            Material::Regular => 20.0,
            Material::Thick => 28.0,
            Material::UltraThick => 36.0,
        }
    }

    /// Tint composited over the blurred backdrop.
    pub fn tint(&self) -> Color {
        match self {
            Material::UltraThin => Color::WHITE.with_alpha(0.35),
            Material::Thin => Color::WHITE.with_alpha(0.5),
            Material::Regular => Color::WHITE.with_alpha(0.7),
            Material::Thick => Color::WHITE.with_alpha(0.82),
            Material::UltraThick => Color::WHITE.with_alpha(0.92),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Material(Material),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn material(material: Material) -> Self {
        Brush::Material(material)
    }
}
