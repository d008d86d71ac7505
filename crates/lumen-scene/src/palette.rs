//! Named surface colors and gloss levels

use glam::Vec3;

pub const RED: Vec3 = Vec3::new(0.75, 0.15, 0.15);
pub const YELLOW: Vec3 = Vec3::new(0.75, 0.75, 0.15);
pub const GREEN: Vec3 = Vec3::new(0.15, 0.75, 0.15);
pub const CYAN: Vec3 = Vec3::new(0.15, 0.75, 0.75);
pub const BLUE: Vec3 = Vec3::new(0.15, 0.15, 0.75);
pub const PURPLE: Vec3 = Vec3::new(0.75, 0.15, 0.75);
pub const WHITE: Vec3 = Vec3::new(0.75, 0.75, 0.75);

/// Reflectance multiplier applied by the renderer on top of base color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gloss {
    Low,
    Normal,
    Medium,
    More,
    High,
}

impl Gloss {
    /// Multiplier as a color-space vector
    pub const fn value(self) -> Vec3 {
        match self {
            Gloss::Low => Vec3::splat(0.7),
            Gloss::Normal => Vec3::ONE,
            Gloss::Medium => Vec3::splat(1.2),
            Gloss::More => Vec3::splat(1.5),
            Gloss::High => Vec3::splat(2.0),
        }
    }
}

impl From<Gloss> for Vec3 {
    fn from(gloss: Gloss) -> Self {
        gloss.value()
    }
}
