//! Live material parameters and the edits that change them

use crate::catalog::ModelDescriptor;
use crate::primitives::{Coefficient, HexColor};
use crate::scene::Material;

/// The editable material record. Resolver and code generator read it; only
/// [`super::Selection`] writes it.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialParams {
    pub color: HexColor,
    pub metalness: Coefficient,
    pub roughness: Coefficient,
    pub background: HexColor,
}

impl MaterialParams {
    pub fn from_descriptor(descriptor: &ModelDescriptor, background: HexColor) -> Self {
        Self {
            color: descriptor.color,
            metalness: descriptor.metalness,
            roughness: descriptor.roughness,
            background,
        }
    }

    /// Material for every base-painted mesh
    pub fn base_material(&self) -> Material {
        Material {
            color: self.color,
            metalness: self.metalness,
            roughness: self.roughness,
            ..Material::plain(self.color)
        }
    }
}

/// One raw edit from an input widget. Strings and floats arrive unvalidated.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamUpdate {
    Color(String),
    Metalness(f32),
    Roughness(f32),
    Background(String),
}

impl ParamUpdate {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Metalness(_) => "metalness",
            Self::Roughness(_) => "roughness",
            Self::Background(_) => "background",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn base_material_is_opaque_with_live_values() {
        let descriptor = ModelDescriptor::new("p-0", Category::Primitive, "box", "Box", "📦").with_material(
            HexColor::from_rgb(0x6366f1),
            Coefficient::new(0.6),
            Coefficient::new(0.2),
        );
        let params = MaterialParams::from_descriptor(&descriptor, HexColor::WHITE);
        let m = params.base_material();
        assert_eq!(m.color, HexColor::from_rgb(0x6366f1));
        assert_eq!(m.metalness.value(), 0.6);
        assert_eq!(m.roughness.value(), 0.2);
        assert!(!m.is_transparent());
        assert_eq!(params.background, HexColor::WHITE);
    }
}
