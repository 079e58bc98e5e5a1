//! ModelDescriptor - one immutable catalog entry

use super::kind::{Category, ModelKind};
use crate::primitives::{Coefficient, HexColor};

/// A catalog entry: identity, display text and material defaults
///
/// Descriptors are built once with the catalog and never mutated. The type
/// tag stays a string so that an entry whose tag the resolver does not know
/// is still representable; [`ModelDescriptor::kind`] does the lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    /// Stable key (`a-0`, `t-3`, `p-19`, ...)
    pub id: String,
    pub category: Category,
    /// Type tag scoped to `category` (e.g. "tiger", "willow", "box")
    pub tag: String,
    pub name: String,
    pub emoji: String,
    /// Markdown design card
    pub description: String,
    pub color: HexColor,
    pub metalness: Coefficient,
    pub roughness: Coefficient,
}

impl ModelDescriptor {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        tag: impl Into<String>,
        name: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            tag: tag.into(),
            name: name.into(),
            emoji: emoji.into(),
            description: String::new(),
            color: HexColor::WHITE,
            metalness: Coefficient::ZERO,
            roughness: Coefficient::ONE,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_material(mut self, color: HexColor, metalness: Coefficient, roughness: Coefficient) -> Self {
        self.color = color;
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }

    /// Type tag resolved within this entry's category
    pub fn kind(&self) -> Option<ModelKind> {
        ModelKind::parse(self.category, &self.tag)
    }

    pub fn describe(&self) -> String {
        format!("{} {} ({}/{})", self.emoji, self.name, self.category, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::kind::AnimalKind;

    #[test]
    fn builder_sets_material_defaults() {
        let d = ModelDescriptor::new("a-0", Category::Animal, "tiger", "华南虎", "🐯").with_material(
            HexColor::from_rgb(0xff9933),
            Coefficient::new(0.1),
            Coefficient::new(0.8),
        );
        assert_eq!(d.color.to_string(), "#ff9933");
        assert_eq!(d.metalness.value(), 0.1);
        assert_eq!(d.kind(), Some(ModelKind::Animal(AnimalKind::Tiger)));
    }

    #[test]
    fn unknown_tag_has_no_kind() {
        let d = ModelDescriptor::new("x", Category::Plant, "tiger", "mislabeled", "?");
        assert_eq!(d.kind(), None);
    }

    #[test]
    fn describe_mentions_category_and_tag() {
        let d = ModelDescriptor::new("p-0", Category::Primitive, "box", "方体", "📦");
        assert_eq!(d.describe(), "📦 方体 (primitive/box)");
    }
}
