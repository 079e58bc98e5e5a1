//! Category and per-category type tags

use std::fmt;

/// Declares a closed set of type tags with string round-tripping.
macro_rules! tag_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            #[cfg(test)]
            pub const ALL: &[Self] = &[$(Self::$variant),+];

            pub const fn tag(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.tag())
            }
        }
    };
}

/// The three catalog partitions, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Animal,
    Plant,
    Primitive,
}

impl Category {
    #[cfg(test)]
    pub const ALL: &[Self] = &[Self::Animal, Self::Plant, Self::Primitive];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Animal => "animal",
            Self::Plant => "plant",
            Self::Primitive => "primitive",
        }
    }

    /// Sidebar filter label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Animal => "动物",
            Self::Plant => "植物",
            Self::Primitive => "几何",
        }
    }

    /// Prefix of every descriptor id in this category
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Animal => "a",
            Self::Plant => "t",
            Self::Primitive => "p",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

tag_enum! {
    /// Single-solid shapes
    PrimitiveKind {
        Box => "box",
        Sphere => "sphere",
        Knot => "knot",
        Torus => "torus",
        Octahedron => "octahedron",
        Tetrahedron => "tetrahedron",
        Icosahedron => "icosahedron",
        Dodecahedron => "dodecahedron",
        Cylinder => "cylinder",
        Cone => "cone",
        Capsule => "capsule",
        Ring => "ring",
        Tube => "tube",
        TorusKnotAlt => "torusKnotAlt",
        Plane => "plane",
        Circle => "circle",
        Lathe => "lathe",
        Extrude => "extrude",
        Polyhedron => "polyhedron",
        Dipyramid => "dipyramid",
    }
}

tag_enum! {
    PlantKind {
        Willow => "willow",
        Cactus => "cactus",
        Pine => "pine",
        Cypress => "cypress",
        Bamboo => "bamboo",
        Cherry => "cherry",
        Ginkgo => "ginkgo",
        Palm => "palm",
        Maple => "maple",
        Shrub => "shrub",
        Baobab => "baobab",
        Oak => "oak",
        Poplar => "poplar",
        Birch => "birch",
        Bonsai => "bonsai",
        Mangrove => "mangrove",
        Redwood => "redwood",
        Apple => "apple",
        Banana => "banana",
        Fern => "fern",
    }
}

tag_enum! {
    AnimalKind {
        Tiger => "tiger",
        Panda => "panda",
        Penguin => "penguin",
        Whale => "whale",
        Giraffe => "giraffe",
        Eagle => "eagle",
        Lion => "lion",
        Elephant => "elephant",
        Rabbit => "rabbit",
        Snake => "snake",
        Spider => "spider",
        Shark => "shark",
        Butterfly => "butterfly",
        Horse => "horse",
        Fox => "fox",
        Owl => "owl",
        Crocodile => "crocodile",
        Kangaroo => "kangaroo",
        Crab => "crab",
        Monkey => "monkey",
    }
}

/// A type tag resolved within its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Primitive(PrimitiveKind),
    Plant(PlantKind),
    Animal(AnimalKind),
}

impl ModelKind {
    /// Resolve `tag` inside `category` only. A plant tag under the animal
    /// category does not match.
    pub fn parse(category: Category, tag: &str) -> Option<Self> {
        match category {
            Category::Primitive => PrimitiveKind::from_tag(tag).map(Self::Primitive),
            Category::Plant => PlantKind::from_tag(tag).map(Self::Plant),
            Category::Animal => AnimalKind::from_tag(tag).map(Self::Animal),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Primitive(k) => k.tag(),
            Self::Plant(k) => k.tag(),
            Self::Animal(k) => k.tag(),
        }
    }
}
