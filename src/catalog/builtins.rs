//! Built-in catalog - 20 animals, 20 plants, 20 primitives

use super::descriptor::ModelDescriptor;
use super::kind::Category;
use crate::primitives::{Coefficient, HexColor};

/// (display name, type tag, emoji)
type Entry = (&'static str, &'static str, &'static str);

const ANIMALS: &[Entry] = &[
    ("华南虎", "tiger", "🐯"),
    ("国宝大熊猫", "panda", "🐼"),
    ("南极企鹅", "penguin", "🐧"),
    ("深海座头鲸", "whale", "🐋"),
    ("长颈鹿", "giraffe", "🦒"),
    ("金雕", "eagle", "🦅"),
    ("草原雄狮", "lion", "🦁"),
    ("亚洲象", "elephant", "🐘"),
    ("雪兔", "rabbit", "🐰"),
    ("响尾蛇", "snake", "🐍"),
    ("狼蛛", "spider", "🕷️"),
    ("大白鲨", "shark", "🦈"),
    ("幻紫蝴蝶", "butterfly", "🦋"),
    ("汗血宝马", "horse", "🐎"),
    ("赤狐", "fox", "🦊"),
    ("雪鸮", "owl", "🦉"),
    ("湾鳄", "crocodile", "🐊"),
    ("红袋鼠", "kangaroo", "🦘"),
    ("中华锦绣蟹", "crab", "🦀"),
    ("灵长猕猴", "monkey", "🐒"),
];

const PLANTS: &[Entry] = &[
    ("江南垂柳", "willow", "🌿"),
    ("沙漠仙人掌", "cactus", "🌵"),
    ("高山云松", "pine", "🌲"),
    ("千年古柏", "cypress", "🌳"),
    ("清幽翠竹", "bamboo", "🎋"),
    ("烂漫樱花", "cherry", "🌸"),
    ("金秋银杏", "ginkgo", "🍂"),
    ("热带棕榈", "palm", "🌴"),
    ("火红枫树", "maple", "🍁"),
    ("庭院灌木", "shrub", "🌳"),
    ("非洲猴面包树", "baobab", "🪵"),
    ("百年橡树", "oak", "🌳"),
    ("挺拔白杨", "poplar", "🎋"),
    ("优雅白桦", "birch", "⚪"),
    ("精致盆景", "bonsai", "🪴"),
    ("红树林", "mangrove", "🛶"),
    ("巨型红杉", "redwood", "🌲"),
    ("丰收苹果树", "apple", "🍎"),
    ("香蕉树", "banana", "🍌"),
    ("远古蕨类", "fern", "🌿"),
];

const PRIMITIVES: &[Entry] = &[
    ("工业倒角方体", "box", "📦"),
    ("高精校准球", "sphere", "🔮"),
    ("莫比乌斯环", "knot", "🥨"),
    ("几何圆环", "torus", "🍩"),
    ("正八面体", "octahedron", "💎"),
    ("正四面体", "tetrahedron", "🔺"),
    ("二十面体", "icosahedron", "🔷"),
    ("十二面体", "dodecahedron", "⬢"),
    ("工程圆柱", "cylinder", "🧪"),
    ("精控圆锥", "cone", "🍦"),
    ("参数化胶囊", "capsule", "💊"),
    ("薄层圆环", "ring", "⭕"),
    ("工业管道", "tube", "➰"),
    ("异形结节", "torusKnotAlt", "🌀"),
    ("标准平面", "plane", "📄"),
    ("工程圆片", "circle", "⚪"),
    ("回转几何", "lathe", "🏺"),
    ("挤压异形", "extrude", "🧱"),
    ("复杂多面体", "polyhedron", "💠"),
    ("双角锥体", "dipyramid", "💎"),
];

const ANIMAL_COLOR: HexColor = HexColor::from_rgb(0xf97316);
const TIGER_COLOR: HexColor = HexColor::from_rgb(0xff9933);
const PLANT_COLOR: HexColor = HexColor::from_rgb(0x16a34a);
const PRIMITIVE_COLOR: HexColor = HexColor::from_rgb(0x6366f1);

/// All built-in descriptors: animals, then plants, then primitives
pub fn builtin_descriptors() -> Vec<ModelDescriptor> {
    let mut out = Vec::with_capacity(ANIMALS.len() + PLANTS.len() + PRIMITIVES.len());
    out.extend(animals());
    out.extend(plants());
    out.extend(primitives());
    out
}

fn entries(category: Category, table: &'static [Entry]) -> impl Iterator<Item = ModelDescriptor> {
    table.iter().enumerate().map(move |(i, (name, tag, emoji))| {
        ModelDescriptor::new(format!("{}-{i}", category.id_prefix()), category, *tag, *name, *emoji)
    })
}

fn animals() -> impl Iterator<Item = ModelDescriptor> {
    entries(Category::Animal, ANIMALS).map(|d| {
        let (color, card) = if d.tag == "tiger" {
            (TIGER_COLOR, tiger_card())
        } else {
            (ANIMAL_COLOR, animal_card(&d.name))
        };
        d.with_material(color, Coefficient::new(0.1), Coefficient::new(0.8))
            .with_description(card)
    })
}

fn plants() -> impl Iterator<Item = ModelDescriptor> {
    entries(Category::Plant, PLANTS).map(|d| {
        let card = plant_card(&d.name);
        d.with_material(PLANT_COLOR, Coefficient::new(0.05), Coefficient::new(0.9))
            .with_description(card)
    })
}

fn primitives() -> impl Iterator<Item = ModelDescriptor> {
    entries(Category::Primitive, PRIMITIVES).map(|d| {
        let card = primitive_card(&d.name, &d.tag);
        d.with_material(PRIMITIVE_COLOR, Coefficient::new(0.6), Coefficient::new(0.2))
            .with_description(card)
    })
}

// ── Design cards ────────────────────────────────────────────────────────

fn primitive_card(name: &str, tag: &str) -> String {
    format!(
        "# {name} 3D 设计说明卡片
**核心设计目标**：构建标准化的硬表面建模单元，展示极高的拓扑精度与材质反射表现。

**特征还原要点**：
- 几何精度：表面细分优化，确保在微距下依然平滑。
- 材质对冲：金属感边框与高分子涂层，展现工业设计中的材质对比美学。
- 光影表现：侧重反射在曲面上的平滑过渡。

**技术参数**：
- 基础几何体：{tag}
- 细分等级：Level 3 (高精度渲染模式)"
    )
}

fn plant_card(name: &str) -> String {
    format!(
        "# {name} Low-Poly 3D 设计说明卡片
**核心设计目标**：通过精简的低多边形面片组合，还原植物的生长韵律与色彩层次。

**特征还原要点**：
- 结构拓扑：分段式主干与偏移的冠部几何，模拟自然生长的随机性。
- 材质质感：高粗糙度材质模拟植物表皮。

**技术参数**：
- 基础几何体：Cylinder (主干), Sphere/Cone/Capsule (冠部)
- 动画特性：整体悬浮与轻微摆动。"
    )
}

fn animal_card(name: &str) -> String {
    format!(
        "# {name} Low-Poly 3D 设计说明卡片
**核心设计目标**：解构生物解剖特征，以最少几何体还原物种辨识度。

**特征还原要点**：
- 比例还原：遵循该物种躯干、四肢与头部的比例关系。
- 细节抽象：利用球体、方体、圆柱等基础形状拼接标志性特征。

**技术参数**：
- 基础几何体：Box/Cylinder/Sphere 复合建模
- 待机动画：整体悬浮与轻微摆动。"
    )
}

fn tiger_card() -> String {
    "# 华南虎 3D 设计说明卡片

### 一、核心设计目标
通过解剖结构拆解与基础几何体拼接，实现低模风格下的高辨识度写实效果。

### 二、物种特征还原要点
| 结构部位 | 3D 建模实现方案 |
| :--- | :--- |
| **整体体型** | 缩放立方体作为躯干主体 |
| **毛色与斑纹** | 外层橙黄色主躯干，内层白色腹部；黑色横纹采用扁平长方体，随机旋转角度模拟自然纹理 |
| **头部特征** | 球体头部，方体耳朵内衬白色贴片；圆锥吻部与粉色鼻端；琥珀色眼球 |
| **四肢结构** | 三段式圆柱体，半径依次缩小；爪部为小圆锥 |
| **尾部特征** | 5 段圆柱体渐变拼接，尾尖黑色 |

### 三、技术实现参数
- **躯干**: Box (2.5 × 1.2 × 1.5)，腹部内层纯白
- **头部**: Sphere (radius 0.6)
- **四肢**: Cylinder 三段式 (radius 0.3 → 0.18)
- **尾部**: Cylinder 5 段渐变 (radius 0.2 → 0.05)，尾尖黑色
- **斑纹**: Box (0.08 × 1.25 × 1.55)，黑色，透明度 0.9
- **furColor**: 默认 #FF9933"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_entries_in_category_order() {
        let all = builtin_descriptors();
        assert_eq!(all.len(), 60);
        assert!(all[..20].iter().all(|d| d.category == Category::Animal));
        assert!(all[20..40].iter().all(|d| d.category == Category::Plant));
        assert!(all[40..].iter().all(|d| d.category == Category::Primitive));
    }

    #[test]
    fn ids_follow_declaration_order() {
        let all = builtin_descriptors();
        assert_eq!(all[0].id, "a-0");
        assert_eq!(all[0].tag, "tiger");
        assert_eq!(all[20].id, "t-0");
        assert_eq!(all[59].id, "p-19");
        assert_eq!(all[59].tag, "dipyramid");
    }

    #[test]
    fn tiger_has_its_own_color_and_card() {
        let all = builtin_descriptors();
        let tiger = &all[0];
        assert_eq!(tiger.color, HexColor::from_rgb(0xff9933));
        assert!(tiger.description.contains("华南虎"));
        assert_eq!(all[1].color, ANIMAL_COLOR);
    }

    #[test]
    fn every_builtin_tag_is_recognized() {
        for d in builtin_descriptors() {
            assert!(d.kind().is_some(), "{} has unknown tag {}", d.id, d.tag);
        }
    }

    #[test]
    fn category_defaults() {
        let all = builtin_descriptors();
        assert_eq!(all[25].roughness.value(), 0.9);
        assert_eq!(all[45].metalness.value(), 0.6);
        assert!(all[45].description.contains(&all[45].tag));
    }
}
