//! Sidebar filter - name search plus category restriction

use crate::catalog::{Catalog, Category, ModelDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in sidebar order
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(Category::Primitive),
        Self::Only(Category::Plant),
        Self::Only(Category::Animal),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "全部",
            Self::Only(category) => category.label(),
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl SidebarFilter {
    /// Case-insensitive substring match on the name, within the category.
    pub fn matches(&self, descriptor: &ModelDescriptor) -> bool {
        if !self.category.admits(descriptor.category) {
            return false;
        }
        let query = self.query.trim();
        query.is_empty() || descriptor.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Matching entries with their catalog position, in catalog order.
    pub fn apply<'c>(&self, catalog: &'c Catalog) -> Vec<(usize, &'c ModelDescriptor)> {
        catalog.all().iter().enumerate().filter(|(_, d)| self.matches(d)).collect()
    }
}

/// Two-digit label counting down from the catalog size
pub fn display_index(catalog_len: usize, position: usize) -> String {
    format!("{:02}", catalog_len.saturating_sub(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_admits_everything() {
        let catalog = Catalog::builtin();
        assert_eq!(SidebarFilter::default().apply(catalog).len(), catalog.len());
    }

    #[test]
    fn category_restricts() {
        let filter = SidebarFilter { category: CategoryFilter::Only(Category::Plant), ..Default::default() };
        let hits = filter.apply(Catalog::builtin());
        assert_eq!(hits.len(), 20);
        assert!(hits.iter().all(|(_, d)| d.category == Category::Plant));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let a = ModelDescriptor::new("x", Category::Primitive, "box", "Chrome Box", "📦");
        let b = ModelDescriptor::new("y", Category::Primitive, "sphere", "Glass Orb", "🔮");
        let catalog = Catalog::new(vec![a, b]);
        let filter = SidebarFilter { query: "  box ".into(), ..Default::default() };
        let hits = filter.apply(&catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.id, "x");
    }

    #[test]
    fn index_counts_down_padded() {
        assert_eq!(display_index(60, 0), "60");
        assert_eq!(display_index(60, 55), "05");
        assert_eq!(display_index(3, 9), "00");
    }

    #[test]
    fn labels() {
        assert_eq!(CategoryFilter::All.label(), "全部");
        assert_eq!(CategoryFilter::Only(Category::Animal).label(), "动物");
    }
}
