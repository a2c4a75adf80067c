/// A top-level menu bucket and its ordered sub-categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCategory {
    pub name: &'static str,
    pub submenus: &'static [&'static str],
}

/// The one category whose records carry an activation date.
pub const PRODUCTION_MASTER_DATA: &str = "Produksi Master Data";

pub const MENU_STRUCTURE: &[MenuCategory] = &[
    MenuCategory {
        name: "Penyesuaian",
        submenus: &["Harga Jual", "Routing", "Costing"],
    },
    MenuCategory {
        name: "Request Data",
        submenus: &["KCU", "Nasional", "Project"],
    },
    MenuCategory {
        name: "Problem",
        submenus: &["Tarif", "SLA", "Biaya", "Routing"],
    },
    MenuCategory {
        name: PRODUCTION_MASTER_DATA,
        submenus: &["Cabang", "Nasional"],
    },
];

pub fn find_category(name: &str) -> Option<&'static MenuCategory> {
    MENU_STRUCTURE.iter().find(|c| c.name == name)
}

/// Whether `(category, sub_category)` is a configured menu entry.
pub fn menu_contains(category: &str, sub_category: &str) -> bool {
    find_category(category).is_some_and(|c| c.submenus.contains(&sub_category))
}

pub fn is_production_master_data(category: &str) -> bool {
    category == PRODUCTION_MASTER_DATA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lookup() {
        assert!(menu_contains("Problem", "SLA"));
        assert!(menu_contains(PRODUCTION_MASTER_DATA, "Cabang"));
        assert!(!menu_contains("Problem", "Cabang"));
        assert!(!menu_contains("Nope", "SLA"));
        assert_eq!(find_category("Request Data").map(|c| c.submenus.len()), Some(3));
    }

    #[test]
    fn routing_appears_under_two_categories() {
        assert!(menu_contains("Penyesuaian", "Routing"));
        assert!(menu_contains("Problem", "Routing"));
    }
}
