use thiserror::Error;

use crate::domain::{find_category, menu_contains};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("'{0}' is not a menu category")]
    UnknownCategory(String),
    #[error("'{category} / {sub_category}' is not a menu entry")]
    UnknownMenu { category: String, sub_category: String },
}

/// What the shell should render for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    Dashboard,
    /// A category is expanded but no sub-category picked yet.
    Shell { category: &'a str },
    Records { category: &'a str, sub_category: &'a str },
}

/// Active `(category, sub_category)` selection. Both empty means dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    category: Option<String>,
    sub_category: Option<String>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sub_category(&self) -> Option<&str> {
        self.sub_category.as_deref()
    }

    pub fn dashboard(&mut self) {
        self.category = None;
        self.sub_category = None;
    }

    /// Enters the category-only state.
    pub fn expand(&mut self, category: &str) -> Result<(), NavigationError> {
        if find_category(category).is_none() {
            return Err(NavigationError::UnknownCategory(category.to_string()));
        }
        self.category = Some(category.to_string());
        self.sub_category = None;
        Ok(())
    }

    pub fn select(&mut self, category: &str, sub_category: &str) -> Result<(), NavigationError> {
        if !menu_contains(category, sub_category) {
            return Err(NavigationError::UnknownMenu {
                category: category.to_string(),
                sub_category: sub_category.to_string(),
            });
        }
        tracing::debug!(category, sub_category, "navigated");
        self.category = Some(category.to_string());
        self.sub_category = Some(sub_category.to_string());
        Ok(())
    }

    pub fn route(&self) -> Route<'_> {
        match (self.category.as_deref(), self.sub_category.as_deref()) {
            (None, _) => Route::Dashboard,
            (Some(category), None) => Route::Shell { category },
            (Some(category), Some(sub_category)) => Route::Records { category, sub_category },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(Navigation::new().route(), Route::Dashboard);
    }

    #[test]
    fn expand_then_select() {
        let mut nav = Navigation::new();
        nav.expand("Problem").unwrap();
        assert_eq!(nav.route(), Route::Shell { category: "Problem" });

        nav.select("Problem", "SLA").unwrap();
        assert_eq!(
            nav.route(),
            Route::Records {
                category: "Problem",
                sub_category: "SLA"
            }
        );

        nav.dashboard();
        assert_eq!(nav.route(), Route::Dashboard);
    }

    #[test]
    fn rejects_entries_outside_the_menu() {
        let mut nav = Navigation::new();
        nav.select("Problem", "SLA").unwrap();

        assert!(nav.select("Problem", "Cabang").is_err());
        assert!(nav.expand("Other").is_err());
        assert_eq!(nav.sub_category(), Some("SLA"), "failed selection keeps state");
    }
}
