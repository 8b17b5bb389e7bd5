//! Logical route table.
//!
//! The storefront router maps these paths to views; links elsewhere are
//! built from here so paths are spelled in one place.

use ecofinds_commerce::catalog::CategorySelection;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Browse,
    Cart,
    Dashboard,
    Listings,
}

/// Links shown in the header navigation, in order.
pub const NAV: &[AppRoute] = &[AppRoute::Browse, AppRoute::Listings];

impl AppRoute {
    pub const ALL: [AppRoute; 5] = [
        AppRoute::Home,
        AppRoute::Browse,
        AppRoute::Cart,
        AppRoute::Dashboard,
        AppRoute::Listings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Browse => "/browse",
            AppRoute::Cart => "/cart",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Listings => "/my-listings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Browse => "Browse",
            AppRoute::Cart => "Cart",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Listings => "My Listings",
        }
    }

    /// Resolve a location path, ignoring any query string and a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// Whether `path` is this route's page.
    pub fn is_active(&self, path: &str) -> bool {
        Self::from_path(path) == Some(*self)
    }
}

/// Link to the browse view with a category and search text applied.
///
/// Parameters at their defaults are left out, so
/// `browse_href(CategorySelection::All, "")` is plain `/browse`.
pub fn browse_href(selection: CategorySelection, query: &str) -> String {
    let mut params = Vec::with_capacity(2);
    if selection != CategorySelection::All {
        params.push(format!("category={}", selection.id()));
    }
    if !query.is_empty() {
        params.push(format!("q={}", form_encode(query)));
    }

    let base = AppRoute::Browse.path();
    if params.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}

/// `application/x-www-form-urlencoded` encoding of a query value.
fn form_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecofinds_commerce::catalog::Category;

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_normalizes() {
        assert_eq!(AppRoute::from_path("/cart/"), Some(AppRoute::Cart));
        assert_eq!(AppRoute::from_path("/browse?q=lamp"), Some(AppRoute::Browse));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/sell"), None);
    }

    #[test]
    fn test_nav_links() {
        let labels: Vec<_> = NAV.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["Browse", "My Listings"]);
        assert!(AppRoute::Listings.is_active("/my-listings"));
        assert!(!AppRoute::Browse.is_active("/"));
    }

    #[test]
    fn test_browse_href_defaults_omitted() {
        assert_eq!(browse_href(CategorySelection::All, ""), "/browse");
    }

    #[test]
    fn test_browse_href_encodes_query() {
        assert_eq!(
            browse_href(CategorySelection::Only(Category::Home), "plant pots & co"),
            "/browse?category=home&q=plant+pots+%26+co"
        );
        assert_eq!(
            browse_href(CategorySelection::All, "café"),
            "/browse?q=caf%C3%A9"
        );
    }
}
