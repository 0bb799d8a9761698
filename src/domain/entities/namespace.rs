//! Upload namespace convention.

use std::fmt;

/// Default application namespace.
pub const DEFAULT_APP_NAMESPACE: &str = "cravecart";

/// Logical folder an upload is stored under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadNamespace {
    /// Application root folder.
    #[default]
    Root,
    /// Restaurant images.
    Restaurants,
    /// Menu item images.
    Foods,
}

impl UploadNamespace {
    /// Picks the namespace from the API route that triggered the upload.
    #[must_use]
    pub fn from_route(route: &str) -> Self {
        if route.contains("restaurants") {
            Self::Restaurants
        } else if route.contains("foods") {
            Self::Foods
        } else {
            Self::Root
        }
    }

    /// Returns the sub-folder name, if any.
    #[must_use]
    pub const fn segment(self) -> Option<&'static str> {
        match self {
            Self::Root => None,
            Self::Restaurants => Some("restaurants"),
            Self::Foods => Some("foods"),
        }
    }

    /// Renders the folder under the given application namespace.
    #[must_use]
    pub fn folder(self, app: &str) -> String {
        let app = app.trim_matches('/');
        match self.segment() {
            Some(segment) => format!("{app}/{segment}"),
            None => app.to_string(),
        }
    }
}

impl fmt::Display for UploadNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.folder(DEFAULT_APP_NAMESPACE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("/api/restaurants", UploadNamespace::Restaurants ; "restaurants_route")]
    #[test_case("/api/restaurants/64f1/foods", UploadNamespace::Restaurants ; "restaurants_wins")]
    #[test_case("/api/foods/12", UploadNamespace::Foods ; "foods_route")]
    #[test_case("/api/users", UploadNamespace::Root ; "other_route")]
    #[test_case("", UploadNamespace::Root ; "empty_route")]
    fn test_from_route(route: &str, expected: UploadNamespace) {
        assert_eq!(UploadNamespace::from_route(route), expected);
    }

    #[test]
    fn test_folder_rendering() {
        assert_eq!(UploadNamespace::Root.folder("cravecart"), "cravecart");
        assert_eq!(
            UploadNamespace::Restaurants.folder("cravecart"),
            "cravecart/restaurants"
        );
        assert_eq!(UploadNamespace::Foods.folder("shop/"), "shop/foods");
    }

    #[test]
    fn test_display_uses_default_app() {
        assert_eq!(UploadNamespace::Foods.to_string(), "cravecart/foods");
    }
}
