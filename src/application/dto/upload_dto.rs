//! Upload target DTOs.

use crate::domain::entities::UploadNamespace;

/// Where an upload should land, as requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadTarget {
    /// Caller named the folder explicitly.
    Folder(String),
    /// Folder follows the namespace convention for the triggering route.
    Route(String),
    /// Application root namespace.
    Default,
}

impl UploadTarget {
    /// Builds target from optional CLI/API inputs, explicit folder first.
    #[must_use]
    pub fn from_parts(folder: Option<String>, route: Option<String>) -> Self {
        match (folder, route) {
            (Some(folder), _) => Self::Folder(folder),
            (None, Some(route)) => Self::Route(route),
            (None, None) => Self::Default,
        }
    }

    /// Renders the storage folder under the application namespace.
    #[must_use]
    pub fn folder(&self, app_namespace: &str) -> String {
        match self {
            Self::Folder(folder) => folder.clone(),
            Self::Route(route) => UploadNamespace::from_route(route).folder(app_namespace),
            Self::Default => UploadNamespace::Root.folder(app_namespace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_folder_wins() {
        let target = UploadTarget::from_parts(
            Some("custom/place".to_string()),
            Some("/api/foods".to_string()),
        );
        assert_eq!(target.folder("cravecart"), "custom/place");
    }

    #[test]
    fn test_route_convention() {
        let target = UploadTarget::from_parts(None, Some("/api/restaurants/7".to_string()));
        assert_eq!(target.folder("cravecart"), "cravecart/restaurants");
    }

    #[test]
    fn test_default_is_app_root() {
        assert_eq!(UploadTarget::from_parts(None, None).folder("cravecart"), "cravecart");
    }
}
