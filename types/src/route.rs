use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A navigable view of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Tool launcher.
    Home,
    /// Quick Type Challenge.
    FeatureEins,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown route: {0}")]
pub struct UnknownRouteError(pub String);

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::FeatureEins];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::FeatureEins => "/featureeins",
        }
    }

    /// Window title shown in the header for this view.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "TJD Toolkit - Homepage",
            Self::FeatureEins => "[Feature Eins] Tool",
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| UnknownRouteError(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Route path derived from a tool's display name: `"Feature Eins"` -> `"/featureeins"`.
#[must_use]
pub fn route_path_for_tool(tool_name: &str) -> String {
    let mut path = String::with_capacity(tool_name.len() + 1);
    path.push('/');
    path.extend(
        tool_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase),
    );
    path
}

#[cfg(test)]
mod tests {
    use super::{Route, route_path_for_tool};

    #[test]
    fn paths_round_trip_through_from_str() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn unknown_path_is_rejected() {
        let err = "/nowhere".parse::<Route>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown route: /nowhere");
    }

    #[test]
    fn tool_name_maps_to_route_path() {
        assert_eq!(route_path_for_tool("Feature Eins"), "/featureeins");
        assert_eq!(route_path_for_tool("Feature Eins"), Route::FeatureEins.path());
        assert_eq!(route_path_for_tool("A B  C"), "/abc");
    }
}
