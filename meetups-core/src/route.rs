//! Logical views and their URL paths.

use std::fmt;

/// One of the three views a user can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` (event list)
    Home,
    /// `/events/:slug`
    Detail(String),
    /// `/create`
    Create,
}

impl Route {
    /// Parse a path such as "/events/catan-night". Query strings, fragments
    /// and a trailing slash are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["create"] => Some(Route::Create),
            ["events", slug] => {
                let slug = urlencoding::decode(slug).ok()?;
                Some(Route::Detail(slug.into_owned()))
            }
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Detail(slug) => format!("/events/{}", urlencoding::encode(slug)),
            Route::Create => "/create".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
