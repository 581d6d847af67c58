/// Route templates served by the Clubhouse HTTP surface. Templates use axum's
/// `{param}` syntax and can be fed straight into `Router::route`.
pub mod paths {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const STATIC: &str = "/static";

    /// Default redirect target for [`ROOT`].
    pub const DEFAULT_LANDING_PAGE: &str = "/static/index.html";

    pub mod activities {
        pub const COLLECTION: &str = "/activities";
        pub const SIGNUP: &str = "/activities/{activity_name}/signup";
        pub const UNREGISTER: &str = "/activities/{activity_name}/unregister";

        pub const NAME_PARAM: &str = "{activity_name}";
    }
}

/// Helper utilities for working with route templates
pub mod utils {
    use super::paths::activities;

    /// Replace a single path parameter (e.g. `"{activity_name}"`) with the
    /// percent-encoded value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, &urlencoding::encode(value.as_ref()))
    }

    /// Concrete path for an activity route template such as
    /// [`activities::SIGNUP`].
    pub fn activity_route(route: &str, activity_name: &str) -> String {
        replace_param(route, activities::NAME_PARAM, activity_name)
    }

    /// Append percent-encoded query parameters to the provided route.
    pub fn with_query(route: &str, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return route.to_string();
        }

        let mut path =
            String::with_capacity(route.len() + 1 + params.len() * 16);
        path.push_str(route);
        path.push('?');

        for (i, (key, value)) in params.iter().enumerate() {
            if i > 0 {
                path.push('&');
            }
            path.push_str(&urlencoding::encode(key));
            path.push('=');
            path.push_str(&urlencoding::encode(value));
        }

        path
    }
}
