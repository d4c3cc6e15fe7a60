//! Error types for Placard.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

/// Error type that pages can return from a render, see [`RenderResult::Err`](crate::route::RenderResult::Err).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are shown through Debug, but thiserror only derives Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route `{route}` is declared more than once")]
    DuplicateRoute { route: String },

    #[error(
        "Route `{route}` has a parameter inside the segment `{segment}`. Parameters must span a whole segment, e.g. `/articles/[article]`."
    )]
    PartialSegmentParameter { route: String, segment: String },

    #[error("Route `{route}` has a parameter without a name")]
    EmptyParameterName { route: String },

    #[error("Route `{route}` is missing parameter `{key}`")]
    MissingParameter { route: String, key: String },
}

#[derive(Error)]
pub enum BuildError {
    #[error("Failed to render `{route}`: {source}")]
    Render {
        route: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to write page file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy static file {from} to {to}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum PlacardError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(RouteError, BuildError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_matches_display() {
        let err = RouteError::MissingParameter {
            route: "/services/[service]".to_string(),
            key: "service".to_string(),
        };

        assert_eq!(format!("{:?}", err), format!("{}", err));
        assert_eq!(
            err.to_string(),
            "Route `/services/[service]` is missing parameter `service`"
        );
    }

    #[test]
    fn render_error_keeps_source() {
        let err = BuildError::Render {
            route: "/about".to_string(),
            source: "template exploded".into(),
        };

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("template exploded"));
    }
}
