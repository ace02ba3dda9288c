//! Legacy `/campus-life/clubs/...` pages, redirected to their `/clubs/...`
//! counterparts.

use axum::{
    extract::OriginalUri,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use service_core::error::AppError;

const LEGACY_PREFIX: &str = "/campus-life/clubs/";
const CANONICAL_PREFIX: &str = "/clubs/";

/// One legacy club page and the suffix it shares with its canonical page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubRedirect {
    pub pattern: &'static str,
    pub suffix: &'static str,
}

pub static CLUB_REDIRECTS: [ClubRedirect; 4] = [
    ClubRedirect {
        pattern: "/campus-life/clubs/:id",
        suffix: "",
    },
    ClubRedirect {
        pattern: "/campus-life/clubs/:id/alumni",
        suffix: "/alumni",
    },
    ClubRedirect {
        pattern: "/campus-life/clubs/:id/gallery",
        suffix: "/gallery",
    },
    ClubRedirect {
        pattern: "/campus-life/clubs/:id/members",
        suffix: "/members",
    },
];

impl ClubRedirect {
    /// Canonical path for club `id`. `id` is interpolated as-is.
    pub fn target(&self, id: &str) -> String {
        format!("{}{}{}", CANONICAL_PREFIX, id, self.suffix)
    }

    /// The `id` segment of a request path, still percent-encoded, so the
    /// redirect hands back exactly what the client sent.
    fn raw_id<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.strip_prefix(LEGACY_PREFIX)?
            .strip_suffix(self.suffix)
            .filter(|id| !id.is_empty() && !id.contains('/'))
    }

    pub fn respond(&self, uri: &axum::http::Uri) -> Result<Response, AppError> {
        let id = self.raw_id(uri.path()).ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("No club id in path {}", uri.path()))
        })?;

        // `id` is a slice of a parsed URI path, so this only fails on a bug
        let location = HeaderValue::try_from(self.target(id))
            .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

        Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
    }
}

/// One GET route per legacy club page.
pub fn redirect_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    CLUB_REDIRECTS.iter().fold(Router::new(), |router, redirect| {
        router.route(
            redirect.pattern,
            get(move |OriginalUri(uri): OriginalUri| async move { redirect.respond(&uri) }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    fn entry(suffix: &str) -> &'static ClubRedirect {
        CLUB_REDIRECTS
            .iter()
            .find(|r| r.suffix == suffix)
            .unwrap()
    }

    #[test]
    fn every_pattern_ends_with_its_suffix() {
        for redirect in &CLUB_REDIRECTS {
            assert!(redirect.pattern.starts_with(LEGACY_PREFIX));
            assert!(redirect.pattern.ends_with(&format!(":id{}", redirect.suffix)));
        }
    }

    #[test]
    fn target_only_interpolates() {
        assert_eq!(entry("").target("chess"), "/clubs/chess");
        assert_eq!(entry("/alumni").target("chess"), "/clubs/chess/alumni");
        assert_eq!(entry("/gallery").target("a b?&"), "/clubs/a b?&/gallery");
        assert_eq!(entry("/members").target(""), "/clubs//members");
    }

    #[test]
    fn raw_id_keeps_percent_encoding() {
        assert_eq!(
            entry("/members").raw_id("/campus-life/clubs/chess%20club/members"),
            Some("chess%20club")
        );
        assert_eq!(entry("").raw_id("/campus-life/clubs/42"), Some("42"));
        assert_eq!(entry("/alumni").raw_id("/clubs/42/alumni"), None);
    }

    #[test]
    fn respond_sets_temporary_redirect() {
        let uri: Uri = "/campus-life/clubs/robotics/gallery?tab=2".parse().unwrap();
        let response = entry("/gallery").respond(&uri).unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/clubs/robotics/gallery"
        );
    }

    #[test]
    fn respond_accepts_any_encoded_id() {
        let uri: Uri = "/campus-life/clubs/caf%C3%A9%20%26%20co/members"
            .parse()
            .unwrap();
        let response = entry("/members").respond(&uri).unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/clubs/caf%C3%A9%20%26%20co/members"
        );
    }
}
