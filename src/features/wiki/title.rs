use crate::domain::Title;
use crate::error::WikiError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lazy_static::lazy_static;
use percent_encoding::percent_decode_str;
use regex::Regex;

lazy_static! {
    static ref VALID_PATH: Regex = Regex::new(r"^/(edit|save|view|)/([A-Za-z0-9]+)$").unwrap();
}

/// Pulls the page title out of a request path such as `/view/FrontPage`.
///
/// The path is percent-decoded first, so `/view/Foo%42` names `FooB` while an
/// encoded slash or space still fails the pattern.
pub fn extract_title(path: &str) -> Result<Title, WikiError> {
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map_err(|_| WikiError::InvalidTitle(path.to_owned()))?;

    VALID_PATH
        .captures(&decoded)
        .and_then(|caps| caps.get(2))
        .and_then(|m| Title::parse(m.as_str()))
        .ok_or_else(|| WikiError::InvalidTitle(path.to_owned()))
}

/// Extractor wrapping [`extract_title`].
///
/// Rejection is a 404, produced before the handler body runs.
#[derive(Debug, Clone)]
pub struct ValidTitle(pub Title);

impl<S> FromRequestParts<S> for ValidTitle
where
    S: Send + Sync,
{
    type Rejection = WikiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_title(parts.uri.path()).map(ValidTitle)
    }
}
