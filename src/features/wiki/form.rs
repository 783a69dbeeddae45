use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode;

/// Raw bytes of the `body` field of a save form.
///
/// Accepts urlencoded and multipart submissions. The value is decoded to bytes
/// without any UTF-8 conversion, and a missing field is an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveBody(pub Vec<u8>);

impl<S> FromRequest<S> for SaveBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(SaveBody(form_field(&bytes, b"body").unwrap_or_default()));
        }

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(IntoResponse::into_response)?
            {
                if field.name() == Some("body") {
                    let bytes = field.bytes().await.map_err(IntoResponse::into_response)?;
                    return Ok(SaveBody(bytes.to_vec()));
                }
            }
            return Ok(SaveBody(Vec::new()));
        }

        Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected a urlencoded or multipart form",
        )
            .into_response())
    }
}

/// First value for `name` in an `application/x-www-form-urlencoded` payload.
pub fn form_field(payload: &[u8], name: &[u8]) -> Option<Vec<u8>> {
    payload
        .split(|&b| b == b'&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let mut parts = pair.splitn(2, |&b| b == b'=');
            let key = decode_component(parts.next().unwrap_or_default());
            let value = parts.next().unwrap_or_default();
            (key == name).then(|| decode_component(value))
        })
}

// '+' is a space in form encoding, everything else is plain percent-decoding
fn decode_component(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced).collect()
}
