pub mod form;
pub mod title;

use crate::domain::Page;
use crate::error::WikiError;
use crate::render::TemplateName;
use crate::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use form::SaveBody;
use title::ValidTitle;

pub fn wiki_router() -> Router<AppState> {
    Router::new()
        .route("/", get(front_page_handler))
        .route("/view/{title}", get(view_handler))
        .route("/edit/{title}", get(edit_handler))
        .route("/save/{title}", post(save_handler))
}

// 302, same as the classic form-post-redirect flow
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

async fn front_page_handler(State(state): State<AppState>) -> Response {
    found(&state.config.front_page.view_path())
}

async fn view_handler(
    State(state): State<AppState>,
    ValidTitle(title): ValidTitle,
) -> Result<Response, WikiError> {
    let page = match state.store.load(&title).await {
        Ok(page) => page,
        // nothing stored yet, send the user off to create it
        Err(e) if e.is_not_found() => return Ok(found(&title.edit_path())),
        Err(e) => return Err(e.into()),
    };

    let html = state.templates.render(TemplateName::View, &page)?;
    Ok(Html(html).into_response())
}

async fn edit_handler(
    State(state): State<AppState>,
    ValidTitle(title): ValidTitle,
) -> Result<Response, WikiError> {
    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(e) if e.is_not_found() => Page::empty(title),
        Err(e) => return Err(e.into()),
    };

    let html = state.templates.render(TemplateName::Edit, &page)?;
    Ok(Html(html).into_response())
}

async fn save_handler(
    State(state): State<AppState>,
    ValidTitle(title): ValidTitle,
    SaveBody(body): SaveBody,
) -> Result<Response, WikiError> {
    let page = Page::new(title, body);
    state.store.save(&page).await?;

    tracing::info!(title = %page.title, bytes = page.body.len(), "page saved");
    Ok(found(&page.title.view_path()))
}
