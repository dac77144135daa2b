use crate::app::flash_cookie::{clear_flash_cookie, set_flash_cookie, take_notice};
use crate::app::state::AppState;
use crate::core::contact::{process_submission, ContactForm};
use crate::core::pages;
use crate::domain::model::Notice;
use crate::domain::page::{PageBody, PageContext};
use crate::utils::error::Result;
use axum::extract::{Form, Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Json, Redirect, Response};
use chrono::{Datelike, Utc};

/// Builds the full context, consumes any pending notice and renders it.
fn render(state: &AppState, headers: &HeaderMap, body: PageBody<'_>) -> Response {
    let (notice, clear_cookie) = take_notice(&state.flash, headers);
    let page = PageContext {
        body,
        site: state.content.site(),
        current_year: Utc::now().year(),
        notice,
    };

    let mut response = state.presenter.render(&page);
    if clear_cookie {
        response
            .headers_mut()
            .append(SET_COOKIE, clear_flash_cookie(state.secure_cookies));
    }
    response
}

fn render_or_redirect(
    state: &AppState,
    headers: &HeaderMap,
    body: Result<PageBody<'_>>,
    listing: &'static str,
) -> Response {
    match body {
        Ok(body) => render(state, headers, body),
        Err(e) => {
            tracing::debug!("{}, redirecting to {}", e, listing);
            Redirect::to(listing).into_response()
        }
    }
}

fn redirect_with_notice(state: &AppState, location: &str, notice: &Notice) -> Response {
    let mut response = Redirect::to(location).into_response();
    match state
        .flash
        .encode(notice)
        .and_then(|token| set_flash_cookie(&token, state.secure_cookies))
    {
        Ok(cookie) => {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        Err(e) => tracing::warn!("⚠️ Could not attach notice: {}", e),
    }
    response
}

pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, pages::home(&state.content))
}

pub async fn services(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, pages::services(&state.content))
}

pub async fn service_detail(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let body = pages::service_detail(&state.content, &service_id);
    render_or_redirect(&state, &headers, body, "/services")
}

pub async fn projects(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, pages::projects(&state.content))
}

pub async fn project_detail(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let body = pages::project_detail(&state.content, &project_id);
    render_or_redirect(&state, &headers, body, "/projects")
}

pub async fn about(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, pages::about())
}

pub async fn contact_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, pages::contact())
}

pub async fn contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    let notice = process_submission(form, state.notifier.as_ref(), Utc::now()).await;
    redirect_with_notice(&state, "/contact", &notice)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
