use actix_web::{web, HttpResponse, Responder};
use tracing::{info, instrument};

use crate::{
    errors::AppError,
    shortcuts::reference::grouped_shortcuts,
    use_cases::{
        extractors::{theme_cookie, ThemePreference},
        shortcut_session::{DispatchRequest, ShortcutSession},
    },
    AppState,
};

pub async fn get_shortcuts() -> impl Responder {
    HttpResponse::Ok().json(grouped_shortcuts())
}

#[instrument(skip(state, data))]
pub async fn dispatch_shortcuts(
    state: web::Data<AppState>,
    theme: ThemePreference,
    data: web::Json<DispatchRequest>,
) -> Result<impl Responder, AppError> {
    let session = ShortcutSession::new(&state.blog_handler);
    let response = session.run(data.into_inner(), theme.0).await?;

    let mut builder = HttpResponse::Ok();
    if response.theme_changed {
        info!(theme = %response.theme, "Theme changed by shortcut");
        builder.cookie(theme_cookie(response.theme));
    }
    Ok(builder.json(response))
}
