use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.portfolio_handler.projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let groups = state.portfolio_handler.skill_groups().await?;
    Ok(HttpResponse::Ok().json(groups))
}

#[instrument(skip(state))]
pub async fn get_contact(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let contact = state.portfolio_handler.contact().await?;
    Ok(HttpResponse::Ok().json(contact))
}

#[instrument(skip(state))]
pub async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.portfolio_handler.profile())
}
