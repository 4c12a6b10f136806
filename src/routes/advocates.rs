use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::advocates::AdvocatesQuery;
use crate::repository::DieselRepository;
use crate::services::advocates as advocates_service;

/// `GET /advocates?page=<int>&search=<string>` (both parameters optional).
///
/// Returns `{ "data": [...], "pagination": {...} }`. A storage failure is
/// logged and surfaced as a plain 500; there is no retry or partial result.
#[get("/advocates")]
pub async fn list_advocates(
    params: web::Query<AdvocatesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match advocates_service::list_advocates(repo.get_ref(), &params) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to list advocates: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
