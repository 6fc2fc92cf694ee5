use actix_web::{get, web, HttpResponse};

use crate::{db::Database, errors::AppError, models::dto::response::HealthResponse};

/// Liveness of the result data source.
#[get("/health")]
pub async fn health_check(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    db.health_check().await?;
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    }))
}
