use crate::{
    handlers::{check_email, find_password, signin, signup},
    mail::{MailConfig, Mailer},
    token::TokenIssuer,
    user::{PasswordHasher, UserRepository},
};
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use std::sync::Arc;

/// Application state shared across handlers
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub hasher: PasswordHasher,
    pub tokens: TokenIssuer,
    pub mailer: Arc<dyn Mailer>,
    pub mail: MailConfig,
}

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "account-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn start_server(bind_address: &str, state: AppState) -> std::io::Result<()> {
    let state = web::Data::new(state);

    tracing::info!(%bind_address, "starting account service");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(health_check)
            .service(check_email)
            .service(signup)
            .service(signin)
            .service(find_password)
    })
    .bind(bind_address)?
    .run()
    .await
}
