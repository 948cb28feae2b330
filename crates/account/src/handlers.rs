use crate::{
    envelope::{message, status, Envelope},
    error::Result,
    mail::render_temp_password,
    server::AppState,
    user::generate_temp_password,
};
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

const TEMP_PASSWORD_LEN: usize = 12;

/// Absent and empty-string fields are both treated as missing input.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

// ============================================================================
// Email Availability Check
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CheckEmailRequest {
    pub email: Option<String>,
}

#[post("/api/v1/users/check-email")]
pub async fn check_email(
    req: web::Json<CheckEmailRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some(email) = required(&req.email) else {
        return Ok(Envelope::fail(status::OK, message::NULL_VALUE).into_response());
    };

    if state.users.find_by_email(email).await?.is_some() {
        return Ok(Envelope::fail(status::OK, message::ALREADY_EMAIL).into_response());
    }

    Ok(
        Envelope::success(status::OK, message::AVAILABLE_EMAIL, json!({ "email": email }))
            .into_response(),
    )
}

// ============================================================================
// Signup
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

#[post("/api/v1/users/signup")]
pub async fn signup(
    req: web::Json<SignupRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (Some(email), Some(password), Some(password_confirm)) = (
        required(&req.email),
        required(&req.password),
        required(&req.password_confirm),
    ) else {
        return Ok(Envelope::fail(status::OK, message::NULL_VALUE).into_response());
    };

    if password != password_confirm {
        return Ok(Envelope::fail(status::OK, message::DIFFERENT_PW).into_response());
    }

    let cred = state.hasher.hash(password)?;

    // Uniqueness is owned by the store's constraint, not checked here.
    let user_idx = state.users.create(email, &cred.hash, &cred.salt).await?;

    tracing::info!(user_idx, email, "user signed up");

    Ok(
        Envelope::success(status::OK, message::CREATED_USER, json!({ "userIdx": user_idx }))
            .into_response(),
    )
}

// ============================================================================
// Signin
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[post("/api/v1/users/signin")]
pub async fn signin(
    req: web::Json<SigninRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (Some(email), Some(password)) = (required(&req.email), required(&req.password)) else {
        return Ok(Envelope::fail(status::OK, message::NULL_VALUE).into_response());
    };

    let Some(user) = state.users.find_by_email(email).await? else {
        return Ok(Envelope::fail(status::OK, message::NO_USER).into_response());
    };

    if !state
        .hasher
        .verify(password, &user.salt, &user.hashed_password)?
    {
        return Ok(Envelope::fail(status::OK, message::MISS_MATCH_PW).into_response());
    }

    let access_token = state.tokens.sign(&user)?;

    tracing::info!(user_idx = user.user_idx, email, "user signed in");

    Ok(Envelope::success(
        status::OK,
        message::LOGIN_SUCCESS,
        json!({
            "userIdx": user.user_idx,
            "email": user.email,
            "profile": user.profile,
            "accessToken": access_token
        }),
    )
    .into_response())
}

// ============================================================================
// Find/Reset Password
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FindPasswordRequest {
    pub email: Option<String>,
}

#[post("/api/v1/users/find-password")]
pub async fn find_password(
    req: web::Json<FindPasswordRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some(email) = required(&req.email) else {
        return Ok(Envelope::fail(status::OK, message::NULL_VALUE).into_response());
    };

    if state.users.find_by_email(email).await?.is_none() {
        return Ok(Envelope::fail(status::OK, message::NO_USER).into_response());
    }

    let temp_password = generate_temp_password(TEMP_PASSWORD_LEN);
    let cred = state.hasher.hash(&temp_password)?;

    state
        .users
        .update_password(email, &cred.hash, &cred.salt)
        .await?;

    // The credential is already overwritten at this point; a mail failure
    // is surfaced to the client without rolling the update back.
    let mail = render_temp_password(&state.mail.from_name, email, &temp_password);
    if let Err(e) = state.mailer.send(&mail).await {
        tracing::error!(error = %e, email, "failed to send temporary password mail");
        return Err(e);
    }

    tracing::info!(email, "temporary password sent");

    Ok(Envelope::success(
        status::OK,
        message::SEND_EMAIL_SUCCESS,
        json!({ "toEmail": email, "subject": mail.subject }),
    )
    .into_response())
}
