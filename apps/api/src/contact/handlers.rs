use axum::{extract::State, Json};

use crate::contact::mailer::DispatchReceipt;
use crate::contact::{validate, ContactForm};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/contact
///
/// No retry on a failed send; the visitor resubmits.
pub async fn handle_contact(
    State(state): State<AppState>,
    AppJson(form): AppJson<ContactForm>,
) -> Result<Json<DispatchReceipt>, AppError> {
    let submission = validate(form)?;
    let receipt = state.mailer.send(&submission).await?;
    Ok(Json(receipt))
}
