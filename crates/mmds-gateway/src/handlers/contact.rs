use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use mmds_contact::ContactRequest;
use tracing::{error, info, warn};

use crate::model::ContactResponse;
use crate::state::AppState;

pub const SENT_MESSAGE: &str = "Gửi thông tin thành công! Chúng tôi sẽ liên hệ với bạn sớm.";
pub const FAILED_MESSAGE: &str = "Có lỗi xảy ra, vui lòng thử lại.";

pub async fn send_email_handler(
    State(state): State<AppState>,
    Form(request): Form<ContactRequest>,
) -> (StatusCode, Json<ContactResponse>) {
    let failed = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ContactResponse {
            success: false,
            message: FAILED_MESSAGE,
        }),
    );

    let Some(mailer) = state.mailer.as_ref() else {
        warn!("contact form submitted but mail delivery is not configured");
        return failed;
    };

    match mailer.send(&request.compose()).await {
        Ok(()) => {
            info!(name = %request.name, "contact request delivered");
            (
                StatusCode::OK,
                Json(ContactResponse {
                    success: true,
                    message: SENT_MESSAGE,
                }),
            )
        }
        Err(e) => {
            error!(error = %e, "failed to deliver contact request");
            failed
        }
    }
}
