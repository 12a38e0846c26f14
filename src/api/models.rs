use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::{errors::WalletError, models::DataKind};

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure body of `/transaction-count/{address}`, which also forwards the
/// upstream error text.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct RpcErrorResponse {
    pub error: String,
    pub details: String,
}

/// A failed lookup for one data kind, rendered as a 500 with that kind's
/// fixed message.
#[derive(Debug)]
pub struct ApiError(pub DataKind, pub WalletError);

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let ApiError(kind, err) = self;
        error!(kind = %kind, error = %err, "{}", kind.failure_message());

        let error = kind.failure_message().to_string();
        match kind {
            DataKind::TransactionCount => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RpcErrorResponse {
                    error,
                    details: err.to_string(),
                }),
            )
                .into_response(),
            DataKind::Tokens | DataKind::Nfts | DataKind::ContractInteractions => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error })).into_response()
            }
        }
    }
}
