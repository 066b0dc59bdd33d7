use axum::Form;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

/// Urlencoded form body whose rejections render as an HTML error page.
///
/// Use in place of [`axum::Form`] on routes that serve browsers:
/// ```ignore
/// async fn handler(PageForm(form): PageForm<GameForm>) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct PageForm<T>(pub T);

impl<T> FromRequest<AppState> for PageForm<T>
where
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "form body rejected");
                Err(AppError::InvalidForm {
                    status: rejection.status(),
                    message: rejection.body_text(),
                })
            }
        }
    }
}
