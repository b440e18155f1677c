use authgate_core::BaseResponse;
use authgate_models::LoginUser;
use tracing::instrument;

use crate::middleware::auth::AuthUser;

#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_current_user(auth_user: AuthUser) -> BaseResponse<LoginUser> {
    BaseResponse::success(auth_user.0)
}
