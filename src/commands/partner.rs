//! Partner Commands

use serde::Serialize;

use super::invoke_command;
use crate::error::ApiResult;
use crate::models::{Group, Partner};

#[derive(Serialize)]
struct UserIdArgs<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
}

/// Partners linked to the given user
pub async fn get_partners(user_id: &str) -> ApiResult<Vec<Partner>> {
    invoke_command("get_partners", &UserIdArgs { user_id }).await
}

/// Groups the user belongs to, used for task labels
pub async fn get_groups(user_id: &str) -> ApiResult<Vec<Group>> {
    invoke_command("get_groups", &UserIdArgs { user_id }).await
}
