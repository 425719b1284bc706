use contracts::domain::common::AggregateRoot;
use contracts::shared::error::ApiError;
use contracts::system::users::{User, UserDto};
use serde_json::Value;

use crate::shared::api_client::client;

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    client().get_list(&User::collection_path()).await
}

pub async fn create_user(dto: &UserDto) -> Result<(), ApiError> {
    let _: Value = client().post(&User::collection_path(), dto).await?;
    Ok(())
}

pub async fn update_user(id: i64, dto: &UserDto) -> Result<(), ApiError> {
    let _: Value = client().put(&User::item_path(id), dto).await?;
    Ok(())
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    client().delete(&User::item_path(id)).await
}
