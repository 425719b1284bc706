use contracts::domain::a001_customer::{Customer, CustomerDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::error::ApiError;
use serde_json::Value;

use crate::shared::api_client::client;

/// The API answers with a bare array or `{ customers: [...] }`
pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    client().get_list(&Customer::collection_path()).await
}

pub async fn create_customer(dto: &CustomerDto) -> Result<(), ApiError> {
    let _: Value = client().post(&Customer::collection_path(), dto).await?;
    Ok(())
}

pub async fn update_customer(id: i64, dto: &CustomerDto) -> Result<(), ApiError> {
    let _: Value = client().put(&Customer::item_path(id), dto).await?;
    Ok(())
}

pub async fn delete_customer(id: i64) -> Result<(), ApiError> {
    client().delete(&Customer::item_path(id)).await
}
