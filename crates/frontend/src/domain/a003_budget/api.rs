use contracts::domain::a003_budget::aggregate::{
    CreateBudgetDto, RealizationDto, TrendResponse, UpdateBudgetDto,
};
use contracts::domain::a003_budget::{Budget, BudgetDetail, TrendPoint};
use contracts::domain::common::AggregateRoot;
use contracts::shared::error::ApiError;
use serde_json::Value;

use crate::shared::api_client::client;

pub async fn fetch_budgets() -> Result<Vec<Budget>, ApiError> {
    client().get_list(&Budget::collection_path()).await
}

pub async fn fetch_budget(id: i64) -> Result<BudgetDetail, ApiError> {
    client().get(&Budget::item_path(id)).await
}

/// `path` comes from `BudgetFilter::trend_path`
pub async fn fetch_trend(path: &str) -> Result<Vec<TrendPoint>, ApiError> {
    let response: TrendResponse = client().get(path).await?;
    Ok(response.trend)
}

pub async fn create_budget(dto: &CreateBudgetDto) -> Result<(), ApiError> {
    let _: Value = client().post(&Budget::collection_path(), dto).await?;
    Ok(())
}

pub async fn update_budget(id: i64, dto: &UpdateBudgetDto) -> Result<(), ApiError> {
    let _: Value = client().put(&Budget::item_path(id), dto).await?;
    Ok(())
}

pub async fn delete_budget(id: i64) -> Result<(), ApiError> {
    client().delete(&Budget::item_path(id)).await
}

fn realizations_path(budget_id: i64) -> String {
    format!("{}/realizations", Budget::item_path(budget_id))
}

pub async fn create_realization(budget_id: i64, dto: &RealizationDto) -> Result<(), ApiError> {
    let _: Value = client().post(&realizations_path(budget_id), dto).await?;
    Ok(())
}

pub async fn update_realization(
    budget_id: i64,
    realization_id: i64,
    dto: &RealizationDto,
) -> Result<(), ApiError> {
    let path = format!("{}/{}", realizations_path(budget_id), realization_id);
    let _: Value = client().put(&path, dto).await?;
    Ok(())
}

pub async fn delete_realization(budget_id: i64, realization_id: i64) -> Result<(), ApiError> {
    let path = format!("{}/{}", realizations_path(budget_id), realization_id);
    client().delete(&path).await
}
