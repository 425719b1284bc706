use contracts::domain::a002_project::{
    PostPoStageUpdate, Project, ProjectDetail, ProjectDto, ProjectSummary,
    RealizationUpdateRequest,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::error::ApiError;
use serde_json::Value;

use crate::shared::api_client::client;

pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    client().get_list(&Project::collection_path()).await
}

pub async fn fetch_summary() -> Result<ProjectSummary, ApiError> {
    client().get("/projects/summary").await
}

pub async fn fetch_project(id: i64) -> Result<ProjectDetail, ApiError> {
    client().get(&Project::item_path(id)).await
}

pub async fn create_project(dto: &ProjectDto) -> Result<(), ApiError> {
    let _: Value = client().post(&Project::collection_path(), dto).await?;
    Ok(())
}

pub async fn update_project(id: i64, dto: &ProjectDto) -> Result<(), ApiError> {
    let _: Value = client().put(&Project::item_path(id), dto).await?;
    Ok(())
}

pub async fn delete_project(id: i64) -> Result<(), ApiError> {
    client().delete(&Project::item_path(id)).await
}

/// PUT /projects/:id/realization/:month
pub async fn update_realization(
    id: i64,
    source_month: &str,
    request: &RealizationUpdateRequest,
) -> Result<(), ApiError> {
    let path = format!("{}/realization/{}", Project::item_path(id), source_month);
    let _: Value = client().put(&path, request).await?;
    Ok(())
}

pub async fn update_post_po(id: i64, update: &PostPoStageUpdate) -> Result<(), ApiError> {
    let path = format!("{}/postpo-monitoring", Project::item_path(id));
    let _: Value = client().put(&path, update).await?;
    Ok(())
}

/// File produced by GET /projects/export/csv
pub async fn export_csv(path_and_query: &str) -> Result<Vec<u8>, ApiError> {
    client().get_bytes(path_and_query).await
}
