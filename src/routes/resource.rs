//! Resource CRUD routes: one static table per resource, mounted under /api.

use crate::handlers::resource::{create, delete, list, read, update};
use crate::model::{Movie, Resource, User};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes for one resource: collection at /{segment}, record at /{segment}/:id.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::DEF.path_segment);
    let record = format!("/{}/:id", R::DEF.path_segment);
    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&record, get(read::<R>).put(update::<R>).delete(delete::<R>))
}

/// /api/movies and /api/users.
pub fn api_routes(state: AppState) -> Router {
    let api = Router::new()
        .merge(resource_routes::<Movie>())
        .merge(resource_routes::<User>());
    Router::new().nest("/api", api).with_state(state)
}
