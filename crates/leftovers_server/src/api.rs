//! HTTP routes for the recipe form, JSON API and health checks.

use crate::{RecipeForm, RecipePage, RecipeResponse, render_page};
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use leftovers_core::GenerationRequest;
use leftovers_recipe::RecipeGenerator;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Shared recipe generator.
    pub generator: Arc<RecipeGenerator>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(generator: Arc<RecipeGenerator>) -> Self {
        Self { generator }
    }
}

/// Creates the web UI router.
pub fn create_router(generator: Arc<RecipeGenerator>) -> Router {
    let state = ApiState { generator };

    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/api/recipes", post(create_recipe))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Empty recipe form.
#[instrument(skip_all)]
async fn index() -> Html<String> {
    Html(render_page(&RecipeForm::default(), &RecipePage::Blank))
}

/// Form submission: validates, generates once, renders the result.
#[instrument(skip_all)]
async fn submit_form(
    State(state): State<ApiState>,
    Form(form): Form<RecipeForm>,
) -> Html<String> {
    info!(meal_type = %form.meal_type, cuisine = %form.cuisine, "Recipe form submitted");

    let form = RecipeForm {
        ingredients: form.ingredient_text(),
        ..form
    };
    let request = match GenerationRequest::new(
        form.ingredients.as_str(),
        form.meal_type,
        form.cuisine,
    ) {
        Ok(request) => request,
        Err(e) => {
            warn!(reason = %e.kind, "Rejected form submission");
            return Html(render_page(&form, &RecipePage::Warning(e.kind.to_string())));
        }
    };

    let page = match state.generator.generate(&request).await {
        Ok(recipe) => RecipePage::Recipe {
            ingredients: form.ingredients.clone(),
            recipe: recipe.into_inner(),
        },
        Err(e) => RecipePage::Failed {
            ingredients: form.ingredients.clone(),
            message: e.to_string(),
        },
    };

    Html(render_page(&form, &page))
}

/// JSON recipe generation.
#[instrument(skip_all)]
async fn create_recipe(State(state): State<ApiState>, Json(body): Json<RecipeForm>) -> Response {
    info!(meal_type = %body.meal_type, cuisine = %body.cuisine, "Recipe API request");

    let body = RecipeForm {
        ingredients: body.ingredient_text(),
        ..body
    };
    let request = match GenerationRequest::new(
        body.ingredients.as_str(),
        body.meal_type,
        body.cuisine,
    ) {
        Ok(request) => request,
        Err(e) => {
            warn!(reason = %e.kind, "Rejected API request");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.kind.to_string() })),
            )
                .into_response();
        }
    };

    match state.generator.generate(&request).await {
        Ok(recipe) => (
            StatusCode::OK,
            Json(RecipeResponse {
                ingredients: body.ingredients,
                meal_type: body.meal_type,
                cuisine: body.cuisine,
                recipe: recipe.into_inner(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
