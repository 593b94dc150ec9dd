//! Web UI for the Leftovers recipe generator.
//!
//! Serves a single-page form (ingredients, meal type, cuisine) and a small
//! JSON API, both backed by one shared [`RecipeGenerator`](leftovers_recipe::RecipeGenerator).

mod api;
mod config;
mod form;
mod pages;
mod serve;

pub use api::{ApiState, create_router};
pub use config::{DEFAULT_BIND, ServerConfig, ServerConfigBuilder};
pub use form::{RecipeForm, RecipeResponse};
pub use pages::{RecipePage, render_page};
pub use serve::serve;
