use axum::Router;

mod plans;

use crate::WebState;

pub fn routes(state: WebState) -> Router {
    plans::routes(state)
}
