/// OpenAPI documentation for the score service
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{ScoreRequest, ScoreResponse, VoteEvent};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nova Score Service API",
        version = "1.0.0",
        description = "Point values for post and comment votes",
        license(
            name = "MIT"
        )
    ),
    paths(crate::handlers::score::calculate_score),
    components(schemas(ScoreRequest, ScoreResponse, VoteEvent, ErrorResponse)),
    tags(
        (name = "Score", description = "Vote scoring"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
