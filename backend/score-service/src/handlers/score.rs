use actix_web::{web, HttpResponse};

use crate::error::ErrorResponse;
use crate::metrics;
use crate::models::{ScoreRequest, ScoreResponse};
use crate::services::scoring;

/// Calculate the score contribution of a single vote
///
/// Unrecognised `contentType`/`voteType` values score 0.0. Bodies that do not
/// decode into `ScoreRequest` never reach this handler; the JSON extractor
/// rejects them with 400.
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "Score",
    request_body = ScoreRequest,
    responses(
        (status = 200, description = "Score calculated", body = ScoreResponse),
        (status = 400, description = "Malformed vote payload", body = ErrorResponse)
    )
)]
pub async fn calculate_score(payload: web::Json<ScoreRequest>) -> HttpResponse {
    let vote = &payload.vote;
    let content_type = vote.parsed_content_type();
    let vote_type = vote.parsed_vote_type();
    let score = scoring::score_vote(content_type, vote_type);

    metrics::record_calculation(content_type, vote_type);
    tracing::debug!(
        content_type = %vote.content_type,
        vote_type = %vote.vote_type,
        score,
        "Calculated vote score"
    );

    HttpResponse::Ok().json(ScoreResponse { score })
}
