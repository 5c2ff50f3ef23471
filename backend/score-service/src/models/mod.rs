use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Kind of content a vote targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Post,
    Comment,
}

impl ContentType {
    /// Parse the wire spelling. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "POST" => Some(Self::Post),
            "COMMENT" => Some(Self::Comment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteType {
    Upvote,
    DownVote,
}

impl VoteType {
    /// Parse the wire spelling. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "UPVOTE" => Some(Self::Upvote),
            "DOWN_VOTE" => Some(Self::DownVote),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upvote => "UPVOTE",
            Self::DownVote => "DOWN_VOTE",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vote event as sent by callers.
///
/// `content_type` and `vote_type` stay as free-form strings: unrecognised
/// values are scored as neutral rather than rejected. The id fields are
/// carried for the caller's bookkeeping and are not read by the scorer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteEvent {
    pub voter_id: Option<i64>,
    pub content_id: Option<i64>,
    pub content_type: String,
    pub vote_type: String,
    pub author_id: Option<i64>,
}

impl VoteEvent {
    pub fn parsed_content_type(&self) -> Option<ContentType> {
        ContentType::parse(&self.content_type)
    }

    pub fn parsed_vote_type(&self) -> Option<VoteType> {
        VoteType::parse(&self.vote_type)
    }
}

/// Request body for `POST /calculate`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreRequest {
    pub vote: VoteEvent,
}

/// Response body for `POST /calculate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(ContentType::parse("POST"), Some(ContentType::Post));
        assert_eq!(ContentType::parse("COMMENT"), Some(ContentType::Comment));
        assert_eq!(VoteType::parse("UPVOTE"), Some(VoteType::Upvote));
        assert_eq!(VoteType::parse("DOWN_VOTE"), Some(VoteType::DownVote));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(ContentType::parse("post"), None);
        assert_eq!(VoteType::parse("Upvote"), None);
        assert_eq!(VoteType::parse("DOWNVOTE"), None);
        assert_eq!(ContentType::parse(""), None);
    }

    #[test]
    fn test_display_uses_wire_spelling() {
        assert_eq!(VoteType::DownVote.to_string(), "DOWN_VOTE");
        assert_eq!(ContentType::Comment.to_string(), "COMMENT");
    }

    #[test]
    fn test_vote_event_deserializes_camel_case() {
        let request: ScoreRequest = serde_json::from_value(json!({
            "vote": {
                "voterId": 1,
                "contentId": 10,
                "contentType": "COMMENT",
                "voteType": "UPVOTE",
                "authorId": 2
            }
        }))
        .unwrap();

        assert_eq!(request.vote.voter_id, Some(1));
        assert_eq!(request.vote.content_id, Some(10));
        assert_eq!(request.vote.author_id, Some(2));
        assert_eq!(request.vote.parsed_content_type(), Some(ContentType::Comment));
        assert_eq!(request.vote.parsed_vote_type(), Some(VoteType::Upvote));
    }

    #[test]
    fn test_vote_event_tolerates_null_ids_and_extra_fields() {
        let vote: VoteEvent = serde_json::from_value(json!({
            "voterId": null,
            "contentType": "POST",
            "voteType": "DOWN_VOTE",
            "score": null
        }))
        .unwrap();

        assert_eq!(vote.voter_id, None);
        assert_eq!(vote.content_id, None);
        assert_eq!(vote.author_id, None);
    }

    #[test]
    fn test_vote_event_requires_vote_type() {
        let result = serde_json::from_value::<VoteEvent>(json!({
            "voterId": 1,
            "contentId": 10,
            "contentType": "POST",
            "authorId": 2
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_vote_event_requires_string_content_type() {
        let missing = serde_json::from_value::<VoteEvent>(json!({
            "voteType": "UPVOTE"
        }));
        assert!(missing.is_err());

        let numeric = serde_json::from_value::<VoteEvent>(json!({
            "contentType": 7,
            "voteType": "UPVOTE"
        }));
        assert!(numeric.is_err());
    }

    #[test]
    fn test_vote_event_rejects_non_integer_ids() {
        let result = serde_json::from_value::<VoteEvent>(json!({
            "voterId": "one",
            "contentType": "POST",
            "voteType": "UPVOTE"
        }));

        assert!(result.is_err());
    }
}
