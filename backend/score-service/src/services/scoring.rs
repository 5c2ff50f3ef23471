/// Vote scoring
///
/// Maps a (vote type, content type) pair onto a fixed point value. The
/// mapping is total: anything outside the table scores `NEUTRAL_SCORE`.
use crate::models::{ContentType, VoteType};

/// Score assigned to votes the table does not cover
pub const NEUTRAL_SCORE: f64 = 0.0;

/// Point values per vote polarity and content kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTable {
    pub post_upvote: f64,
    pub comment_upvote: f64,
    pub post_downvote: f64,
    pub comment_downvote: f64,
}

impl PointTable {
    /// The production table
    ///
    /// | vote      | content | points |
    /// |-----------|---------|--------|
    /// | UPVOTE    | POST    | +2.5   |
    /// | UPVOTE    | COMMENT | +5.0   |
    /// | DOWN_VOTE | POST    | -1.5   |
    /// | DOWN_VOTE | COMMENT | -2.5   |
    pub const STANDARD: PointTable = PointTable {
        post_upvote: 2.5,
        comment_upvote: 5.0,
        post_downvote: -1.5,
        comment_downvote: -2.5,
    };

    pub fn points(&self, vote_type: VoteType, content_type: ContentType) -> f64 {
        match (vote_type, content_type) {
            (VoteType::Upvote, ContentType::Post) => self.post_upvote,
            (VoteType::Upvote, ContentType::Comment) => self.comment_upvote,
            (VoteType::DownVote, ContentType::Post) => self.post_downvote,
            (VoteType::DownVote, ContentType::Comment) => self.comment_downvote,
        }
    }

    /// Score raw wire strings, falling back to `NEUTRAL_SCORE` for anything
    /// unrecognised (empty strings and other casings included).
    pub fn score(&self, content_type: &str, vote_type: &str) -> f64 {
        self.score_parsed(ContentType::parse(content_type), VoteType::parse(vote_type))
    }

    /// Score already-parsed values; `None` stands for an unrecognised value
    pub fn score_parsed(
        &self,
        content_type: Option<ContentType>,
        vote_type: Option<VoteType>,
    ) -> f64 {
        match (vote_type, content_type) {
            (Some(vote_type), Some(content_type)) => self.points(vote_type, content_type),
            _ => NEUTRAL_SCORE,
        }
    }
}

impl Default for PointTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Score a vote against the standard table
pub fn compute_score(content_type: &str, vote_type: &str) -> f64 {
    PointTable::STANDARD.score(content_type, vote_type)
}

/// Score a vote whose enums were parsed by the caller
pub fn score_vote(content_type: Option<ContentType>, vote_type: Option<VoteType>) -> f64 {
    PointTable::STANDARD.score_parsed(content_type, vote_type)
}
