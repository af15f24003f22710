use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewReviewItem, ReviewPayload, ReviewQueueItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQueueItemDto {
    pub id: i64,
    pub source_type: String,
    pub payload: ReviewPayload,
    pub confidence: Option<f64>,
    pub status: String,
    pub created_at: String,
    pub reviewed_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewItemRequestDto {
    pub source_type: String,
    #[serde(default)]
    pub payload: ReviewPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewQueueQueryDto {
    pub status: Option<String>,
}

impl From<ReviewQueueItem> for ReviewQueueItemDto {
    fn from(item: ReviewQueueItem) -> Self {
        Self {
            id: item.id,
            source_type: item.source_type,
            payload: item.payload,
            confidence: item.confidence,
            status: item.status.as_str().to_string(),
            created_at: item.created_at,
            reviewed_at: item.reviewed_at,
        }
    }
}

impl TryFrom<CreateReviewItemRequestDto> for NewReviewItem {
    type Error = String;

    fn try_from(request: CreateReviewItemRequestDto) -> Result<Self, Self::Error> {
        let source_type = request.source_type.trim();
        if source_type.is_empty() {
            return Err("sourceType must not be blank".to_string());
        }

        Ok(NewReviewItem {
            source_type: source_type.to_string(),
            payload: request.payload,
            confidence: request.confidence,
        })
    }
}
