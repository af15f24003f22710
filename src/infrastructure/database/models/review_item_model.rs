use diesel::prelude::*;
use serde_json;

use crate::domain::entities::{NewReviewItem, ReviewPayload, ReviewQueueItem};
use crate::domain::value_objects::ReviewStatus;
use crate::infrastructure::database::schema::review_queue;

#[derive(Debug, Queryable, Identifiable, Selectable)]
#[diesel(table_name = review_queue)]
#[diesel(primary_key(id))]
pub struct ReviewItemModel {
    pub id: i64,
    pub source_type: String,
    pub payload: serde_json::Value,
    pub confidence: Option<f64>,
    pub status: String,
    pub created_at: String,
    pub reviewed_at: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = review_queue)]
pub struct NewReviewItemModel {
    pub source_type: String,
    pub payload: serde_json::Value,
    pub confidence: Option<f64>,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = review_queue)]
pub struct ResolveReviewItemModel {
    pub status: String,
    pub reviewed_at: String,
}

impl NewReviewItemModel {
    pub fn new(item: NewReviewItem, now: String) -> Result<Self, String> {
        let payload = serde_json::to_value(&item.payload)
            .map_err(|e| format!("Failed to encode review payload: {}", e))?;

        Ok(Self {
            source_type: item.source_type,
            payload,
            confidence: item.confidence,
            status: ReviewStatus::Pending.as_str().to_string(),
            created_at: now,
        })
    }
}

impl TryFrom<ReviewItemModel> for ReviewQueueItem {
    type Error = String;

    fn try_from(model: ReviewItemModel) -> Result<Self, Self::Error> {
        let payload: ReviewPayload = serde_json::from_value(model.payload)
            .map_err(|e| format!("Failed to decode payload of review {}: {}", model.id, e))?;

        Ok(ReviewQueueItem {
            id: model.id,
            source_type: model.source_type,
            payload,
            confidence: model.confidence,
            status: ReviewStatus::from_string(&model.status)?,
            created_at: model.created_at,
            reviewed_at: model.reviewed_at,
        })
    }
}
