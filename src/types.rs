//! Core domain and wire types
//!
//! Content items and interaction events as they arrive in request payloads,
//! plus the weight derivation used by the interaction matrix.

use serde::{Deserialize, Serialize};

/// Kind of user interaction carried by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    View,
    Like,
    Rating,
}

impl InteractionKind {
    /// Base weight applied when no positive rating magnitude is present.
    pub fn base_weight(&self) -> f64 {
        match self {
            InteractionKind::View => 1.0,
            InteractionKind::Like => 3.0,
            InteractionKind::Rating => 2.0,
        }
    }
}

/// A single user interaction record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEvent {
    pub user_id: String,
    pub content_id: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    /// Rating magnitude, meaningful for `rating` events. Upstream bounds it
    /// to 1..=5; the engine only requires it to be positive to apply.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl InteractionEvent {
    /// Effective weight: the kind's base weight, scaled by the rating
    /// magnitude when that magnitude is positive. An absent or non-positive
    /// rating falls back to the base weight deterministically.
    pub fn weight(&self) -> f64 {
        let base = self.kind.base_weight();
        match self.rating {
            Some(rating) if rating > 0.0 => base * rating,
            _ => base,
        }
    }
}

/// Content classification on the original wire. Accepted but not used by the
/// ranking engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Video,
    Product,
}

/// A content item as supplied in the request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type", default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub author: Option<String>,
}

impl ContentItem {
    /// Text fed to the vectorizer: title, description, category and tags
    /// joined. Never persisted beyond the current request.
    pub fn combined_text(&self) -> String {
        let mut text = format!("{} {} {}", self.title, self.description, self.category);
        if !self.tags.is_empty() {
            text.push(' ');
            text.push_str(&self.tags.join(" "));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_without_rating_uses_base_weight() {
        let event = InteractionEvent {
            user_id: "u1".to_string(),
            content_id: "c1".to_string(),
            kind: InteractionKind::Like,
            rating: None,
        };
        assert_eq!(event.weight(), 3.0);
    }

    #[test]
    fn rating_event_scales_base_weight() {
        let event = InteractionEvent {
            user_id: "u1".to_string(),
            content_id: "c1".to_string(),
            kind: InteractionKind::Rating,
            rating: Some(4.0),
        };
        assert_eq!(event.weight(), 8.0);
    }

    #[test]
    fn non_positive_rating_falls_back_to_base_weight() {
        let event = InteractionEvent {
            user_id: "u1".to_string(),
            content_id: "c1".to_string(),
            kind: InteractionKind::Rating,
            rating: Some(0.0),
        };
        assert_eq!(event.weight(), 2.0);

        let event = InteractionEvent {
            rating: Some(-2.0),
            ..event
        };
        assert_eq!(event.weight(), 2.0);
    }

    #[test]
    fn interaction_event_deserializes_wire_names() {
        let event: InteractionEvent =
            serde_json::from_str(r#"{"userId":"u1","contentId":"c1","type":"like"}"#).unwrap();
        assert_eq!(event.user_id, "u1");
        assert_eq!(event.content_id, "c1");
        assert_eq!(event.kind, InteractionKind::Like);
        assert!(event.rating.is_none());
    }

    #[test]
    fn content_item_tolerates_extra_wire_fields() {
        let item: ContentItem = serde_json::from_str(
            r#"{
                "id": "c1",
                "title": "Rust in Production",
                "description": "Field notes",
                "type": "article",
                "category": "programming",
                "tags": ["rust", "backend"],
                "author": "jdoe",
                "imageUrl": "https://example.com/x.png",
                "stats": {"views": 10}
            }"#,
        )
        .unwrap();
        assert_eq!(item.id, "c1");
        assert_eq!(item.content_type, Some(ContentType::Article));
        assert_eq!(item.tags.len(), 2);
    }

    #[test]
    fn combined_text_joins_all_text_fields() {
        let item = ContentItem {
            id: "c1".to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            category: "Category".to_string(),
            tags: vec!["one".to_string(), "two".to_string()],
            content_type: None,
            author: None,
        };
        assert_eq!(item.combined_text(), "Title Description Category one two");
    }
}
