// ABOUTME: Serde models for LINE webhook deliveries and reply requests
// ABOUTME: Unknown event and message kinds deserialize into catch-all variants instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Body of one webhook delivery
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    /// Bot user id the delivery is addressed to
    #[serde(default)]
    pub destination: Option<String>,
    /// Events in delivery order
    pub events: Vec<WebhookEvent>,
}

/// One webhook event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Event kind (`message`, `follow`, `postback`, ...)
    #[serde(rename = "type")]
    pub event_type: String,
    /// Token for a single reply; absent for events that cannot be answered
    #[serde(default)]
    pub reply_token: Option<String>,
    /// Who triggered the event
    #[serde(default)]
    pub source: Option<EventSource>,
    /// Message content for `message` events
    #[serde(default)]
    pub message: Option<EventMessage>,
}

/// Origin of an event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    /// `user`, `group` or `room`
    #[serde(rename = "type")]
    pub source_type: String,
    /// Sending user, when LINE discloses it
    #[serde(default)]
    pub user_id: Option<String>,
    /// Group chat id for group sources
    #[serde(default)]
    pub group_id: Option<String>,
    /// Room id for multi-person chat sources
    #[serde(default)]
    pub room_id: Option<String>,
}

impl EventSource {
    /// Key under which the conversation state is stored
    #[must_use]
    pub fn conversation_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .or(self.group_id.as_deref())
            .or(self.room_id.as_deref())
    }
}

/// Message content of a `message` event
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventMessage {
    /// Plain text message
    Text {
        /// Message text as typed by the user
        text: String,
    },
    /// Stickers, images, locations and anything else
    #[serde(other)]
    Other,
}

/// A text message event that can be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMessageEvent<'a> {
    /// Reply token for this event
    pub reply_token: &'a str,
    /// Conversation key (user id, falling back to group or room id)
    pub user_id: &'a str,
    /// Message text
    pub text: &'a str,
}

impl WebhookEvent {
    /// View this event as an answerable text message, if it is one
    #[must_use]
    pub fn as_text_message(&self) -> Option<TextMessageEvent<'_>> {
        if self.event_type != "message" {
            return None;
        }
        let Some(EventMessage::Text { text }) = &self.message else {
            return None;
        };
        Some(TextMessageEvent {
            reply_token: self.reply_token.as_deref()?,
            user_id: self.source.as_ref()?.conversation_id()?,
            text,
        })
    }
}

/// Body of a reply API request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessageRequest<'a> {
    /// Reply token from the webhook event
    pub reply_token: &'a str,
    /// Messages to send (at most five)
    pub messages: Vec<OutgoingMessage<'a>>,
}

/// One outgoing message
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutgoingMessage<'a> {
    /// Plain text message
    Text {
        /// Message text
        text: &'a str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_event_extraction() {
        let payload: WebhookPayload = serde_json::from_str(
            r#"{
                "destination": "Ubot",
                "events": [
                    {
                        "type": "message",
                        "mode": "active",
                        "timestamp": 1700000000000,
                        "replyToken": "token-1",
                        "source": {"type": "user", "userId": "U123"},
                        "message": {"id": "1", "type": "text", "text": "開始"}
                    },
                    {
                        "type": "message",
                        "replyToken": "token-2",
                        "source": {"type": "user", "userId": "U123"},
                        "message": {"id": "2", "type": "sticker", "packageId": "1", "stickerId": "1"}
                    },
                    {"type": "follow", "replyToken": "token-3", "source": {"type": "user", "userId": "U9"}}
                ]
            }"#,
        )
        .unwrap();

        let texts: Vec<_> = payload
            .events
            .iter()
            .filter_map(WebhookEvent::as_text_message)
            .collect();
        assert_eq!(
            texts,
            vec![TextMessageEvent {
                reply_token: "token-1",
                user_id: "U123",
                text: "開始",
            }]
        );
    }

    #[test]
    fn test_group_source_falls_back_to_group_id() {
        let source: EventSource =
            serde_json::from_str(r#"{"type": "group", "groupId": "C1"}"#).unwrap();
        assert_eq!(source.conversation_id(), Some("C1"));
    }

    #[test]
    fn test_reply_request_shape() {
        let request = ReplyMessageRequest {
            reply_token: "abc",
            messages: vec![OutgoingMessage::Text { text: "hi" }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"replyToken": "abc", "messages": [{"type": "text", "text": "hi"}]})
        );
    }
}
