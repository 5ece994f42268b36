use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::response::Pagination;

/// Chat badge set from GET /helix/chat/badges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatBadge {
    pub set_id: String,
    pub versions: Vec<BadgeVersion>,
}

/// One version of a badge set, with image URLs at each scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeVersion {
    pub id: String,
    pub image_url_1x: String,
    pub image_url_2x: String,
    pub image_url_4x: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManyChatBadges {
    #[serde(rename = "data", default)]
    pub badges: Vec<ChatBadge>,
}

/// Chat emote from GET /helix/chat/emotes*.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatEmote {
    pub id: String,
    pub name: String,
    pub images: EmoteImages,
    /// Subscriber tier (`1000`, `2000`, `3000`). Empty for non-subscriber emotes.
    pub tier: String,
    pub emote_type: String,
    pub emote_set_id: String,
}

/// Image URLs at different scales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmoteImages {
    pub url_1x: String,
    pub url_2x: String,
    pub url_4x: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManyChatEmotes {
    #[serde(rename = "data", default)]
    pub emotes: Vec<ChatEmote>,
}

/// Broadcaster subscription from GET /helix/subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub broadcaster_id: String,
    pub broadcaster_login: String,
    pub broadcaster_name: String,
    pub is_gift: bool,
    pub gifter_id: String,
    pub gifter_login: String,
    pub gifter_name: String,
    pub tier: String,
    pub plan_name: String,
    pub user_id: String,
    pub user_name: String,
    pub user_login: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManySubscriptions {
    #[serde(rename = "data", default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub total: u64,
}

/// A user's subscription to one broadcaster, from GET /helix/subscriptions/user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSubscription {
    pub broadcaster_id: String,
    pub broadcaster_login: String,
    pub broadcaster_name: String,
    pub is_gift: bool,
    pub gifter_login: String,
    pub gifter_name: String,
    pub tier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManyUserSubscriptions {
    #[serde(rename = "data", default)]
    pub user_subscriptions: Vec<UserSubscription>,
}

/// User information from GET /helix/users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub broadcaster_type: String,
    pub description: String,
    pub profile_image_url: String,
    pub offline_image_url: String,
    pub view_count: u64,
    /// Only present with the `user:read:email` scope.
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManyUsers {
    #[serde(rename = "data", default)]
    pub users: Vec<User>,
}

/// Follow relationship from GET /helix/users/follows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFollow {
    pub from_id: String,
    pub from_login: String,
    pub from_name: String,
    pub to_id: String,
    pub to_name: String,
    pub followed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManyFollows {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "data", default)]
    pub follows: Vec<UserFollow>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Blocked user entry from GET /helix/users/blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserBlocked {
    pub user_id: String,
    pub user_login: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManyUsersBlocked {
    #[serde(rename = "data", default)]
    pub users: Vec<UserBlocked>,
    #[serde(default)]
    pub pagination: Pagination,
}
