//! Twitch Helix endpoint wrappers.
//!
//! Each wrapper binds one fixed path, verb, parameter type and payload type
//! to a named method on [`HelixClient`].

mod chat;
mod subscriptions;
mod users;

pub mod models;

pub use chat::{GetChatBadgeParams, GetChatEmoteParams, GetChatSetEmoteParams};
pub use models::{
    BadgeVersion, ChatBadge, ChatEmote, EmoteImages, ManyChatBadges, ManyChatEmotes, ManyFollows,
    ManySubscriptions, ManyUserSubscriptions, ManyUsers, ManyUsersBlocked, Subscription, User,
    UserBlocked, UserFollow, UserSubscription,
};
pub use subscriptions::{SubscriptionsParams, UserSubscriptionsParams};
pub use users::{
    BlockReason, BlockSourceContext, BlockUserParams, UnblockUserParams, UpdateUserParams,
    UsersBlockedParams, UsersFollowsParams, UsersParams,
};

use crate::query::{QueryBuilder, ToQuery};
use crate::response::{HelixResponse, NoContent};
use crate::transport::Transport;
use crate::{HelixClient, HelixError};

pub type ChatBadgesResponse = HelixResponse<ManyChatBadges>;
pub type ChatEmotesResponse = HelixResponse<ManyChatEmotes>;
pub type SubscriptionsResponse = HelixResponse<ManySubscriptions>;
pub type UserSubscriptionResponse = HelixResponse<ManyUserSubscriptions>;
pub type UsersResponse = HelixResponse<ManyUsers>;
pub type UsersFollowsResponse = HelixResponse<ManyFollows>;
pub type UsersBlockedResponse = HelixResponse<ManyUsersBlocked>;
pub type BlockUserResponse = HelixResponse<NoContent>;

/// Default page size Helix applies to list endpoints.
const DEFAULT_FIRST: u32 = 20;
