use super::*;

/// Query for GET /helix/chat/badges.
#[derive(Debug, Clone, Default)]
pub struct GetChatBadgeParams {
    pub broadcaster_id: String,
}

impl ToQuery for GetChatBadgeParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query.str("broadcaster_id", &self.broadcaster_id);
    }
}

/// Query for GET /helix/chat/emotes.
#[derive(Debug, Clone, Default)]
pub struct GetChatEmoteParams {
    pub broadcaster_id: String,
}

impl ToQuery for GetChatEmoteParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query.str("broadcaster_id", &self.broadcaster_id);
    }
}

/// Query for GET /helix/chat/emotes/set.
#[derive(Debug, Clone, Default)]
pub struct GetChatSetEmoteParams {
    pub emote_set_id: String,
}

impl ToQuery for GetChatSetEmoteParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query.str("emote_set_id", &self.emote_set_id);
    }
}

impl<T: Transport> HelixClient<T> {
    /// Get the custom chat badges of a broadcaster's channel.
    pub async fn get_channel_chat_badges(
        &self,
        params: &GetChatBadgeParams,
    ) -> Result<ChatBadgesResponse, HelixError> {
        self.get("/chat/badges", params).await
    }

    /// Get the chat badges available in every channel.
    pub async fn get_global_chat_badges(&self) -> Result<ChatBadgesResponse, HelixError> {
        self.get("/chat/badges/global", &()).await
    }

    /// Get the emotes available in every channel.
    pub async fn get_global_chat_emotes(&self) -> Result<ChatEmotesResponse, HelixError> {
        self.get("/chat/emotes/global", &()).await
    }

    /// Get a broadcaster's subscriber, bits tier and follower emotes.
    pub async fn get_channel_chat_emotes(
        &self,
        params: &GetChatEmoteParams,
    ) -> Result<ChatEmotesResponse, HelixError> {
        self.get("/chat/emotes", params).await
    }

    /// Get the emotes of one emote set.
    pub async fn get_set_chat_emotes(
        &self,
        params: &GetChatSetEmoteParams,
    ) -> Result<ChatEmotesResponse, HelixError> {
        self.get("/chat/emotes/set", params).await
    }
}
