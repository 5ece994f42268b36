use super::*;

/// Query for GET /helix/users.
///
/// With neither ids nor logins set, Helix returns the user owning the
/// bearer token.
#[derive(Debug, Clone, Default)]
pub struct UsersParams {
    /// Limit 100.
    pub ids: Vec<String>,
    /// Limit 100.
    pub logins: Vec<String>,
}

impl ToQuery for UsersParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query.list("id", &self.ids).list("login", &self.logins);
    }
}

/// Query for PUT /helix/users.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub description: String,
}

impl ToQuery for UpdateUserParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query.str("description", &self.description);
    }
}

/// Query for GET /helix/users/follows.
#[derive(Debug, Clone, Default)]
pub struct UsersFollowsParams {
    pub after: String,
    /// Page size, defaults to 20. Limit 100.
    pub first: u32,
    pub from_id: String,
    pub to_id: String,
}

impl ToQuery for UsersFollowsParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .str("after", &self.after)
            .int_or("first", self.first, DEFAULT_FIRST)
            .str("from_id", &self.from_id)
            .str("to_id", &self.to_id);
    }
}

/// Query for GET /helix/users/blocks.
#[derive(Debug, Clone, Default)]
pub struct UsersBlockedParams {
    pub broadcaster_id: String,
    pub after: String,
    /// Page size, defaults to 20. Limit 100.
    pub first: u32,
}

impl ToQuery for UsersBlockedParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .str("broadcaster_id", &self.broadcaster_id)
            .str("after", &self.after)
            .int_or("first", self.first, DEFAULT_FIRST);
    }
}

/// Where the blocked user was encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSourceContext {
    Chat,
    Whisper,
}

impl BlockSourceContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Whisper => "whisper",
        }
    }
}

/// Why the user is being blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    Spam,
    Harassment,
    Other,
}

impl BlockReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Harassment => "harassment",
            Self::Other => "other",
        }
    }
}

/// Query for PUT /helix/users/blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockUserParams {
    pub target_user_id: String,
    pub source_context: Option<BlockSourceContext>,
    pub reason: Option<BlockReason>,
}

impl ToQuery for BlockUserParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .str("target_user_id", &self.target_user_id)
            .opt("source_context", self.source_context.map(BlockSourceContext::as_str))
            .opt("reason", self.reason.map(BlockReason::as_str));
    }
}

/// Query for DELETE /helix/users/blocks.
#[derive(Debug, Clone, Default)]
pub struct UnblockUserParams {
    pub target_user_id: String,
}

impl ToQuery for UnblockUserParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query.str("target_user_id", &self.target_user_id);
    }
}

impl<T: Transport> HelixClient<T> {
    /// Get one or more users by id and/or login.
    ///
    /// Optional scope: `user:read:email`
    pub async fn get_users(&self, params: &UsersParams) -> Result<UsersResponse, HelixError> {
        self.get("/users", params).await
    }

    /// Update the description of the user owning the bearer token.
    ///
    /// Required scope: `user:edit`
    pub async fn update_user(
        &self,
        params: &UpdateUserParams,
    ) -> Result<UsersResponse, HelixError> {
        self.put("/users", params).await
    }

    /// Get follow relationships between users, most recent first.
    ///
    /// Set `from_id` for "who is X following", `to_id` for "who follows X",
    /// or both for "is X following Y".
    pub async fn get_users_follows(
        &self,
        params: &UsersFollowsParams,
    ) -> Result<UsersFollowsResponse, HelixError> {
        self.get("/users/follows", params).await
    }

    /// Get a user's block list.
    ///
    /// Required scope: `user:read:blocked_users`
    pub async fn get_users_blocked(
        &self,
        params: &UsersBlockedParams,
    ) -> Result<UsersBlockedResponse, HelixError> {
        self.get("/users/blocks", params).await
    }

    /// Block a user on behalf of the authenticated user.
    ///
    /// Required scope: `user:manage:blocked_users`
    pub async fn block_user(
        &self,
        params: &BlockUserParams,
    ) -> Result<BlockUserResponse, HelixError> {
        self.put("/users/blocks", params).await
    }

    /// Unblock a user on behalf of the authenticated user.
    ///
    /// Required scope: `user:manage:blocked_users`
    pub async fn unblock_user(
        &self,
        params: &UnblockUserParams,
    ) -> Result<BlockUserResponse, HelixError> {
        self.delete("/users/blocks", params).await
    }
}
