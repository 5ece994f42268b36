use super::*;

/// Query for GET /helix/subscriptions.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionsParams {
    pub broadcaster_id: String,
    /// Filter to these users. Limit 100.
    pub user_id: Vec<String>,
    pub after: String,
    pub before: String,
    /// Page size, defaults to 20. Limit 100.
    pub first: u32,
}

impl ToQuery for SubscriptionsParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .str("broadcaster_id", &self.broadcaster_id)
            .list("user_id", &self.user_id)
            .str("after", &self.after)
            .str("before", &self.before)
            .int_or("first", self.first, DEFAULT_FIRST);
    }
}

/// Query for GET /helix/subscriptions/user.
#[derive(Debug, Clone, Default)]
pub struct UserSubscriptionsParams {
    pub broadcaster_id: String,
    pub user_id: String,
}

impl ToQuery for UserSubscriptionsParams {
    fn write_query(&self, query: &mut QueryBuilder) {
        query
            .str("broadcaster_id", &self.broadcaster_id)
            .str("user_id", &self.user_id);
    }
}

impl<T: Transport> HelixClient<T> {
    /// Get the subscribers of a broadcaster. Broadcasters can only request
    /// their own subscriptions.
    ///
    /// Required scope: `channel:read:subscriptions`
    pub async fn get_subscriptions(
        &self,
        params: &SubscriptionsParams,
    ) -> Result<SubscriptionsResponse, HelixError> {
        self.get("/subscriptions", params).await
    }

    /// Check whether a user is subscribed to a broadcaster.
    ///
    /// Helix answers 404 when there is no subscription; that surfaces as
    /// `common.status_code == 404` with an empty payload.
    ///
    /// Required scope: `user:read:subscriptions`
    pub async fn check_user_subscription(
        &self,
        params: &UserSubscriptionsParams,
    ) -> Result<UserSubscriptionResponse, HelixError> {
        self.get("/subscriptions/user", params).await
    }
}
