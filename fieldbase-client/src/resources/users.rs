use crate::client::Client;
use crate::error::ClientResult;
use fieldbase_types::User;

impl Client {
    /// Returns the account the token belongs to.
    pub async fn get_current_user(&self) -> ClientResult<User> {
        self.get("/users/me", "user").await
    }
}
