//! User resource implementation.
//!
//! The user is the account that owns the API key. There is no collection
//! route; the only operation is `User::me()`.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::resources::User;
//!
//! let me = User::me(&client).await?;
//! println!("Authenticated as {} <{}>", me.name, me.email);
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{RestClient, RestError};
use crate::rest::{Data, Endpoint, ResourceObject};

/// Attributes of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttributes {
    pub name: String,
    pub email: String,
    /// Hex color assigned to the user, e.g. `#898FA9`.
    pub color: String,
    pub avatar_url: String,
    pub has_custom_avatar: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// The authenticated user.
pub type User = ResourceObject<UserAttributes>;

impl User {
    /// Retrieves the user the API key belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails, including when the key
    /// is rejected.
    pub async fn me(client: &RestClient) -> Result<Data<Self>, RestError> {
        client.get(&Endpoint::Me, None, None).await
    }
}
