//! User commands
//!
//! Users are static for a board, so there are only reads here.

mod get;
mod list;

pub use get::GetUser;
pub use list::ListUsers;

use crate::types::User;
use serde_json::{json, Value};

/// A user as presented: placeholder avatar filled in, initials added
fn user_view(user: &User) -> Value {
    json!({
        "id": user.id,
        "name": user.name,
        "avatar": user.avatar_or_default(),
        "initials": user.initials(),
    })
}
