use serde::{Deserialize, Serialize};

/// A user record. The password is write-only: it is sent on updates when
/// provided and never deserialized. Team membership is derived from the
/// team collection, not stored here.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
}
