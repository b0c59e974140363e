use serde::{Deserialize, Serialize};

/// One turn of a chat transcript. Opaque to the tournament core — forwarded
/// to the judge verbatim, never inspected or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// A single candidate response: the full message list produced for one
/// slot in the group. `predictions[i]` is candidate `i`'s `Prediction`.
pub type Prediction = Vec<Message>;

/// The shared query all candidates in a group responded to.
pub type Query = str;
