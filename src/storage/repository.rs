use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A stored project reference.
///
/// `title`, `url` and `techs` hold whatever JSON the client sent, `null` included. A field
/// the client left out stays `None` and is omitted from the serialized record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Repository {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub techs: Option<Value>,
    pub likes: u64,
}

/// Client-editable fields, accepted by create and update.
///
/// `None` means the key was absent; `Some(Value::Null)` is an explicit `null`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RepositoryInput {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub url: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub techs: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Repository {
    pub fn new(input: RepositoryInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            url: input.url,
            techs: input.techs,
            likes: 0,
        }
    }

    /// Replaces the editable fields wholesale. `id` and `likes` are untouched.
    pub fn apply(&mut self, input: RepositoryInput) {
        self.title = input.title;
        self.url = input.url;
        self.techs = input.techs;
    }

    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}
