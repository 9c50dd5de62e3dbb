use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoredObject {
    pub key: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

impl StoredObject {
    pub fn new(key: impl Into<String>, content: Vec<u8>, content_type: impl Into<String>) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            key: key.into(),
            content_type: content_type.into(),
            content,
            created_date: now,
            last_modified: now,
        }
    }
}
