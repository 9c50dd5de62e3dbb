use one_dto_mapper::From;
use time::OffsetDateTime;

use crate::model::stored_object::StoredObject;

#[derive(Clone, Debug, From)]
#[from(StoredObject)]
pub struct GetObjectResponseDTO {
    pub key: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub last_modified: OffsetDateTime,
}
