// src/models/blob.rs
// DOCUMENTATION: JSON encoding of binary photo columns
// PURPOSE: Render blobs as `{"type": "Buffer", "data": [...]}`, the shape
// existing clients already decode

use serde::{Serialize, Serializer};

#[derive(Serialize)]
struct BufferRef<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: &'a [u8],
}

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    BufferRef {
        kind: "Buffer",
        data: bytes,
    }
    .serialize(serializer)
}

/// Same encoding for nullable blob columns; `None` becomes `null`
pub mod optional {
    use serde::Serializer;

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => super::serialize(bytes, serializer),
            None => serializer.serialize_none(),
        }
    }
}
