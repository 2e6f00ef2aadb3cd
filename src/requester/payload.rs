use serde::de::DeserializeOwned;

/// Result of a call whose response may be either JSON or raw bytes.
///
/// Endpoints such as Mini Program code generation answer with an image on
/// success and a JSON error document otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum BinaryPayload<T> {
    Json(T),
    Binary(Vec<u8>),
}

impl<T> BinaryPayload<T> {
    pub fn is_binary(&self) -> bool {
        matches!(self, BinaryPayload::Binary(_))
    }

    pub fn json(&self) -> Option<&T> {
        match self {
            BinaryPayload::Json(value) => Some(value),
            BinaryPayload::Binary(_) => None,
        }
    }

    pub fn binary_data(&self) -> Option<&[u8]> {
        match self {
            BinaryPayload::Json(_) => None,
            BinaryPayload::Binary(data) => Some(data),
        }
    }

    pub fn into_binary(self) -> Option<Vec<u8>> {
        match self {
            BinaryPayload::Json(_) => None,
            BinaryPayload::Binary(data) => Some(data),
        }
    }
}

/// Decode `body` as JSON, falling back to the raw bytes when it is not JSON
/// of the expected shape.
pub fn decode_binary<T: DeserializeOwned>(body: Vec<u8>) -> BinaryPayload<T> {
    match serde_json::from_slice(&body) {
        Ok(value) => BinaryPayload::Json(value),
        Err(e) => {
            log::debug!(
                "response is not JSON ({}), keeping {} raw bytes",
                e,
                body.len()
            );
            BinaryPayload::Binary(body)
        }
    }
}
