//! Response body decoding

use crate::error::{RestError, RestResult};
use gecko_types::Envelope;
use serde::de::DeserializeOwned;

/// Decode a JSON body into `T`
///
/// Unknown fields are ignored. Type mismatches report the path of the
/// offending field, e.g. `[0].market_cap_rank`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> RestResult<T> {
    let mut de = serde_json::Deserializer::from_slice(body);

    let value = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        RestError::Decode {
            path,
            message: err.into_inner().to_string(),
        }
    })?;

    de.end().map_err(|err| RestError::Decode {
        path: ".".to_string(),
        message: err.to_string(),
    })?;

    Ok(value)
}

/// Decode a wrapped payload and hand back only the inner value
pub fn decode_enveloped<E>(body: &[u8]) -> RestResult<E::Inner>
where
    E: Envelope + DeserializeOwned,
{
    decode::<E>(body).map(Envelope::into_inner)
}
