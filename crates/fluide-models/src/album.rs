//! Albums and the bucket naming codec.
//!
//! An album is the application-level view of a single object-storage bucket.
//! The bucket identifier packs the owning customer and the album name together
//! around a reserved delimiter: `{customer}$Dangle${name}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reserved token separating the customer and album name in a bucket id.
pub const DELIMITER: &str = "$Dangle$";

/// Marker used for every field of an album whose bucket id is unknown.
pub const UNKNOWN: &str = "Unknown";

/// Result type for naming operations.
pub type NamingResult<T> = Result<T, NamingError>;

/// Errors raised when a (customer, name) pair cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("customer {0:?} collides with the reserved delimiter \"$Dangle$\"")]
    DelimiterInCustomer(String),

    #[error("album name {0:?} contains the reserved delimiter \"$Dangle$\"")]
    DelimiterInName(String),
}

/// An album backed by one storage bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Owning customer.
    pub customer: String,

    /// Storage bucket identifier.
    #[serde(rename = "Bucket")]
    pub bucket_id: String,

    /// Album name.
    pub name: String,
}

impl Album {
    /// Build an album from its customer and name.
    ///
    /// Fails if either part contains [`DELIMITER`], since the bucket id could
    /// not be split back into the same pair.
    pub fn new(customer: impl Into<String>, name: impl Into<String>) -> NamingResult<Self> {
        let customer = customer.into();
        let name = name.into();
        let bucket_id = encode(&customer, &name)?;
        Ok(Self {
            customer,
            bucket_id,
            name,
        })
    }

    /// Decode an album from a bucket id reported by the backend.
    ///
    /// A missing id yields the [`Album::unknown`] sentinel. An id with no
    /// delimiter belongs to some other application; it is kept as the
    /// customer with an unknown album name.
    pub fn from_bucket_id(bucket_id: Option<&str>) -> Self {
        let Some(bucket_id) = bucket_id else {
            return Self::unknown();
        };

        match bucket_id.split_once(DELIMITER) {
            Some((customer, name)) => Self {
                customer: customer.to_string(),
                bucket_id: bucket_id.to_string(),
                name: name.to_string(),
            },
            None => Self {
                customer: bucket_id.to_string(),
                bucket_id: bucket_id.to_string(),
                name: UNKNOWN.to_string(),
            },
        }
    }

    /// Sentinel album with every field set to [`UNKNOWN`].
    pub fn unknown() -> Self {
        Self {
            customer: UNKNOWN.to_string(),
            bucket_id: UNKNOWN.to_string(),
            name: UNKNOWN.to_string(),
        }
    }
}

/// Encode a (customer, name) pair into a bucket id.
///
/// The first delimiter in the result must be the one inserted here, so a
/// customer ending in `$Dangle` is rejected along with one containing the
/// whole delimiter.
pub fn encode(customer: &str, name: &str) -> NamingResult<String> {
    let bucket_id = format!("{}{}{}", customer, DELIMITER, name);
    if bucket_id.find(DELIMITER) != Some(customer.len()) {
        return Err(NamingError::DelimiterInCustomer(customer.to_string()));
    }
    if name.contains(DELIMITER) {
        return Err(NamingError::DelimiterInName(name.to_string()));
    }
    Ok(bucket_id)
}

/// Decode a bucket id into an album. See [`Album::from_bucket_id`].
pub fn decode(bucket_id: Option<&str>) -> Album {
    Album::from_bucket_id(bucket_id)
}
