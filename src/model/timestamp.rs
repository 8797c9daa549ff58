//! Epoch timestamps as sent by the API
//!
//! Times arrive as seconds since the Unix epoch, as integers or floats.
//! `edited` is `false` for posts and comments that were never edited.

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A UTC instant decoded from an epoch value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The "never" sentinel
    pub fn zero() -> Self {
        Self(DateTime::<Utc>::MIN_UTC)
    }

    /// Build from whole epoch seconds
    pub fn from_secs(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Build from fractional epoch seconds
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() {
            return None;
        }
        // floor keeps the fraction in [0, 1) for instants before the epoch
        let floor = secs.floor();
        let mut whole = floor as i64;
        let mut nanos = ((secs - floor) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            whole += 1;
            nanos = 0;
        }
        DateTime::from_timestamp(whole, nanos).map(Self)
    }

    /// Whether this is the "never" sentinel
    pub fn is_zero(&self) -> bool {
        self.0 == DateTime::<Utc>::MIN_UTC
    }

    /// The underlying instant
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("never");
        }
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_zero() {
            return serializer.serialize_bool(false);
        }
        serializer.serialize_i64(self.0.timestamp())
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or false")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Timestamp, E> {
        if v {
            Err(E::invalid_value(de::Unexpected::Bool(true), &self))
        } else {
            Ok(Timestamp::zero())
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Timestamp::from_secs(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {v}")))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        Timestamp::from_secs_f64(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
