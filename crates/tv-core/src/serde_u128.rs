// SPDX-License-Identifier: AGPL-3.0-only
//! u128 ↔ String serialization.
//!
//! JSON consumers and the TOML crate don't handle 128-bit integers, so
//! amounts travel as decimal strings. Deserialization also accepts plain
//! integers so hand-written config files can use `numerator = 12`.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

pub fn serialize<S: Serializer>(val: &u128, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&val.to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u128, D::Error> {
    struct U128Visitor;

    impl<'de> Visitor<'de> for U128Visitor {
        type Value = u128;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a u128 as a string or integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
            Ok(v as u128)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
            if v >= 0 {
                Ok(v as u128)
            } else {
                Err(E::custom("negative value for u128"))
            }
        }
    }

    d.deserialize_any(U128Visitor)
}
