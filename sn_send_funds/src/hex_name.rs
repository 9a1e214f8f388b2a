// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Hex encoding of the `XorName`s behind `Address` and `Color`.

use crate::{Result, SendFundsError};

use serde::{Deserialize, Deserializer, Serializer};
use xor_name::XorName;

pub(crate) fn xorname_to_hex(name: &XorName) -> String {
    hex::encode(name)
}

pub(crate) fn xorname_from_hex(hex: &str) -> Result<XorName> {
    let bytes =
        hex::decode(hex).map_err(|e| SendFundsError::HexDeserializationFailed(e.to_string()))?;
    let bytes: [u8; 32] = bytes.try_into().map_err(|_| {
        SendFundsError::HexDeserializationFailed("wrong string size".to_string())
    })?;
    Ok(XorName(bytes))
}

/// Serializes as a hex string, which also makes the name usable as a map key
/// in human readable formats.
pub(crate) fn serialize<S>(
    name: &XorName,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&xorname_to_hex(name))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> std::result::Result<XorName, D::Error>
where
    D: Deserializer<'de>,
{
    let hex = String::deserialize(deserializer)?;
    xorname_from_hex(&hex)
        .map_err(|e| serde::de::Error::custom(format!("Failed to deserialize from hex: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorname_hex_conversions() -> Result<()> {
        let name = XorName::from_content(b"name");
        let hex = xorname_to_hex(&name);
        assert_eq!(hex.len(), 64);
        assert_eq!(xorname_from_hex(&hex)?, name);
        Ok(())
    }

    #[test]
    fn xorname_from_hex_rejects_malformed_input() {
        assert!(matches!(
            xorname_from_hex("not hex"),
            Err(SendFundsError::HexDeserializationFailed(_))
        ));
        assert_eq!(
            xorname_from_hex("abcd"),
            Err(SendFundsError::HexDeserializationFailed(
                "wrong string size".to_string()
            ))
        );
    }
}
