// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{
    hex_name::{xorname_from_hex, xorname_to_hex},
    Result, SendFundsError,
};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use xor_name::XorName;

/// Environment variable overriding the native color, for test networks only.
pub(crate) const NATIVE_COLOR_ENV: &str = "SN_NATIVE_COLOR";

lazy_static! {
    /// The color of the network's own token, used by destinations that name no color.
    /// The hard coded all-zero value is the one used in production.
    /// The env set value is only used for testing purpose.
    pub static ref NATIVE_COLOR: Color =
        match native_color_from(std::env::var(NATIVE_COLOR_ENV).ok()) {
            Ok(color) => color,
            Err(err) => panic!("Failed to parse native color from {NATIVE_COLOR_ENV}: {err:?}"),
        };
}

/// The native color given the value of `SN_NATIVE_COLOR`, if set.
fn native_color_from(var: Option<String>) -> Result<Color> {
    match var {
        Some(hex) => Color::from_hex(hex.trim()),
        None => Ok(Color::new(XorName([0u8; 32]))),
    }
}

/// The asset type of an amount of tokens.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(#[serde(with = "crate::hex_name")] XorName);

impl Color {
    pub const fn new(name: XorName) -> Self {
        Self(name)
    }

    /// The color of the network's own token.
    pub fn native() -> Self {
        *NATIVE_COLOR
    }

    pub fn is_native(&self) -> bool {
        *self == *NATIVE_COLOR
    }

    /// Colors minted by a transaction are named after the content that minted them.
    pub fn from_content(content: &[u8]) -> Self {
        Self::new(XorName::from_content(content))
    }

    pub fn to_hex(&self) -> String {
        xorname_to_hex(&self.0)
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        xorname_from_hex(hex).map(Self::new)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::native()
    }
}

impl FromStr for Color {
    type Err = SendFundsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            write!(f, "native")
        } else {
            write!(f, "{}", self.to_hex())
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            write!(f, "Color(native)")
        } else {
            write!(f, "Color({})", &self.to_hex()[0..6])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_native() {
        assert!(Color::default().is_native());
        assert_eq!(Color::default(), Color::native());
        assert_eq!(format!("{}", Color::native()), "native");
    }

    #[test]
    fn minted_colors_are_not_native() -> eyre::Result<()> {
        let color = Color::from_content(b"minting tx");
        assert!(!color.is_native());
        assert_eq!(color, Color::from_hex(&color.to_hex())?);
        assert_eq!(format!("{color}"), color.to_hex());
        Ok(())
    }

    #[test]
    fn native_color_is_all_zero_without_override() -> Result<()> {
        assert_eq!(native_color_from(None)?, Color::new(XorName([0u8; 32])));
        Ok(())
    }

    #[test]
    fn native_color_can_be_overridden_with_hex() -> Result<()> {
        let color = Color::from_content(b"test network token");

        assert_eq!(native_color_from(Some(color.to_hex()))?, color);
        assert_eq!(native_color_from(Some(format!("{}\n", color.to_hex())))?, color);
        Ok(())
    }

    #[test]
    fn malformed_native_color_override_is_rejected() {
        assert!(matches!(
            native_color_from(Some("not a color".to_string())),
            Err(SendFundsError::HexDeserializationFailed(_))
        ));
        assert_eq!(
            native_color_from(Some("abcd".to_string())),
            Err(SendFundsError::HexDeserializationFailed(
                "wrong string size".to_string()
            ))
        );
    }
}
