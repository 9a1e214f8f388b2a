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

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use xor_name::XorName;

/// The address funds are sent to.
/// It is opaque to the send funds options: no check is made that an address
/// is well formed or owned by anyone, only that it can be used as a key.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(#[serde(with = "crate::hex_name")] XorName);

impl Address {
    /// Construct an `Address` given an `XorName`.
    pub fn new(name: XorName) -> Self {
        Self(name)
    }

    /// Construct an `Address` from arbitrary content, e.g. the bytes of a public key.
    pub fn from_content(content: &[u8]) -> Self {
        Self::new(XorName::from_content(content))
    }

    pub fn random(rng: &mut impl RngCore) -> Self {
        Self::new(XorName::random(rng))
    }

    pub fn xorname(&self) -> &XorName {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        xorname_to_hex(&self.0)
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        xorname_from_hex(hex).map(Self::new)
    }
}

impl FromStr for Address {
    type Err = SendFundsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", &self.to_hex()[0..6])
    }
}
