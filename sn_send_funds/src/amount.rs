// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{Result, SendFundsError};

use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// A number of tokens of a single color, in the smallest unit of that color.
pub struct Amount(u64);

impl Amount {
    /// Type safe representation of a zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Computes `self + rhs`, returning `None` if overflow occurred.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = SendFundsError;

    fn from_str(value_str: &str) -> Result<Self> {
        value_str
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|err| SendFundsError::FailedToParseAmount(format!("{value_str:?}: {err}")))
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() -> Result<()> {
        assert_eq!(Amount(0), Amount::from_str("0")?);
        assert_eq!(Amount(120), Amount::from_str("120")?);
        assert_eq!(Amount(120), Amount::from_str(" 120 ")?);
        assert_eq!(Amount(u64::MAX), Amount::from_str("18446744073709551615")?);

        assert!(matches!(
            Amount::from_str("1.5"),
            Err(SendFundsError::FailedToParseAmount(_))
        ));
        assert!(matches!(
            Amount::from_str("-1"),
            Err(SendFundsError::FailedToParseAmount(_))
        ));
        assert!(matches!(
            Amount::from_str("18446744073709551616"),
            Err(SendFundsError::FailedToParseAmount(_))
        ));
        Ok(())
    }

    #[test]
    fn checked_add() {
        assert_eq!(Some(Amount(3)), Amount(1).checked_add(Amount(2)));
        assert_eq!(None, Amount(u64::MAX).checked_add(Amount(1)));
        assert!(Amount::zero().is_zero());
        assert!(!Amount(1).is_zero());
    }
}
