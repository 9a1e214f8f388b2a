// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{Address, Amount, Color, Result, SendFundsError};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

type DestinationTable = BTreeMap<Address, BTreeMap<Color, Amount>>;

/// The amounts to send, keyed by recipient address and then by color.
///
/// Amounts for the same address and color are merged by addition, never
/// replaced. Every stored amount is larger than zero. Iteration happens to be
/// ordered by key, but nothing downstream relies on that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DestinationTable", into = "DestinationTable")]
pub struct Destinations(BTreeMap<Address, BTreeMap<Color, Amount>>);

impl Destinations {
    /// Adds `amount` of `color` to what is already owed to `address`.
    ///
    /// Zero amounts are rejected before anything is inserted, so an address
    /// never ends up with an empty or zero entry. On overflow the table is left
    /// as it was.
    pub(crate) fn add(&mut self, address: Address, color: Color, amount: Amount) -> Result<()> {
        if amount.is_zero() {
            return Err(SendFundsError::ZeroAmount);
        }

        let current = self.amount(&address, &color).unwrap_or_default();
        let total = current
            .checked_add(amount)
            .ok_or(SendFundsError::AmountOverflow { address, color })?;

        let _ = self.0.entry(address).or_default().insert(color, total);
        Ok(())
    }

    /// The cumulative amount of `color` sent to `address`, if any.
    pub fn amount(&self, address: &Address, color: &Color) -> Option<Amount> {
        self.0.get(address)?.get(color).copied()
    }

    /// All colors and amounts sent to `address`.
    pub fn colors_for(&self, address: &Address) -> Option<&BTreeMap<Color, Amount>> {
        self.0.get(address)
    }

    /// Number of distinct recipient addresses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Address, &BTreeMap<Color, Amount>)> {
        self.0.iter()
    }

    /// Every `(address, color, amount)` bucket, one per output to create.
    pub fn recipients(&self) -> impl Iterator<Item = (Address, Color, Amount)> + '_ {
        self.0.iter().flat_map(|(address, colors)| {
            colors
                .iter()
                .map(move |(color, amount)| (*address, *color, *amount))
        })
    }

    /// The total amount required per color across all addresses.
    pub fn required_funds(&self) -> Result<BTreeMap<Color, Amount>> {
        let mut required: BTreeMap<Color, Amount> = BTreeMap::new();
        for (address, color, amount) in self.recipients() {
            let total = required.entry(color).or_default();
            *total = total
                .checked_add(amount)
                .ok_or(SendFundsError::AmountOverflow { address, color })?;
        }
        Ok(required)
    }
}

impl From<Destinations> for DestinationTable {
    fn from(destinations: Destinations) -> Self {
        destinations.0
    }
}

/// Rebuilds a table, e.g. a deserialized one, rejecting zero amounts and
/// addresses without any color.
impl TryFrom<DestinationTable> for Destinations {
    type Error = SendFundsError;

    fn try_from(table: DestinationTable) -> Result<Self> {
        let mut destinations = Self::default();
        for (address, colors) in table {
            if colors.is_empty() {
                return Err(SendFundsError::EmptyDestination(address));
            }
            for (color, amount) in colors {
                destinations.add(address, color, amount)?;
            }
        }
        Ok(destinations)
    }
}
