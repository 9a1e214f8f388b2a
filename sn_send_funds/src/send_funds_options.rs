// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{
    Address, Amount, Color, Destinations, Result, SendFundsError, SendFundsOption,
    SendFundsOptionsBuilder,
};

use serde::Serialize;
use std::collections::BTreeMap;

/// The validated parameters of a send funds call.
///
/// Only obtainable through [`build_options`] or [`SendFundsOptionsBuilder::build`],
/// so it always holds at least one destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendFundsOptions {
    pub(crate) destinations: Destinations,
    pub(crate) remainder_address: Option<Address>,
}

/// Builds the options of a send funds call.
///
/// The options are applied in the order given and the first one to fail aborts
/// the build with its error. Once all are applied, the result must contain at
/// least one destination.
pub fn build_options<I, O>(options: I) -> Result<SendFundsOptions>
where
    I: IntoIterator<Item = O>,
    O: Into<SendFundsOption>,
{
    let mut result = SendFundsOptions::empty();

    for (index, option) in options.into_iter().enumerate() {
        let option = option.into();
        trace!("Applying send funds option #{index}: {option:?}");
        if let Err(err) = option.apply(&mut result) {
            debug!("Send funds option #{index} rejected: {err}");
            return Err(err);
        }
    }

    result.validate()?;
    Ok(result)
}

impl SendFundsOptions {
    pub(crate) fn empty() -> Self {
        Self {
            destinations: Destinations::default(),
            remainder_address: None,
        }
    }

    pub fn builder() -> SendFundsOptionsBuilder {
        SendFundsOptionsBuilder::default()
    }

    /// Checks the invariants spanning all the applied options.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.destinations.is_empty() {
            debug!("Send funds options have no destination");
            return Err(SendFundsError::NoDestinations);
        }
        trace!(
            "Send funds options valid: {} destination address(es), remainder {:?}",
            self.destinations.len(),
            self.remainder_address
        );
        Ok(())
    }

    pub fn destinations(&self) -> &Destinations {
        &self.destinations
    }

    /// The address that receives the change, if the caller named one.
    pub fn remainder_address(&self) -> Option<&Address> {
        self.remainder_address.as_ref()
    }

    /// The address that receives the change, falling back to `fallback`
    /// (usually the wallet's own receive address) when none was named.
    pub fn remainder_or(&self, fallback: Address) -> Address {
        self.remainder_address.unwrap_or(fallback)
    }

    /// The total amount per color the transfer inputs need to cover.
    pub fn required_funds(&self) -> Result<BTreeMap<Color, Amount>> {
        self.destinations.required_funds()
    }

    /// Every `(address, color, amount)` the transfer has to create an output for.
    pub fn recipients(&self) -> impl Iterator<Item = (Address, Color, Amount)> + '_ {
        self.destinations.recipients()
    }

    pub fn into_parts(self) -> (Destinations, Option<Address>) {
        (self.destinations, self.remainder_address)
    }
}
