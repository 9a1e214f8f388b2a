// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{Address, Amount, Color, Result, SendFundsError, SendFundsOption, SendFundsOptions};

/// A builder to create [`SendFundsOptions`] from chained calls.
///
/// Each call is applied right away. The first failing call is remembered and
/// every call after it is ignored, so `build` reports the earliest problem.
#[derive(Debug)]
pub struct SendFundsOptionsBuilder {
    options: SendFundsOptions,
    error: Option<SendFundsError>,
}

impl Default for SendFundsOptionsBuilder {
    fn default() -> Self {
        Self {
            options: SendFundsOptions::empty(),
            error: None,
        }
    }
}

impl SendFundsOptionsBuilder {
    /// Send `amount` of the native color to `address`.
    pub fn destination(self, address: Address, amount: impl Into<Amount>) -> Self {
        self.option(SendFundsOption::destination(address, amount, &[]))
    }

    /// Send `amount` of `color` to `address`.
    pub fn colored_destination(
        self,
        address: Address,
        amount: impl Into<Amount>,
        color: Color,
    ) -> Self {
        self.option(SendFundsOption::destination(address, amount, &[color]))
    }

    /// Send the change to `address`.
    pub fn remainder(self, address: Address) -> Self {
        self.option(SendFundsOption::remainder(address))
    }

    /// Apply any option.
    pub fn option(mut self, option: impl Into<SendFundsOption>) -> Self {
        if self.error.is_some() {
            return self;
        }

        let option = option.into();
        trace!("Builder applying send funds option: {option:?}");
        if let Err(err) = option.apply(&mut self.options) {
            debug!("Send funds option rejected by builder: {err}");
            self.error = Some(err);
        }
        self
    }

    /// Apply a list of options, in order.
    pub fn options<O>(mut self, options: impl IntoIterator<Item = O>) -> Self
    where
        O: Into<SendFundsOption>,
    {
        for option in options.into_iter() {
            self = self.option(option);
        }
        self
    }

    /// Returns the first error met, or the validated options.
    pub fn build(self) -> Result<SendFundsOptions> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.options.validate()?;
        Ok(self.options)
    }
}
