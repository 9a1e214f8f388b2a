// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{Address, Amount, Color, Result, SendFundsError, SendFundsOptions};

/// A single optional parameter of a send funds call.
///
/// Options are inert values until applied, in order, to the options record
/// being built (see [`crate::build_options`]). Invalid arguments are caught when
/// the option is constructed and kept in [`SendFundsOption::Failed`], so they
/// surface at the position the caller supplied them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendFundsOption {
    /// Send `amount` of `color` to `address`, on top of anything already sent there.
    Destination {
        address: Address,
        color: Color,
        amount: Amount,
    },
    /// Send any change to `address`, replacing a previously given remainder address.
    Remainder(Address),
    /// An option that always fails with the given error.
    Failed(SendFundsError),
}

impl SendFundsOption {
    /// Funds to be moved to `address`.
    ///
    /// `colors` may hold at most one color, the native color is used when it is empty.
    /// Invalid arguments yield an option that fails when applied.
    pub fn destination(address: Address, amount: impl Into<Amount>, colors: &[Color]) -> Self {
        Self::try_destination(address, amount, colors).into()
    }

    /// Like [`SendFundsOption::destination`], but invalid arguments are returned right away.
    pub fn try_destination(
        address: Address,
        amount: impl Into<Amount>,
        colors: &[Color],
    ) -> Result<Self> {
        let color = match colors {
            [] => Color::native(),
            [color] => *color,
            _ => return Err(SendFundsError::MultipleColors(colors.len())),
        };

        let amount = amount.into();
        if amount.is_zero() {
            return Err(SendFundsError::ZeroAmount);
        }

        Ok(Self::Destination {
            address,
            color,
            amount,
        })
    }

    /// The address that receives the change of the transfer. Last one given wins.
    pub fn remainder(address: Address) -> Self {
        Self::Remainder(address)
    }

    /// Wraps an error into an option, so it travels through the same pipeline.
    pub fn from_error(err: SendFundsError) -> Self {
        Self::Failed(err)
    }

    /// Applies this option to `options`. A failing option leaves `options` untouched.
    pub(crate) fn apply(self, options: &mut SendFundsOptions) -> Result<()> {
        match self {
            Self::Destination {
                address,
                color,
                amount,
            } => options.destinations.add(address, color, amount),
            Self::Remainder(address) => {
                options.remainder_address = Some(address);
                Ok(())
            }
            Self::Failed(err) => Err(err),
        }
    }
}

impl From<SendFundsError> for SendFundsOption {
    fn from(err: SendFundsError) -> Self {
        Self::from_error(err)
    }
}

impl From<Result<SendFundsOption>> for SendFundsOption {
    fn from(result: Result<SendFundsOption>) -> Self {
        result.unwrap_or_else(Self::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_defaults_to_native_color() {
        let mut rng = crate::rng::from_seed([0u8; 32]);
        let address = Address::random(&mut rng);

        assert_eq!(
            SendFundsOption::destination(address, 100, &[]),
            SendFundsOption::Destination {
                address,
                color: Color::native(),
                amount: Amount::from(100),
            }
        );
    }

    #[test]
    fn destination_keeps_the_single_color_given() {
        let mut rng = crate::rng::from_seed([0u8; 32]);
        let address = Address::random(&mut rng);
        let color = Color::from_content(b"token");

        assert!(matches!(
            SendFundsOption::destination(address, 1, &[color]),
            SendFundsOption::Destination { color: c, .. } if c == color
        ));
    }

    #[test]
    fn invalid_destination_arguments_are_captured_eagerly() {
        let mut rng = crate::rng::from_seed([0u8; 32]);
        let address = Address::random(&mut rng);
        let colors = [Color::from_content(b"a"), Color::from_content(b"b")];

        assert_eq!(
            SendFundsOption::destination(address, 0, &[]),
            SendFundsOption::Failed(SendFundsError::ZeroAmount)
        );
        assert_eq!(
            SendFundsOption::try_destination(address, 10, &colors),
            Err(SendFundsError::MultipleColors(2))
        );
        // the color count is checked before the amount
        assert_eq!(
            SendFundsOption::destination(address, 0, &colors),
            SendFundsOption::Failed(SendFundsError::MultipleColors(2))
        );
    }

    #[test]
    fn failed_option_does_not_touch_the_record() {
        let mut rng = crate::rng::from_seed([0u8; 32]);
        let mut options = SendFundsOptions::empty();
        SendFundsOption::remainder(Address::random(&mut rng))
            .apply(&mut options)
            .expect("remainder never fails");
        let before = options.clone();

        let result = SendFundsOption::from_error(SendFundsError::NoDestinations).apply(&mut options);

        assert_eq!(result, Err(SendFundsError::NoDestinations));
        assert_eq!(options, before);
    }

    #[test]
    fn remainder_overwrites_previous_value() {
        let mut rng = crate::rng::from_seed([0u8; 32]);
        let (first, second) = (Address::random(&mut rng), Address::random(&mut rng));
        let mut options = SendFundsOptions::empty();

        for address in [first, second, second] {
            assert_eq!(SendFundsOption::remainder(address).apply(&mut options), Ok(()));
        }
        assert_eq!(options.remainder_address(), Some(&second));
    }
}
