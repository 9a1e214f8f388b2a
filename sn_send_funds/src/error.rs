// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{Address, Color};
use thiserror::Error;

/// Specialisation of `std::Result`.
pub type Result<T, E = SendFundsError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
/// Send funds option errors
pub enum SendFundsError {
    #[error("Providing more than one output color for the destination of funds is forbidden, got {0}.")]
    MultipleColors(usize),
    #[error("The amount provided in the destinations needs to be larger than 0.")]
    ZeroAmount,
    #[error("The total amount for {color} at {address:?} would exceed the maximum value (u64::MAX).")]
    AmountOverflow { address: Address, color: Color },
    #[error("You need to provide at least one destination for a valid transfer to be issued.")]
    NoDestinations,
    #[error("Destination {0:?} has no amount of any color.")]
    EmptyDestination(Address),
    #[error("Could not deserialize specified hex string: {0}")]
    HexDeserializationFailed(String),
    #[error("Failed to parse amount: {0}")]
    FailedToParseAmount(String),
}
