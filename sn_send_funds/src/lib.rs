// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Options for a send funds call: where the funds go, and where the change goes.
//!
//! A caller describes a transfer with a sequence of [`SendFundsOption`]s, and
//! [`build_options`] folds them into a validated [`SendFundsOptions`] record
//! that the transaction builder consumes.

#[macro_use]
extern crate tracing;

mod address;
mod amount;
mod builder;
mod color;
mod destinations;
mod error;
mod hex_name;
mod option;
mod send_funds_options;

/// Types used in the public API
pub use crate::{
    address::Address,
    amount::Amount,
    builder::SendFundsOptionsBuilder,
    color::{Color, NATIVE_COLOR},
    destinations::Destinations,
    error::{Result, SendFundsError},
    option::SendFundsOption,
    send_funds_options::{build_options, SendFundsOptions},
};

// re-export crates used in our public API
pub use rand;

/// This is a helper module to make it a bit easier
/// and regular for API callers to instantiate
/// an Rng when calling sn_send_funds methods that require
/// them.
pub mod rng {
    use crate::rand::{
        rngs::{StdRng, ThreadRng},
        SeedableRng,
    };

    pub fn thread_rng() -> ThreadRng {
        crate::rand::thread_rng()
    }

    pub fn from_seed(seed: <StdRng as SeedableRng>::Seed) -> StdRng {
        StdRng::from_seed(seed)
    }
}
