pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, LoginOutcome};
pub use error::{ClientError, Result as CliClientResult};
