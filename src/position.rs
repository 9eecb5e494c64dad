use crate::shared::{Coordinate, Location};
use std::{future::Future, time::Duration};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);
pub const CURRENT_POSITION_LABEL: &str = "Your location";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Position capability is not available")]
    Unsupported,
    #[error("Position access was denied")]
    PermissionDenied,
    #[error("Timed out waiting for a position")]
    Timeout,
}

impl Error {
    /// Every variant shares one message pointing at manual entry.
    pub fn user_message(&self) -> &'static str {
        "We could not get your location. Please enter a postcode instead."
    }
}

/// The host's "get current position" capability.
pub trait PositionSource {
    fn current_position(&self) -> impl Future<Output = Result<Coordinate, Error>> + Send;
}

/// A position already reported by the client, or the reason it could not be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportedPosition {
    Granted(Coordinate),
    Denied,
    Unsupported,
}

impl PositionSource for ReportedPosition {
    async fn current_position(&self) -> Result<Coordinate, Error> {
        match self {
            ReportedPosition::Granted(coordinate) if coordinate.is_valid() => Ok(*coordinate),
            ReportedPosition::Granted(_) | ReportedPosition::Unsupported => Err(Error::Unsupported),
            ReportedPosition::Denied => Err(Error::PermissionDenied),
        }
    }
}

/// Asks `source` for a position, giving up with [`Error::Timeout`] after `timeout`.
pub async fn resolve_current_position<P>(source: &P, timeout: Duration) -> Result<Location, Error>
where
    P: PositionSource + Sync,
{
    match tokio::time::timeout(timeout, source.current_position()).await {
        Ok(Ok(coordinate)) => Ok(Location::new(coordinate, CURRENT_POSITION_LABEL)),
        Ok(Err(err)) => {
            warn!("Position unavailable: {err}");
            Err(err)
        }
        Err(_) => {
            warn!(?timeout, "Position request timed out");
            Err(Error::Timeout)
        }
    }
}
