use rayon::prelude::*;
use std::{io, sync::Arc, time::Duration};
use thiserror::Error;
use tracing::{debug, info};

mod slot;
mod source;
mod supplier;
pub use slot::*;
pub use source::*;
pub use supplier::*;

use crate::{
    geocode::{self, Geocoder},
    position::{self, PositionSource},
    shared::{self, Coordinate, Identifiable, Location},
};

pub const DEFAULT_PAGE_SIZE: usize = 2;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Duplicate supplier id: {0}")]
    DuplicateId(String),
    #[error("Supplier {0} has a coordinate outside the valid range")]
    InvalidCoordinate(String),
    #[error(transparent)]
    Geocode(#[from] geocode::Error),
    #[error(transparent)]
    Position(#[from] position::Error),
    #[error("A newer search started before this one completed")]
    Superseded,
}

impl Error {
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Geocode(err) => err.user_message(),
            Error::Position(err) => err.user_message(),
            Error::Superseded => "Showing results for your latest search.",
            Error::Io(_) | Error::Csv(_) | Error::DuplicateId(_) | Error::InvalidCoordinate(_) => {
                "The supplier list is unavailable."
            }
        }
    }
}

/// Scores every supplier by great-circle distance from `point` and sorts
/// them nearest first. Suppliers at equal distance keep their input order.
pub fn rank(point: &Coordinate, suppliers: &[Supplier]) -> Vec<ScoredSupplier> {
    let mut scored: Vec<ScoredSupplier> = suppliers
        .par_iter()
        .map(|supplier| ScoredSupplier {
            distance: point.distance(&supplier.coordinate),
            supplier: supplier.clone(),
        })
        .collect();
    // par_sort_by is stable
    scored.par_sort_by(|a, b| a.distance.total_cmp(&b.distance));
    debug!("Ranked {} suppliers from {point}", scored.len());
    scored
}

pub fn paginate(scored: &[ScoredSupplier], page_size: usize, page: usize) -> &[ScoredSupplier] {
    shared::paginate(scored, page_size, page)
}

/// The outcome of one completed search, cheap to clone.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub origin: Location,
    pub suppliers: Arc<[ScoredSupplier]>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    pub fn page(&self, page_size: usize, page: usize) -> &[ScoredSupplier] {
        paginate(&self.suppliers, page_size, page)
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        shared::page_count(self.len(), page_size)
    }

    pub fn showing(&self, page_size: usize, page: usize) -> String {
        shared::showing(self.len(), page_size, page)
    }
}

#[derive(Debug, Clone)]
pub struct Locator {
    suppliers: Arc<[Supplier]>,
    page_size: usize,
    results: Arc<ResultSlot>,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            suppliers: builtin_suppliers().into(),
            page_size: DEFAULT_PAGE_SIZE,
            results: Default::default(),
        }
    }
}

impl Locator {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_suppliers(mut self, suppliers: Vec<Supplier>) -> Self {
        self.suppliers = suppliers.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// A locator over the same suppliers with its own result slot, so its
    /// searches never supersede or get superseded by searches on `self`.
    pub fn fork(&self) -> Self {
        Self {
            suppliers: Arc::clone(&self.suppliers),
            page_size: self.page_size,
            results: Default::default(),
        }
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn supplier_by_id(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.id() == id)
    }

    pub fn rank(&self, point: &Coordinate) -> Vec<ScoredSupplier> {
        rank(point, &self.suppliers)
    }

    /// Geocodes `query` and ranks the suppliers around it.
    /// On failure the previously committed results stay in place.
    /// A blank query is rejected before it can supersede a search in flight.
    pub async fn search<G>(&self, geocoder: &G, query: &str) -> Result<SearchResults, Error>
    where
        G: Geocoder + Sync,
    {
        if query.trim().is_empty() {
            return Err(geocode::Error::EmptyQuery.into());
        }
        let ticket = self.results.begin();
        let origin = geocoder.resolve(query).await?;
        self.complete(ticket, origin)
    }

    /// Ranks the suppliers around the position reported by `source`.
    pub async fn search_near<P>(
        &self,
        source: &P,
        timeout: Duration,
    ) -> Result<SearchResults, Error>
    where
        P: PositionSource + Sync,
    {
        let ticket = self.results.begin();
        let origin = position::resolve_current_position(source, timeout).await?;
        self.complete(ticket, origin)
    }

    /// The result set of the latest search that completed while still current.
    pub fn results(&self) -> Option<SearchResults> {
        self.results.current()
    }

    /// Ranks the suppliers around a known origin without touching the result slot.
    pub fn around(&self, origin: Location) -> SearchResults {
        SearchResults {
            suppliers: self.rank(&origin.coordinate).into(),
            origin,
        }
    }

    fn complete(&self, ticket: Ticket, origin: Location) -> Result<SearchResults, Error> {
        let results = self.around(origin);
        if !self.results.commit(ticket, results.clone()) {
            debug!(label = %results.origin.label, "Dropping results of a superseded search");
            return Err(Error::Superseded);
        }
        info!(
            label = %results.origin.label,
            count = results.len(),
            "Committed supplier search"
        );
        Ok(results)
    }
}
