pub mod enquiry;
pub mod estimator;
pub mod geocode;
pub mod locator;
pub mod position;
pub mod shared;

pub mod prelude {
    pub use crate::enquiry::{
        self, ContactEnquiry, Form, Status, StubSubmitter, Submitter, SupplierApplication,
    };
    pub use crate::estimator::{Estimate, Estimator, RoofInput, Season};
    pub use crate::geocode::{self, Geocoder, NominatimGeocoder};
    pub use crate::locator::{self, Locator, ScoredSupplier, SearchResults, Supplier};
    pub use crate::position::{self, PositionSource, ReportedPosition};
    pub use crate::shared::{Coordinate, Distance, Location};
}
