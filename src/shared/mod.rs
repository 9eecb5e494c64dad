pub mod geo;
pub mod location;
pub mod page;

pub use geo::*;
pub use location::*;
pub use page::*;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}
