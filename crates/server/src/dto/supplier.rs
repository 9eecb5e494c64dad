use grflex::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SupplierDto {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub city: String,
    pub postcode: String,
    pub phone: String,
    pub dial: String,
    pub coordinate: Coordinate,
    pub distance_miles: Distance,
    pub directions_url: String,
}

impl SupplierDto {
    pub fn from(scored: &ScoredSupplier) -> Self {
        let supplier = &scored.supplier;
        Self {
            id: supplier.id.to_string(),
            name: supplier.name.to_string(),
            kind: supplier.kind.to_string(),
            city: supplier.city.to_string(),
            postcode: supplier.postcode.to_string(),
            phone: supplier.phone.to_string(),
            dial: supplier.dial_number(),
            coordinate: supplier.coordinate,
            distance_miles: scored.distance,
            directions_url: supplier.directions_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OriginDto {
    pub label: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchDto {
    pub origin: OriginDto,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub showing: String,
    pub suppliers: Vec<SupplierDto>,
}

impl SearchDto {
    pub fn from(results: &SearchResults, page_size: usize, page: usize) -> Self {
        Self {
            origin: OriginDto {
                label: results.origin.label.to_string(),
                coordinate: results.origin.coordinate,
            },
            total: results.len(),
            page,
            page_count: results.page_count(page_size),
            showing: results.showing(page_size, page),
            suppliers: results
                .page(page_size, page)
                .iter()
                .map(SupplierDto::from)
                .collect(),
        }
    }
}

/// Warning banner body for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct NoticeDto {
    pub ok: bool,
    pub message: String,
}

impl NoticeDto {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}
