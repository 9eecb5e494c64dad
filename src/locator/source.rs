use std::{collections::HashSet, fs::File, io::Read, path::Path};

use tracing::info;

use crate::{
    locator::{Error, Supplier, SupplierKind, SupplierRecord},
    shared::Coordinate,
};

/// The supplier list published on the site.
pub fn builtin_suppliers() -> Vec<Supplier> {
    [
        (
            "s1",
            "Shrewsbury Roofing Supplies",
            SupplierKind::Stockist,
            "Shrewsbury",
            "SY1",
            "01952 000000",
            (52.7073, -2.7553),
        ),
        (
            "s2",
            "Manchester Flat Roofing Centre",
            SupplierKind::Stockist,
            "Manchester",
            "M1",
            "0161 000000",
            (53.4808, -2.2426),
        ),
        (
            "s3",
            "Birmingham Roofing & Waterproofing",
            SupplierKind::ApprovedInstaller,
            "Birmingham",
            "B1",
            "0121 000000",
            (52.4862, -1.8904),
        ),
        (
            "s4",
            "Leeds Roofing Trade Counter",
            SupplierKind::Stockist,
            "Leeds",
            "LS1",
            "0113 000000",
            (53.8008, -1.5491),
        ),
        (
            "s5",
            "London Roofing Distribution",
            SupplierKind::TrainingCentre,
            "London",
            "E1",
            "020 0000 0000",
            (51.5072, -0.1276),
        ),
    ]
    .into_iter()
    .map(|(id, name, kind, city, postcode, phone, point)| Supplier {
        id: id.into(),
        name: name.into(),
        kind,
        city: city.into(),
        postcode: postcode.into(),
        phone: phone.into(),
        coordinate: Coordinate::from(point),
    })
    .collect()
}

/// Reads suppliers from CSV with the header `id,name,kind,city,postcode,phone,lat,lon`.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<Supplier>, Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut seen: HashSet<String> = HashSet::new();
    let mut suppliers = Vec::new();
    for record in reader.deserialize::<SupplierRecord>() {
        let record = record?;
        if !seen.insert(record.id.clone()) {
            return Err(Error::DuplicateId(record.id));
        }
        suppliers.push(Supplier::try_from(record)?);
    }
    Ok(suppliers)
}

pub fn load_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Supplier>, Error> {
    let file = File::open(path.as_ref())?;
    let suppliers = load_csv(file)?;
    info!(
        "Loaded {} suppliers from {}",
        suppliers.len(),
        path.as_ref().display()
    );
    Ok(suppliers)
}

#[test]
fn builtin_suppliers_are_valid() {
    let suppliers = builtin_suppliers();
    assert_eq!(suppliers.len(), 5);
    assert!(suppliers.iter().all(|s| s.coordinate.is_valid()));
}
