use std::error::Error;
use std::path::Path;

/// One row of the listings CSV; columns not named here are ignored.
#[derive(Debug, serde::Deserialize)]
pub struct Listing {
    pub operation: String,
    pub property_type: String,
    pub place_name: String,
    pub surface_covered_in_m2: Option<f64>,
    pub price_aprox_usd: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub surface: f64,
    pub price: f64,
}

#[derive(Clone, Debug)]
pub struct ListingFilter {
    pub operation: String,
    pub property_type: String,
    pub place_name: String,
}

impl ListingFilter {
    fn matches(&self, listing: &Listing) -> bool {
        listing.operation == self.operation
            && listing.property_type == self.property_type
            && listing.place_name == self.place_name
    }
}

pub fn load_listings(path: impl AsRef<Path>) -> Result<Vec<Listing>, Box<dyn Error>> {
    let listings = csv::Reader::from_path(path)?
        .deserialize()
        .collect::<Result<Vec<Listing>, _>>()?;

    Ok(listings)
}

/// Keeps rows matching the filter that carry a usable positive surface and price.
pub fn select_observations(listings: &[Listing], filter: &ListingFilter) -> Vec<Observation> {
    listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .filter_map(|listing| {
            let surface = listing.surface_covered_in_m2?;
            let price = listing.price_aprox_usd?;

            (surface.is_finite() && price.is_finite() && surface > 0. && price > 0.)
                .then_some(Observation { surface, price })
        })
        .collect()
}
