use crate::domain::model::District;

/// Read-only district reference data supplied by the host (static file,
/// backend call, ...). Only id lookup is required.
pub trait DistrictCatalog {
    fn district(&self, id: &str) -> Option<&District>;

    fn land_price_per_area(&self, id: &str) -> Option<f64> {
        self.district(id).map(|district| district.land_price_per_area)
    }
}
