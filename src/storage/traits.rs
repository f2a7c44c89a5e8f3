use crate::domain::{Brand, Founder};
use crate::error::Result;

/// Storage for the two catalog collections. Listing is always ascending by
/// `sort_order`, ties broken by id (insertion order). Delete/clear methods
/// return the removed records so callers can release their media assets.
pub trait CatalogStore: Send + Sync {
    // Brand operations
    fn create_brand(&self, brand: &mut Brand) -> Result<()>;
    fn get_brand_by_id(&self, id: i64) -> Result<Option<Brand>>;
    fn get_all_brands(&self) -> Result<Vec<Brand>>;
    fn delete_brand(&self, id: i64) -> Result<Option<Brand>>;
    fn clear_brands(&self) -> Result<Vec<Brand>>;

    // Founder operations
    fn create_founder(&self, founder: &mut Founder) -> Result<()>;
    fn get_founder_by_id(&self, id: i64) -> Result<Option<Founder>>;
    fn get_all_founders(&self) -> Result<Vec<Founder>>;
    fn delete_founder(&self, id: i64) -> Result<Option<Founder>>;
    fn clear_founders(&self) -> Result<Vec<Founder>>;
}
