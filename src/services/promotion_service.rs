use crate::errors::ApiError;
use crate::state::promotions::PromotionStore;

/// Look up `id` and return its JSON body.
///
/// An empty id is answered with `NotFound` without touching the store.
pub fn lookup_json(store: &PromotionStore, id: &str) -> Result<Vec<u8>, ApiError> {
    if id.is_empty() {
        return Err(ApiError::NotFound);
    }

    let promotion = store.get(id).ok_or(ApiError::NotFound)?;

    Ok(serde_json::to_vec(&promotion)?)
}
