use std::sync::Arc;
use pricebook_core::repository::{ProductRepository, ProfileRepository};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}
