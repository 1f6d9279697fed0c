pub mod app_config;
pub mod product_repo;
pub mod profile_repo;

pub use product_repo::InMemoryProductRepository;
pub use profile_repo::InMemoryProfileRepository;
