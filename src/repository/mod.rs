//! Repository layer for database operations

pub mod admins;
pub mod assets;
pub mod assignments;
pub mod categories;
pub mod vendors;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub assets: assets::AssetsRepository,
    pub assignments: assignments::AssignmentsRepository,
    pub vendors: vendors::VendorsRepository,
    pub categories: categories::CategoriesRepository,
    pub admins: admins::AdminsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            assets: assets::AssetsRepository::new(pool.clone()),
            assignments: assignments::AssignmentsRepository::new(pool.clone()),
            vendors: vendors::VendorsRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            admins: admins::AdminsRepository::new(pool.clone()),
            pool,
        }
    }
}
