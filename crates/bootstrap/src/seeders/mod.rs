//! Seeding steps: users, catalog entries, order books.

pub mod books;
pub mod catalog;
pub mod users;

pub use books::BookSeeder;
pub use catalog::CatalogSeeder;
pub use users::UserSeeder;
