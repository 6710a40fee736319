pub use sea_orm_migration::prelude::*;

mod m20250301_000001_people;
mod m20250301_000002_planet;
mod m20250301_000003_user;
mod m20250301_000004_user_favorite_people;
mod m20250301_000005_user_favorite_planet;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_people::Migration),
            Box::new(m20250301_000002_planet::Migration),
            Box::new(m20250301_000003_user::Migration),
            Box::new(m20250301_000004_user_favorite_people::Migration),
            Box::new(m20250301_000005_user_favorite_planet::Migration),
        ]
    }
}
