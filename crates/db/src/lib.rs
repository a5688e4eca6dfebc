use sqlx_migrator::{Info, Migrator};

mod m0_1;
pub mod table;

/// Build the migrator holding every schema migration of the application.
pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration)])?;

    Ok(migrator)
}
