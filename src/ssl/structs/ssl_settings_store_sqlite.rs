use sqlx::{Pool, Sqlite};

#[derive(Debug, Clone)]
pub struct SslSettingsStoreSqlite {
    pub(crate) pool: Pool<Sqlite>,
}
