use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use mailroom_db::table::ContactMessage as ContactMessageTable;
use mailroom_shared::Result;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use crate::{ContactMessage, ContactMessageRow, IdGenerator, NewContactMessage, parse_id};

use super::ContactStore;

const COLUMNS: [ContactMessageTable; 7] = [
    ContactMessageTable::Id,
    ContactMessageTable::Name,
    ContactMessageTable::Email,
    ContactMessageTable::Subject,
    ContactMessageTable::Message,
    ContactMessageTable::IsRead,
    ContactMessageTable::CreatedAt,
];

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    ids: IdGenerator,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            ids: IdGenerator::default(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ContactStore for SqliteStore {
    async fn create(&self, draft: NewContactMessage) -> Result<ContactMessage> {
        let message = draft.into_message(self.ids.generate()?, Utc::now().trunc_subsecs(3));

        let statement = Query::insert()
            .into_table(ContactMessageTable::Table)
            .columns(COLUMNS)
            .values_panic([
                message.id.to_owned().into(),
                message.name.to_owned().into(),
                message.email.to_owned().into(),
                message.subject.to_owned().into(),
                message.message.to_owned().into(),
                message.is_read.into(),
                message.created_at.timestamp_millis().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        tracing::debug!(id = %message.id, "contact message stored");

        Ok(message)
    }

    async fn find_all(&self) -> Result<Vec<ContactMessage>> {
        let statement = Query::select()
            .columns(COLUMNS)
            .from(ContactMessageTable::Table)
            .order_by(ContactMessageTable::CreatedAt, Order::Desc)
            .order_by(ContactMessageTable::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, ContactMessageRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ContactMessage::try_from).collect()
    }

    async fn mark_read(&self, id: &str) -> Result<Option<ContactMessage>> {
        let id = parse_id(id)?;

        let statement = Query::update()
            .table(ContactMessageTable::Table)
            .values([(ContactMessageTable::IsRead, true.into())])
            .and_where(Expr::col(ContactMessageTable::Id).eq(id))
            .returning_all()
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, ContactMessageRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ContactMessage::try_from).transpose()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }
}
