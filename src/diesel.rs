use crate::{Dialect, Error, Param, RawExecutor, Result};
use ::chrono::NaiveDateTime;
use ::diesel::backend::Backend;
use ::diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use ::diesel::serialize::ToSql;
use ::diesel::sql_types::{BigInt, Bool, Double, HasSqlType, Nullable, Text, Timestamp};
use ::diesel::{QueryableByName, RunQueryDsl};
use ::std::marker::PhantomData;

// field name must match COUNT_COLUMN_NAME
#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    row_count: i64,
}

/// Runs raw queries on a diesel connection, loading rows as `T`.
///
/// Implemented for `PgConnection`, `MysqlConnection` and `SqliteConnection`
/// behind the `postgres`, `mysql` and `sqlite` features.
pub struct DieselExecutor<'c, C, T> {
    conn: &'c mut C,
    row: PhantomData<fn() -> T>,
}

impl<'c, C, T> DieselExecutor<'c, C, T> {
    pub fn new(conn: &'c mut C) -> Self {
        Self {
            conn,
            row: PhantomData,
        }
    }

    pub fn connection(&mut self) -> &mut C {
        self.conn
    }
}

fn bind_params<DB>(
    mut query: BoxedSqlQuery<'static, DB, SqlQuery>,
    params: &[Param],
) -> BoxedSqlQuery<'static, DB, SqlQuery>
where
    DB: Backend
        + HasSqlType<Bool>
        + HasSqlType<BigInt>
        + HasSqlType<Double>
        + HasSqlType<Text>
        + HasSqlType<Timestamp>,
    bool: ToSql<Bool, DB>,
    i64: ToSql<BigInt, DB>,
    f64: ToSql<Double, DB>,
    String: ToSql<Text, DB>,
    Option<String>: ToSql<Nullable<Text>, DB>,
    NaiveDateTime: ToSql<Timestamp, DB>,
{
    for param in params {
        query = match param {
            Param::Null => query.bind::<Nullable<Text>, _>(None::<String>),
            Param::Bool(value) => query.bind::<Bool, _>(*value),
            Param::Int(value) => query.bind::<BigInt, _>(*value),
            Param::Float(value) => query.bind::<Double, _>(*value),
            Param::Text(value) => query.bind::<Text, _>(value.clone()),
            Param::Timestamp(value) => query.bind::<Timestamp, _>(*value),
        };
    }
    query
}

fn count_from_rows(rows: Vec<CountRow>) -> Result<u64> {
    let count = rows.first().ok_or(Error::MissingCount)?.row_count;
    u64::try_from(count).map_err(|_| Error::NegativeCount(count))
}

macro_rules! diesel_executor {
    ($($feature:literal: $connection:ty, $backend:ty => $dialect:expr;)+) => {
        $(
            #[cfg(feature = $feature)]
            impl<'c, T> RawExecutor for DieselExecutor<'c, $connection, T>
            where
                T: QueryableByName<$backend> + 'static,
            {
                type Row = T;

                fn dialect(&self) -> Dialect {
                    $dialect
                }

                fn count(&mut self, sql: &str, params: &[Param]) -> Result<u64> {
                    let query = bind_params(::diesel::sql_query(sql).into_boxed::<$backend>(), params);
                    count_from_rows(query.load::<CountRow>(self.conn)?)
                }

                fn fetch(&mut self, sql: &str, params: &[Param]) -> Result<Vec<T>> {
                    let query = bind_params(::diesel::sql_query(sql).into_boxed::<$backend>(), params);
                    Ok(query.load::<T>(self.conn)?)
                }
            }
        )+
    };
}

diesel_executor! {
    "postgres": ::diesel::PgConnection, ::diesel::pg::Pg => Dialect::Postgresql;
    "mysql": ::diesel::MysqlConnection, ::diesel::mysql::Mysql => Dialect::Mysql;
    "sqlite": ::diesel::SqliteConnection, ::diesel::sqlite::Sqlite => Dialect::Sqlite;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::COUNT_COLUMN_NAME;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn count_row_reads_the_count_column() {
        assert_eq!(COUNT_COLUMN_NAME, "row_count");
        let sql = Dialect::Sqlite.count_query("SELECT 1");
        assert!(sql.starts_with(&format!("SELECT COUNT(*) AS {COUNT_COLUMN_NAME} ")), "{sql}");
    }

    #[rstest]
    #[case(vec![CountRow { row_count: 7 }], Some(7))]
    #[case(vec![], None)]
    #[case(vec![CountRow { row_count: -1 }], None)]
    fn reads_count_from_rows(#[case] rows: Vec<CountRow>, #[case] expected: Option<u64>) {
        assert_eq!(count_from_rows(rows).ok(), expected);
    }
}
