use crate::{Error, Result};
use ::regex::Regex;
use ::std::convert::Infallible;
use ::std::fmt;
use ::std::str::FromStr;
use ::std::sync::OnceLock;

static COUNT_SUBQUERY_ALIAS: &str = "sub_query_for_count";
static PAGINATION_SUBQUERY_ALIAS: &str = "sub_query_for_pagination";
pub(crate) static COUNT_COLUMN_NAME: &str = "row_count";
static MICROSOFT_DEFAULT_ORDER_BY: &str = "ORDER BY id";

static ORDER_BY_RE: OnceLock<Regex> = OnceLock::new();

fn order_by_re() -> &'static Regex {
    ORDER_BY_RE.get_or_init(|| Regex::new(r"(?i)ORDER\s+BY.*").expect("valid ORDER BY pattern"))
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
}

impl ServerVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Oldest Oracle release that understands `OFFSET .. FETCH NEXT`.
pub const ORACLE_MIN_VERSION: ServerVersion = ServerVersion::new(12, 1);

#[derive(Clone, Debug, Eq, Hash, IsVariant, PartialEq)]
pub enum Dialect {
    Mysql,
    Postgresql,
    Sqlite,
    /// Pagination needs [`ORACLE_MIN_VERSION`] or newer.
    Oracle(Option<ServerVersion>),
    Firebird,
    Microsoft,
    /// A vendor without pagination support. Counting still works.
    Other(String),
}

impl Dialect {
    pub fn oracle(major: u32, minor: u32) -> Self {
        Self::Oracle(Some(ServerVersion::new(major, minor)))
    }

    pub fn vendor(&self) -> &str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::Oracle(_) => "oracle",
            Self::Firebird => "firebird",
            Self::Microsoft => "microsoft",
            Self::Other(vendor) => vendor,
        }
    }

    pub fn count_query(&self, raw_sql: &str) -> String {
        let raw_sql = match self {
            // SQL Server rejects ORDER BY inside derived tables
            Self::Microsoft => order_by_re().replace_all(raw_sql, ""),
            _ => raw_sql.into(),
        };
        format!("SELECT COUNT(*) AS {COUNT_COLUMN_NAME} FROM ({raw_sql}) AS {COUNT_SUBQUERY_ALIAS}")
    }

    pub fn limit_offset_query(&self, raw_sql: &str, limit: u64, offset: u64) -> Result<String> {
        match self {
            Self::Mysql | Self::Postgresql | Self::Sqlite => Ok(format!(
                "SELECT * FROM ({raw_sql}) AS {PAGINATION_SUBQUERY_ALIAS} LIMIT {limit} OFFSET {offset}"
            )),
            Self::Oracle(version) => match version {
                Some(version) if *version >= ORACLE_MIN_VERSION => Ok(format!(
                    "SELECT * FROM ({raw_sql}) {PAGINATION_SUBQUERY_ALIAS} OFFSET {offset} ROWS FETCH NEXT {limit} ROWS ONLY"
                )),
                _ => Err(Error::OracleVersionUnsupported(*version)),
            },
            Self::Firebird => Ok(format!(
                "SELECT FIRST {limit} SKIP {offset} * FROM ({raw_sql}) AS {PAGINATION_SUBQUERY_ALIAS}"
            )),
            Self::Microsoft => Ok(microsoft_query(raw_sql, limit, offset)),
            Self::Other(vendor) => Err(Error::UnsupportedDialect(vendor.clone())),
        }
    }
}

/// SQL Server pagination through `ROW_NUMBER()`. The first `ORDER BY` of the
/// raw query becomes the window ordering and every `ORDER BY` is removed from
/// the inner query.
fn microsoft_query(raw_sql: &str, limit: u64, offset: u64) -> String {
    let re = order_by_re();
    let order_by = re
        .find(raw_sql)
        .map(|m| m.as_str())
        .unwrap_or(MICROSOFT_DEFAULT_ORDER_BY);
    let raw_sql = re.replace_all(raw_sql, "");
    let first = offset.saturating_add(1);
    let last = offset.saturating_add(limit);
    format!(
        "SELECT t2.* FROM (SELECT ROW_NUMBER() OVER({order_by}) AS row, t1.* FROM ({raw_sql}) t1) t2 WHERE t2.row BETWEEN {first} AND {last};"
    )
}

impl FromStr for Dialect {
    type Err = Infallible;

    fn from_str(vendor: &str) -> Result<Self, Self::Err> {
        Ok(match vendor.to_ascii_lowercase().as_str() {
            "mysql" => Self::Mysql,
            "postgresql" => Self::Postgresql,
            "sqlite" => Self::Sqlite,
            "oracle" => Self::Oracle(None),
            "firebird" => Self::Firebird,
            "microsoft" => Self::Microsoft,
            _ => Self::Other(vendor.into()),
        })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oracle(Some(version)) => write!(f, "oracle {version}"),
            _ => f.write_str(self.vendor()),
        }
    }
}
