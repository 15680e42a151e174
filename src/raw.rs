use ::chrono::NaiveDateTime;

#[derive(Clone, Debug, IsVariant, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Param {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(NaiveDateTime),
}

macro_rules! param_from {
    ($($variant:ident: $($ty:ty),+;)+) => {
        $($(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+)+
    };
}

param_from! {
    Bool: bool;
    Int: i8, i16, i32, i64, u8, u16, u32;
    Float: f32, f64;
    Text: String, &str;
    Timestamp: NaiveDateTime;
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// SQL text plus its bind parameters. The text is opaque: it is only ever
/// embedded as a subquery, and the parameters are passed on in order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RawQuery {
    sql: String,
    params: Vec<Param>,
}

impl RawQuery {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn with_params<P: Into<Param>>(mut self, params: impl IntoIterator<Item = P>) -> Self {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }
}

#[derive(Debug)]
pub struct RawQuerySet<E> {
    executor: E,
    query: RawQuery,
}

impl<E> RawQuerySet<E> {
    pub fn new(executor: E, query: RawQuery) -> Self {
        Self { executor, query }
    }

    pub fn query(&self) -> &RawQuery {
        &self.query
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    pub fn parts_mut(&mut self) -> (&mut E, &RawQuery) {
        (&mut self.executor, &self.query)
    }

    pub fn into_parts(self) -> (E, RawQuery) {
        (self.executor, self.query)
    }
}
