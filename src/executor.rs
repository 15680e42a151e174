use crate::{Dialect, Param, Result};

pub trait RawExecutor {
    type Row;

    fn dialect(&self) -> Dialect;

    fn count(&mut self, sql: &str, params: &[Param]) -> Result<u64>;

    fn fetch(&mut self, sql: &str, params: &[Param]) -> Result<Vec<Self::Row>>;
}

impl<E: RawExecutor + ?Sized> RawExecutor for &mut E {
    type Row = E::Row;

    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn count(&mut self, sql: &str, params: &[Param]) -> Result<u64> {
        (**self).count(sql, params)
    }

    fn fetch(&mut self, sql: &str, params: &[Param]) -> Result<Vec<Self::Row>> {
        (**self).fetch(sql, params)
    }
}
