use crate::{pagination_max_count, Dialect, Page, Paginator, PaginatorOptions, RawExecutor, RawQuery, RawQuerySet, Result};

/// Paginates a raw SQL query without loading the full result set.
///
/// The total is read with a `COUNT(*)` wrapper the first time it is needed
/// and cached for the lifetime of the paginator. Each page is fetched with a
/// limit/offset wrapper in the executor's [`Dialect`]. The raw query's
/// parameters are forwarded unchanged to both.
#[derive(Debug)]
pub struct RawQueryPaginator<E> {
    raw_query_set: RawQuerySet<E>,
    options: PaginatorOptions,
    count: Option<u64>,
}

impl<E: RawExecutor> RawQueryPaginator<E> {
    pub fn new(raw_query_set: RawQuerySet<E>, options: PaginatorOptions) -> Result<Self> {
        options.validate(pagination_max_count())?;
        Ok(Self {
            raw_query_set,
            options,
            count: None,
        })
    }

    pub fn raw_query(&self) -> &RawQuery {
        self.raw_query_set.query()
    }

    pub fn dialect(&self) -> Dialect {
        self.raw_query_set.executor().dialect()
    }

    pub fn into_inner(self) -> RawQuerySet<E> {
        self.raw_query_set
    }

    fn window(&self, number: u64, count: u64) -> (u64, u64) {
        let offset = number.saturating_sub(1).saturating_mul(u64::from(self.options.per_page));
        let mut limit = u64::from(self.options.per_page);
        if offset.saturating_add(limit).saturating_add(u64::from(self.options.orphans)) >= count {
            limit = count.saturating_sub(offset);
        }
        (limit, offset)
    }
}

impl<E: RawExecutor> Paginator for RawQueryPaginator<E> {
    type Item = E::Row;

    fn options(&self) -> &PaginatorOptions {
        &self.options
    }

    fn count(&mut self) -> Result<u64> {
        if let Some(count) = self.count {
            tracing::trace!(count, "using cached raw query count");
            return Ok(count);
        }

        let dialect = self.dialect();
        let sql = dialect.count_query(self.raw_query_set.query().sql());
        tracing::debug!(%dialect, %sql, params = self.raw_query().params().len(), "counting raw query");

        let (executor, query) = self.raw_query_set.parts_mut();
        let count = executor.count(&sql, query.params())?;
        self.count = Some(count);
        Ok(count)
    }

    fn page(&mut self, number: u64) -> Result<Page<E::Row>> {
        let number = self.validate_number(number)?;
        let count = self.count()?;
        let (limit, offset) = self.window(number, count);

        let dialect = self.dialect();
        let sql = dialect.limit_offset_query(self.raw_query().sql(), limit, offset)?;
        tracing::debug!(%dialect, %sql, number, limit, offset, "fetching raw query page");

        let (executor, query) = self.raw_query_set.parts_mut();
        let rows = executor.fetch(&sql, query.params())?;
        Ok(Page::new(rows, number, count, self.num_pages()?, self.options.per_page))
    }
}
