use crate::{DefaultPaginator, Page, Paginator, PaginatorOptions, RawExecutor, RawQueryPaginator, RawQuerySet, Result};

pub enum ObjectList<E: RawExecutor> {
    Raw(RawQuerySet<E>),
    Items(Vec<E::Row>),
}

impl<E: RawExecutor> From<RawQuerySet<E>> for ObjectList<E> {
    fn from(raw_query_set: RawQuerySet<E>) -> Self {
        Self::Raw(raw_query_set)
    }
}

/// Picks [`RawQueryPaginator`] for raw query sets and [`DefaultPaginator`]
/// for everything else, so callers can page either through one type.
#[derive(IsVariant)]
pub enum AnyPaginator<E: RawExecutor> {
    Raw(RawQueryPaginator<E>),
    Default(DefaultPaginator<E::Row>),
}

impl<E: RawExecutor> AnyPaginator<E> {
    pub fn new(object_list: impl Into<ObjectList<E>>, options: PaginatorOptions) -> Result<Self> {
        Ok(match object_list.into() {
            ObjectList::Raw(raw_query_set) => Self::Raw(RawQueryPaginator::new(raw_query_set, options)?),
            ObjectList::Items(items) => Self::Default(DefaultPaginator::new(items, options)?),
        })
    }
}

impl<E> Paginator for AnyPaginator<E>
where
    E: RawExecutor,
    E::Row: Clone,
{
    type Item = E::Row;

    fn options(&self) -> &PaginatorOptions {
        match self {
            Self::Raw(paginator) => paginator.options(),
            Self::Default(paginator) => paginator.options(),
        }
    }

    fn count(&mut self) -> Result<u64> {
        match self {
            Self::Raw(paginator) => paginator.count(),
            Self::Default(paginator) => paginator.count(),
        }
    }

    fn page(&mut self, number: u64) -> Result<Page<E::Row>> {
        match self {
            Self::Raw(paginator) => paginator.page(number),
            Self::Default(paginator) => paginator.page(number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw_paginator::tests::FakeExecutor;
    use crate::{Dialect, RawQuery};
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_query_set_gets_raw_paginator() {
        let raw_query_set = RawQuerySet::new(FakeExecutor::new(Dialect::Postgresql, 7), RawQuery::new("SELECT id FROM person"));
        let mut paginator = AnyPaginator::new(raw_query_set, PaginatorOptions::with_per_page(5)).unwrap();
        assert!(paginator.is_raw());
        assert_eq!(paginator.num_pages().unwrap(), 2);
        assert_eq!(paginator.page(2).unwrap().into_inner(), vec![6, 7]);
    }

    #[test]
    fn items_get_default_paginator() {
        let mut paginator =
            AnyPaginator::<FakeExecutor>::new(ObjectList::Items(vec![10, 20, 30]), PaginatorOptions::with_per_page(2))
                .unwrap();
        assert!(paginator.is_default());
        assert_eq!(paginator.count().unwrap(), 3);
        assert_eq!(paginator.page(2).unwrap().into_inner(), vec![30]);
    }
}
