use crate::paginator::page_bounds;
use crate::{pagination_max_count, Page, Paginator, PaginatorOptions, Result};

#[derive(Clone, Debug)]
pub struct DefaultPaginator<T> {
    object_list: Vec<T>,
    options: PaginatorOptions,
}

impl<T> DefaultPaginator<T> {
    pub fn new(object_list: Vec<T>, options: PaginatorOptions) -> Result<Self> {
        options.validate(pagination_max_count())?;
        Ok(Self { object_list, options })
    }

    pub fn object_list(&self) -> &[T] {
        &self.object_list
    }

    pub fn into_inner(self) -> Vec<T> {
        self.object_list
    }
}

impl<T: Clone> Paginator for DefaultPaginator<T> {
    type Item = T;

    fn options(&self) -> &PaginatorOptions {
        &self.options
    }

    fn count(&mut self) -> Result<u64> {
        Ok(self.object_list.len() as u64)
    }

    fn page(&mut self, number: u64) -> Result<Page<T>> {
        let number = self.validate_number(number)?;
        let count = self.count()?;
        let (bottom, top) = page_bounds(number, count, &self.options);
        let objects = self.object_list[bottom as usize..top as usize].to_vec();
        Ok(Page::new(objects, number, count, self.num_pages()?, self.options.per_page))
    }
}
