use crate::{EmptyPageReason, Error, Result};
use ::serde::{Serialize, Serializer};
use ::std::ops::Index;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    object_list: Vec<T>,
    number: u64,
    count: u64,
    num_pages: u64,
    per_page: u32,
}

impl<T> Page<T> {
    pub(crate) fn new(object_list: Vec<T>, number: u64, count: u64, num_pages: u64, per_page: u32) -> Self {
        Self {
            object_list,
            number,
            count,
            num_pages,
            per_page,
        }
    }

    pub fn object_list(&self) -> &[T] {
        &self.object_list
    }

    pub fn into_inner(self) -> Vec<T> {
        self.object_list
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn num_pages(&self) -> u64 {
        self.num_pages
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn len(&self) -> usize {
        self.object_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.object_list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.object_list.iter()
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_previous() || self.has_next()
    }

    pub fn next_page_number(&self) -> Result<u64> {
        let next = self.number + 1;
        match next > self.num_pages {
            true => Err(Error::EmptyPage(EmptyPageReason::NoResults)),
            false => Ok(next),
        }
    }

    pub fn previous_page_number(&self) -> Result<u64> {
        match self.number {
            0 | 1 => Err(Error::EmptyPage(EmptyPageReason::LessThanOne)),
            number => Ok(number - 1),
        }
    }

    /// 1-based index of the first object on this page, 0 when there are no
    /// results at all.
    pub fn start_index(&self) -> u64 {
        if self.count == 0 {
            return 0;
        }
        u64::from(self.per_page) * (self.number - 1) + 1
    }

    pub fn end_index(&self) -> u64 {
        // the last page absorbs orphans
        if self.number == self.num_pages {
            return self.count;
        }
        self.number * u64::from(self.per_page)
    }
}

impl<T> Index<usize> for Page<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.object_list[index]
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.object_list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.object_list.iter()
    }
}

pub const ELLIPSIS: &str = "…";

#[derive(Clone, Copy, Debug, Eq, Hash, IsVariant, Ord, PartialEq, PartialOrd)]
pub enum PageRangeItem {
    Number(u64),
    Ellipsis,
}

impl Serialize for PageRangeItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(number) => serializer.serialize_u64(*number),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}
