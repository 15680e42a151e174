use crate::{EmptyPageReason, Error, Page, PageRangeItem, PaginatorOptions, Result};
use ::std::ops::RangeInclusive;

pub const DEFAULT_ON_EACH_SIDE: u64 = 3;
pub const DEFAULT_ON_ENDS: u64 = 2;

pub trait Paginator {
    type Item;

    fn options(&self) -> &PaginatorOptions;

    fn count(&mut self) -> Result<u64>;

    fn page(&mut self, number: u64) -> Result<Page<Self::Item>>;

    fn per_page(&self) -> u32 {
        self.options().per_page
    }

    fn orphans(&self) -> u32 {
        self.options().orphans
    }

    fn allow_empty_first_page(&self) -> bool {
        self.options().allow_empty_first_page
    }

    fn num_pages(&mut self) -> Result<u64> {
        let count = self.count()?;
        if count == 0 && !self.allow_empty_first_page() {
            return Ok(0);
        }
        let hits = count.saturating_sub(u64::from(self.orphans())).max(1);
        Ok(hits.div_ceil(u64::from(self.per_page())))
    }

    fn page_range(&mut self) -> Result<RangeInclusive<u64>> {
        Ok(1..=self.num_pages()?)
    }

    fn validate_number(&mut self, number: u64) -> Result<u64> {
        if number < 1 {
            return Err(Error::EmptyPage(EmptyPageReason::LessThanOne));
        }
        if number > self.num_pages()? && !(number == 1 && self.allow_empty_first_page()) {
            return Err(Error::EmptyPage(EmptyPageReason::NoResults));
        }
        Ok(number)
    }

    /// Like [`Paginator::page`] but never fails on bad input: a missing or
    /// non-integer number gives the first page and an out of range number
    /// gives the last one.
    fn get_page(&mut self, number: Option<&str>) -> Result<Page<Self::Item>> {
        let number = match number.map(parse_number) {
            Some(Ok(number)) => number,
            None | Some(Err(_)) => 1,
        };
        match self.validate_number(number) {
            Ok(number) => self.page(number),
            Err(Error::EmptyPage(_)) => {
                let last = self.num_pages()?;
                self.page(last)
            }
            Err(err) => Err(err),
        }
    }

    /// Page numbers around `number` with the middle of long ranges replaced
    /// by [`PageRangeItem::Ellipsis`], e.g. `1 2 … 7 8 9 10 11 12 13 … 49 50`.
    fn elided_page_range(&mut self, number: u64, on_each_side: u64, on_ends: u64) -> Result<Vec<PageRangeItem>> {
        let number = self.validate_number(number)?;
        let num_pages = self.num_pages()?;
        let numbers = |range: RangeInclusive<u64>| range.map(PageRangeItem::Number);

        let reach = on_each_side.saturating_add(on_ends);
        if num_pages <= reach.saturating_mul(2) {
            return Ok(numbers(1..=num_pages).collect());
        }

        let mut items = Vec::new();
        if number > reach.saturating_add(2) {
            items.extend(numbers(1..=on_ends));
            items.push(PageRangeItem::Ellipsis);
            items.extend(numbers(number - on_each_side..=number));
        } else {
            items.extend(numbers(1..=number));
        }

        if number.saturating_add(1) < num_pages.saturating_sub(reach) {
            items.extend(numbers(number + 1..=number + on_each_side));
            items.push(PageRangeItem::Ellipsis);
            items.extend(numbers(num_pages - on_ends + 1..=num_pages));
        } else {
            items.extend(numbers(number + 1..=num_pages));
        }
        Ok(items)
    }
}

pub fn parse_number(value: &str) -> Result<u64> {
    let trimmed = value.trim();
    if let Ok(number) = trimmed.parse::<i64>() {
        return Ok(number.max(0) as u64);
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() && number.fract() == 0.0 => Ok(number.max(0.0) as u64),
        _ => Err(Error::PageNotAnInteger(value.into())),
    }
}

/// Slice bounds `(bottom, top)` of page `number` for a list of `count`
/// results; a short final run of up to `orphans` results joins the last page.
pub(crate) fn page_bounds(number: u64, count: u64, options: &PaginatorOptions) -> (u64, u64) {
    let per_page = u64::from(options.per_page);
    let bottom = number.saturating_sub(1).saturating_mul(per_page);
    let mut top = bottom.saturating_add(per_page);
    if top.saturating_add(u64::from(options.orphans)) >= count {
        top = count;
    }
    (bottom, top.max(bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefaultPaginator;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn paginator(count: u64, options: PaginatorOptions) -> DefaultPaginator<u64> {
        DefaultPaginator::new((1..=count).collect(), options).unwrap()
    }

    #[rstest]
    #[case(10, 10, 0, true, 1)]
    #[case(10, 3, 0, true, 4)]
    #[case(10, 3, 1, true, 3)]
    #[case(10, 3, 2, true, 3)]
    #[case(11, 4, 2, true, 3)]
    #[case(11, 4, 3, true, 2)]
    #[case(0, 10, 0, true, 1)]
    #[case(0, 10, 0, false, 0)]
    #[case(1, 10, 5, false, 1)]
    fn num_pages(
        #[case] count: u64,
        #[case] per_page: u32,
        #[case] orphans: u32,
        #[case] allow_empty_first_page: bool,
        #[case] expected: u64,
    ) {
        let options = PaginatorOptions::with_per_page(per_page)
            .orphans(orphans)
            .allow_empty_first_page(allow_empty_first_page);
        let mut paginator = paginator(count, options);
        assert_eq!(paginator.num_pages().unwrap(), expected);
        assert_eq!(paginator.page_range().unwrap().count() as u64, expected);
    }

    #[rstest]
    #[case(0, Some(EmptyPageReason::LessThanOne))]
    #[case(1, None)]
    #[case(4, None)]
    #[case(5, Some(EmptyPageReason::NoResults))]
    fn validates_number(#[case] number: u64, #[case] expected: Option<EmptyPageReason>) {
        let mut paginator = paginator(10, PaginatorOptions::with_per_page(3));
        match (paginator.validate_number(number), expected) {
            (Ok(validated), None) => assert_eq!(validated, number),
            (Err(Error::EmptyPage(reason)), Some(expected)) => assert_eq!(reason, expected),
            (result, expected) => panic!("unexpected {result:?} for {expected:?}"),
        }
    }

    #[test]
    fn empty_first_page() {
        let mut allowed = paginator(0, PaginatorOptions::with_per_page(3));
        assert_eq!(allowed.validate_number(1).unwrap(), 1);
        assert!(allowed.page(1).unwrap().is_empty());

        let mut denied = paginator(0, PaginatorOptions::with_per_page(3).allow_empty_first_page(false));
        assert!(matches!(
            denied.validate_number(1),
            Err(Error::EmptyPage(EmptyPageReason::NoResults))
        ));
    }

    #[rstest]
    #[case("3", 3)]
    #[case(" 2 ", 2)]
    #[case("2.0", 2)]
    #[case("-4", 0)]
    fn parses_number(#[case] value: &str, #[case] expected: u64) {
        assert_eq!(parse_number(value).unwrap(), expected);
    }

    #[rstest]
    #[case("two")]
    #[case("1.5")]
    #[case("")]
    #[case("NaN")]
    fn rejects_non_integer(#[case] value: &str) {
        assert!(matches!(parse_number(value), Err(Error::PageNotAnInteger(_))));
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some("abc"), 1)]
    #[case(Some("2"), 2)]
    #[case(Some("0"), 4)]
    #[case(Some("99"), 4)]
    fn get_page_is_lenient(#[case] number: Option<&str>, #[case] expected: u64) {
        let mut paginator = paginator(10, PaginatorOptions::with_per_page(3));
        assert_eq!(paginator.get_page(number).unwrap().number(), expected);
    }

    fn render(items: &[PageRangeItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                PageRangeItem::Number(number) => number.to_string(),
                PageRangeItem::Ellipsis => "…".into(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[rstest]
    #[case(10, 5, "1 2 3 4 5 6 7 8 9 10")]
    #[case(50, 1, "1 2 3 4 … 49 50")]
    #[case(50, 6, "1 2 3 4 5 6 7 8 9 … 49 50")]
    #[case(50, 7, "1 2 3 4 5 6 7 8 9 10 … 49 50")]
    #[case(50, 8, "1 2 … 5 6 7 8 9 10 11 … 49 50")]
    #[case(50, 25, "1 2 … 22 23 24 25 26 27 28 … 49 50")]
    #[case(50, 43, "1 2 … 40 41 42 43 44 45 46 … 49 50")]
    #[case(50, 44, "1 2 … 41 42 43 44 45 46 47 48 49 50")]
    #[case(50, 45, "1 2 … 42 43 44 45 46 47 48 49 50")]
    #[case(50, 50, "1 2 … 47 48 49 50")]
    fn elides_page_range(#[case] num_pages: u64, #[case] number: u64, #[case] expected: &str) {
        let mut paginator = paginator(num_pages, PaginatorOptions::with_per_page(1));
        let items = paginator
            .elided_page_range(number, DEFAULT_ON_EACH_SIDE, DEFAULT_ON_ENDS)
            .unwrap();
        assert_eq!(render(&items), expected);
    }

    #[rstest]
    #[case(u64::MAX, DEFAULT_ON_ENDS)]
    #[case(DEFAULT_ON_EACH_SIDE, u64::MAX)]
    #[case(u64::MAX, u64::MAX)]
    fn huge_elision_widths_list_every_page(#[case] on_each_side: u64, #[case] on_ends: u64) {
        let mut paginator = paginator(10, PaginatorOptions::with_per_page(1));
        let items = paginator.elided_page_range(1, on_each_side, on_ends).unwrap();
        assert_eq!(render(&items), "1 2 3 4 5 6 7 8 9 10");
    }

    #[test]
    fn page_bounds_fold_orphans() {
        let options = PaginatorOptions::with_per_page(3).orphans(1);
        assert_eq!(page_bounds(1, 10, &options), (0, 3));
        assert_eq!(page_bounds(3, 10, &options), (6, 10));
        assert_eq!(page_bounds(1, 0, &options), (0, 0));
        let wide = PaginatorOptions::with_per_page(u32::MAX).orphans(u32::MAX);
        assert_eq!(page_bounds(u64::MAX, 10, &wide), (u64::MAX, u64::MAX));
    }
}
