use serde::Serialize;

/// One page of a ranked, deterministic sequence
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Slice a ranked sequence into a page.
///
/// `total` is the full post-filter count, not the slice length. A page
/// past the end yields an empty item list with the totals intact rather
/// than an error.
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> Page<T> {
    let total = items.len();
    let total_pages = (total as u32).div_ceil(limit);
    let offset = page.saturating_sub(1) as usize * limit as usize;

    let items = if offset >= total {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect()
    };

    Page {
        items,
        total,
        page,
        limit,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page() {
        let page = paginate((1..=25).collect::<Vec<i32>>(), 2, 10);

        assert_eq!(page.items, (11..=20).collect::<Vec<i32>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate((1..=25).collect::<Vec<i32>>(), 3, 10);

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items, (21..=25).collect::<Vec<i32>>());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_past_the_end_is_empty_not_error() {
        let page = paginate((1..=25).collect::<Vec<i32>>(), 9, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(Vec::<i32>::new(), 1, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(paginate((1..=30).collect::<Vec<i32>>(), 1, 10).total_pages, 3);
        assert_eq!(paginate((1..=31).collect::<Vec<i32>>(), 1, 10).total_pages, 4);
        assert_eq!(paginate(vec![1], 1, 10).total_pages, 1);
    }
}
