use crate::db::StoreError;

/// Validated page window. Every paginated query derives its OFFSET/LIMIT
/// from this, so a zero or negative page never reaches the database.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    page: i64,
    page_size: i64,
}

impl PageParams {
    pub fn new(page: i64, page_size: i64) -> Result<Self, StoreError> {
        if page < 1 {
            return Err(StoreError::Validation(format!("page must be >= 1, got {}", page)));
        }
        if page_size < 1 {
            return Err(StoreError::Validation(format!(
                "page_size must be >= 1, got {}",
                page_size
            )));
        }
        Ok(Self { page, page_size })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// A page of rows plus the total count of rows matching the same predicate
/// before windowing. The two are computed by separate queries sharing one
/// WHERE clause; see the per-relation modules.
#[derive(Debug)]
pub struct Paginated<T> {
    pub rows: Vec<T>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let params = PageParams::new(1, 10).unwrap();
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn offset_is_window_start() {
        let params = PageParams::new(3, 25).unwrap();
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn zero_page_rejected() {
        assert!(matches!(
            PageParams::new(0, 10),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn zero_page_size_rejected() {
        assert!(matches!(
            PageParams::new(1, 0),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn negative_arguments_rejected() {
        assert!(PageParams::new(-1, 10).is_err());
        assert!(PageParams::new(1, -5).is_err());
    }
}
