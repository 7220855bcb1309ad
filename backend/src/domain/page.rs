//! Offset pagination over the customer list.

/// Page number used when the client does not send one.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: u32 = 3;
/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Reasons a page request is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// Pages are numbered from 1.
    #[error("page must be at least 1")]
    PageOutOfRange,
    /// Size must be between 1 and [`MAX_PAGE_SIZE`].
    #[error("size must be between 1 and {}", MAX_PAGE_SIZE)]
    SizeOutOfRange,
    /// The requested page starts beyond addressable offsets.
    #[error("page is too large")]
    OffsetOverflow,
}

impl PageRequestError {
    /// Query parameter the failure refers to.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::PageOutOfRange | Self::OffsetOverflow => "page",
            Self::SizeOutOfRange => "size",
        }
    }
}

/// One-based page of customers ordered by id.
///
/// # Examples
/// ```
/// use customer_service::domain::PageRequest;
///
/// let page = PageRequest::new(3, 2).expect("valid page");
/// assert_eq!(page.offset(), 4);
/// assert_eq!(page.limit(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    offset: usize,
}

impl PageRequest {
    /// Validate `page` and `size` and precompute the offset.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when either value is out of range or the
    /// offset does not fit in `usize`.
    pub fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::PageOutOfRange);
        }
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(PageRequestError::SizeOutOfRange);
        }
        let offset = usize::try_from(page.saturating_sub(1))
            .ok()
            .zip(usize::try_from(size).ok())
            .and_then(|(skipped, size)| skipped.checked_mul(size))
            .ok_or(PageRequestError::OffsetOverflow)?;
        Ok(Self { page, size, offset })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Records to skip.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Records to return.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 3, 0)]
    #[case(2, 3, 3)]
    #[case(3, 2, 4)]
    #[case(10, 100, 900)]
    fn offset_skips_previous_pages(#[case] page: u32, #[case] size: u32, #[case] offset: usize) {
        let request = PageRequest::new(page, size).expect("valid page");
        assert_eq!(request.offset(), offset);
        assert_eq!(request.limit(), size as usize);
    }

    #[rstest]
    #[case(0, 3, PageRequestError::PageOutOfRange)]
    #[case(1, 0, PageRequestError::SizeOutOfRange)]
    #[case(1, MAX_PAGE_SIZE + 1, PageRequestError::SizeOutOfRange)]
    fn rejects_out_of_range_values(
        #[case] page: u32,
        #[case] size: u32,
        #[case] expected: PageRequestError,
    ) {
        assert_eq!(PageRequest::new(page, size), Err(expected));
    }

    #[rstest]
    fn default_is_first_page_of_three() {
        let request = PageRequest::default();
        assert_eq!(request, PageRequest::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).expect("valid"));
    }

    #[rstest]
    fn errors_name_their_parameter() {
        assert_eq!(PageRequestError::PageOutOfRange.field(), "page");
        assert_eq!(PageRequestError::SizeOutOfRange.field(), "size");
    }
}
