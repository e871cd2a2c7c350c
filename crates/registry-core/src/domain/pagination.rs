/// Page index and page size, substituted literally into paginated routes.
///
/// The server owns the indexing convention, so no clamping happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}
