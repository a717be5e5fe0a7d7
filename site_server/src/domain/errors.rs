// Domain-level errors for the guest and content workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    GuestNotFound,
    MissingFields,
    StoreFailure,
}
