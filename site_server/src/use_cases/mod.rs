pub mod create_guest;
pub mod fetch_content;
pub mod list_guests;
pub mod lookup_guest;
pub mod update_guest;

#[cfg(test)]
pub(crate) mod test_support;
