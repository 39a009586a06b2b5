//! Integration tests for the semrel-config binary

mod helpers;
mod test_check;
mod test_preview;
mod test_show;
mod test_write;
