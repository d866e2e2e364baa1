//! Service test support.


pub(crate) use context::{TestContext, book_data};
