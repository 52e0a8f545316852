// Regular expressions, compiled lazily

mod cache;

pub(crate) use cache::compile;
