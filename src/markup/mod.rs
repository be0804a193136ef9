pub(crate) mod attributes;
pub(crate) mod format;
pub(crate) mod matcher;
pub(crate) mod segment;
pub(crate) mod tokenize;
