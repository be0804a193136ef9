pub(crate) mod engine;
pub(crate) mod measure;
pub(crate) mod parley_measure;
