pub(crate) mod config;
pub(crate) mod index;
pub(crate) mod normalize;
pub(crate) mod sync;
