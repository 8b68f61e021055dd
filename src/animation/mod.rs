pub(crate) mod looping;
pub(crate) mod script;
pub(crate) mod timeline;
