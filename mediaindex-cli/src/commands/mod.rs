pub(crate) mod collapse;
pub(crate) mod compare;
pub(crate) mod config;
pub(crate) mod extract;
pub(crate) mod fix_quotes;
pub(crate) mod scan;
