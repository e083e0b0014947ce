pub(crate) mod client;
pub(crate) mod controller;
pub(crate) mod dialog;
pub(crate) mod pagination;
pub(crate) mod types;
