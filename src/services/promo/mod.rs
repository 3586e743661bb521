pub mod catalog;
pub mod http_client;
pub mod interface;
