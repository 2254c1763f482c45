pub mod http_gateway;
pub mod memory_gateway;
pub mod storage;
