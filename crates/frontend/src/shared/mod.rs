pub mod dom;
#[cfg(test)]
pub mod memory_dom;
pub mod page_config;
