//! Shared application services over the shop core.

pub mod context;
pub mod domain;
pub mod store;

#[cfg(test)]
mod test;
