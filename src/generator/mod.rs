pub mod error;
pub mod extraction;
pub mod observer;
pub mod research;
pub mod workflow;

#[cfg(test)]
pub mod testing;
