pub mod errors;
pub mod db;
pub mod validation;
pub mod company;
pub mod obligation;

pub use validation::Validate;

#[cfg(test)]
mod tests;
