mod absence;
mod checks;
mod eq;
mod equality;
mod identity;
mod token;

pub mod assertion;
pub mod literal;
pub mod logger;
pub mod value;

pub use absence::{should_be_false, should_be_nil, should_be_true, should_not_be_nil};
pub use assertion::{so, Assertion};
pub use checks::SUCCESS;
pub use eq::{loosely_equal, resembles};
pub use equality::{should_equal, should_not_equal, should_not_resemble, should_resemble};
pub use identity::{should_not_point_to, should_point_to};
