pub mod course;
pub mod idea;
pub mod opportunity;
pub mod trending;
