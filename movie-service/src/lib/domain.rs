pub mod movie;
pub mod recommendation;
pub mod review;
pub mod user;
