pub mod career;
pub mod test_result;
pub mod user;
