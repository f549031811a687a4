mod problem_detail;
pub use self::problem_detail::*;
