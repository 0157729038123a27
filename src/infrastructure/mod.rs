pub mod slugifier;
pub mod util;
