pub mod data;
pub mod poisson;
pub mod util;
