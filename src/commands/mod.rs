pub mod emergency;

pub use emergency::*;
