pub mod headtts;
pub mod probe;
