pub mod headtts;
pub mod structs;
