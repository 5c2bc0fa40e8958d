pub mod elements;
pub mod elements_ext;
