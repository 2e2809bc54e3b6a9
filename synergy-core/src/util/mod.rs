pub mod geo_utils;
pub mod text_utils;
