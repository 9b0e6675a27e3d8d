pub mod anchor;
pub mod housenumber;
pub mod street;
