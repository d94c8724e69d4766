pub mod firstdata;

pub use self::firstdata::Firstdata;
