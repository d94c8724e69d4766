//! This module holds traits for extending functionalities for existing datatypes
//! & inbuilt datatypes.

/// Extending functionalities of `String`
pub trait StringExt {
    /// Strips a leading UTF-8 byte order mark, if present
    fn strip_bom(self) -> String;
}

impl StringExt for String {
    fn strip_bom(self) -> String {
        match self.strip_prefix('\u{FEFF}') {
            Some(stripped) => stripped.to_string(),
            None => self,
        }
    }
}
