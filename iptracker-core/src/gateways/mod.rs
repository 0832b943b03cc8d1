mod ip_lookup;

pub use self::ip_lookup::*;
