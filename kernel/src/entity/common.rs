mod audit;

pub use self::audit::*;
