mod str_conv;

pub use self::str_conv::StrConv;
