pub const ENCODING_COOKIE_BASE: u32 = 0x1c84_9301;
pub const COMPRESSED_ENCODING_COOKIE_BASE: u32 = 0x1c84_9302;

const VERSION_BITS: u32 = 0x10;

pub fn get_encoding_cookie() -> u32 {
    ENCODING_COOKIE_BASE | VERSION_BITS
}

pub fn get_compressed_encoding_cookie() -> u32 {
    COMPRESSED_ENCODING_COOKIE_BASE | VERSION_BITS
}

pub fn get_cookie_base(cookie: u32) -> u32 {
    cookie & !0xf0
}
