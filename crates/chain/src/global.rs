pub struct Config;

impl Config {
    pub const LEVEL: u32 = 42;
    pub const CHAIN_DELIMITER: char = '-';
    /// Longest chain word read per round, in bytes.
    pub const MAX_CHAIN_LEN: usize = 20;
    pub const HANDLER_LOCAL_INIT: u32 = 0x1337;
    pub const HANDLER_ALLOC_SIZE: usize = 0x100;
}
