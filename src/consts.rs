/// Size of the byte -> slot lookup maps. Keys are restricted to ASCII.
pub const BYTE_RANGE: usize = 256;

/// The value used to represent "Key Not Found" in u8 maps.
/// This effectively limits us to 255 physical keys on a layout.
pub const KEY_NOT_FOUND_U8: u8 = 255;

/// Largest number of keys a layout may declare.
pub const MAX_KEYS: usize = KEY_NOT_FOUND_U8 as usize;

/// Upper bound on (layers x lengths x keys) cells in the layered search.
pub const MAX_SEARCH_CELLS: usize = 1 << 26;
