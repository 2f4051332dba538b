//! Machine-wide constants.

/// Number of addressable memory cells. Addresses are a single byte.
pub const MEMORY_SIZE: usize = 256;

/// Highest valid memory address; the program counter never advances past it.
pub const LAST_ADDRESS: u8 = u8::MAX;

/// Registers addressable by the 2-bit register selector fields.
pub const MAX_REGISTERS: usize = 4;

/// Register count used when none is configured.
pub const DEFAULT_REGISTER_COUNT: usize = MAX_REGISTERS;

/// Delay between automatic steps while the engine is running, in milliseconds.
pub const DEFAULT_RUN_INTERVAL_MS: u64 = 100;

/// Assembly directive that moves the emission address.
pub const ORIGIN_DIRECTIVE: &str = ".orig";

/// Prefix marking a register operand in assembly text.
pub const REGISTER_MARKER: char = '$';
