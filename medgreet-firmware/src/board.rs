//! Board wiring
//!
//! Raspberry Pi Pico with an ILI9341 240x320 SPI TFT and its XPT2046
//! touch controller on a separate SPI bus. Names arrive on UART0.
//!
//! | Signal      | GPIO | Peripheral |
//! |-------------|------|------------|
//! | TFT SCK     | 18   | SPI0       |
//! | TFT MOSI    | 19   | SPI0       |
//! | TFT MISO    | 16   | SPI0       |
//! | TFT CS      | 17   |            |
//! | TFT DC      | 20   |            |
//! | TFT RESET   | 21   |            |
//! | Touch SCK   | 10   | SPI1       |
//! | Touch MOSI  | 11   | SPI1       |
//! | Touch MISO  | 12   | SPI1       |
//! | Touch CS    | 13   |            |
//! | Touch IRQ   | 14   |            |
//! | Serial TX   | 0    | UART0      |
//! | Serial RX   | 1    | UART0      |

/// Panel size in portrait orientation
pub const DISPLAY_WIDTH: u16 = 240;
pub const DISPLAY_HEIGHT: u16 = 320;

/// TFT SPI clock
pub const DISPLAY_SPI_HZ: u32 = 40_000_000;

/// The XPT2046 is specified up to 2.5 MHz
pub const TOUCH_SPI_HZ: u32 = 2_000_000;

/// Name channel baud rate
pub const SERIAL_BAUD: u32 = 9600;

/// UART receive ring buffer size
pub const SERIAL_RX_BUF_LEN: usize = 256;

/// mipidsi command buffer size
pub const DISPLAY_BUF_LEN: usize = 512;
