//! Medgreet - Greeting & Medication Schedule Kiosk Firmware
//!
//! Shows a "SCAN HERE" prompt until a name arrives over serial, greets
//! the user, and shows their medication schedule on request. Falls back
//! to the prompt after a period without interaction.
//!
//! Serial input: `NAME:<name>` or a bare name, one per line.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, Config as UartConfig};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::{ColorOrder, Orientation};
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use medgreet_core::Kiosk;
use medgreet_display::eg::EgBackend;
use medgreet_drivers::touch::{Xpt2046, Xpt2046Config};
use medgreet_hal_rp2040::UartSerialRx;

use crate::config::GREETER_CONFIG;

mod board;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Buffers handed to drivers must live forever
static RX_BUF: StaticCell<[u8; board::SERIAL_RX_BUF_LEN]> = StaticCell::new();
static DISPLAY_BUF: StaticCell<[u8; board::DISPLAY_BUF_LEN]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Medgreet kiosk starting...");
    info!("Send 'NAME:YourName' or a bare name over serial");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Config: refresh={}ms, timeout={}ms, cooldown={}ms, poll={}ms",
        GREETER_CONFIG.greeting_refresh_ms,
        GREETER_CONFIG.inactivity_timeout_ms,
        GREETER_CONFIG.tap_cooldown_ms,
        GREETER_CONFIG.poll_interval_ms
    );

    // TFT on SPI0
    let mut display_spi_config = SpiConfig::default();
    display_spi_config.frequency = board::DISPLAY_SPI_HZ;
    let display_spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, display_spi_config);
    let display_cs = Output::new(p.PIN_17, Level::High);
    let display_dc = Output::new(p.PIN_20, Level::Low);
    let display_reset = Output::new(p.PIN_21, Level::High);

    let display_device = ExclusiveDevice::new(display_spi, display_cs, Delay).unwrap();
    let display_buf = DISPLAY_BUF.init([0; board::DISPLAY_BUF_LEN]);
    let interface = SpiInterface::new(display_device, display_dc, display_buf);

    let tft = Builder::new(ILI9341Rgb565, interface)
        .reset_pin(display_reset)
        .display_size(board::DISPLAY_WIDTH, board::DISPLAY_HEIGHT)
        .orientation(Orientation::new())
        .color_order(ColorOrder::Bgr)
        .init(&mut Delay)
        .unwrap();
    info!("Display initialized");

    // XPT2046 on SPI1
    let mut touch_spi_config = SpiConfig::default();
    touch_spi_config.frequency = board::TOUCH_SPI_HZ;
    let touch_spi = Spi::new_blocking(p.SPI1, p.PIN_10, p.PIN_11, p.PIN_12, touch_spi_config);
    let touch_cs = Output::new(p.PIN_13, Level::High);
    let touch_irq = Input::new(p.PIN_14, Pull::Up);
    let touch_device = ExclusiveDevice::new(touch_spi, touch_cs, Delay).unwrap();
    let touch = Xpt2046::with_irq(touch_device, touch_irq, Xpt2046Config::default());
    info!("Touch controller initialized");

    // Name channel on UART0 (RX only)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::SERIAL_BAUD;
    let rx_buf = RX_BUF.init([0; board::SERIAL_RX_BUF_LEN]);
    let rx = BufferedUartRx::new(p.UART0, Irqs, p.PIN_1, rx_buf, uart_config);
    let serial = UartSerialRx::new(rx);
    info!("UART initialized at {} baud", board::SERIAL_BAUD);

    let kiosk = Kiosk::new(EgBackend::new(tft), GREETER_CONFIG, tasks::ui::now());

    spawner.spawn(tasks::ui_task(kiosk, serial, touch)).unwrap();
    info!("Kiosk running");
}
