//! UI task
//!
//! The whole kiosk runs in one cooperative loop: poll serial and touch,
//! evaluate timers, log what happened, sleep, repeat.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_rp::peripherals::{SPI0, SPI1};
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Delay, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;

use medgreet_core::{Diagnostic, Event, Instant, Kiosk, PollReport};
use medgreet_display::eg::EgBackend;
use medgreet_drivers::touch::Xpt2046;
use medgreet_hal_rp2040::UartSerialRx;

/// TFT on SPI0
pub type DisplaySpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, Delay>;
pub type Tft = mipidsi::Display<
    SpiInterface<'static, DisplaySpi, Output<'static>>,
    ILI9341Rgb565,
    Output<'static>,
>;
pub type Screen = EgBackend<Tft>;

/// XPT2046 on SPI1, gated by its PENIRQ line
pub type TouchSpi = ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, Delay>;
pub type Touch = Xpt2046<TouchSpi, Input<'static>>;

/// Current uptime on the kiosk's wrapping millisecond clock
pub fn now() -> Instant {
    Instant::from_millis(embassy_time::Instant::now().as_millis() as u32)
}

#[embassy_executor::task]
pub async fn ui_task(mut kiosk: Kiosk<Screen>, mut serial: UartSerialRx, mut touch: Touch) {
    info!("UI task started");

    let poll_interval = kiosk.controller().config().poll_interval_ms as u64;

    let report = kiosk.start();
    log_report(&kiosk, &report);

    loop {
        let report = kiosk.poll(&mut serial, &mut touch, now());
        if !report.is_empty() {
            log_report(&kiosk, &report);
        }
        Timer::after_millis(poll_interval).await;
    }
}

fn log_report(kiosk: &Kiosk<Screen>, report: &PollReport) {
    for event in &report.events {
        match event {
            Event::NameReceived => info!("Received name: {}", kiosk.session().user_name()),
            Event::ButtonTapped => info!("Button tapped, now {}", kiosk.session().mode()),
            Event::GreetingExpired => debug!("Greeting refreshed"),
            Event::InactivityExpired => info!("Inactivity timeout, back to scan"),
        }
    }

    for diagnostic in &report.diagnostics {
        match diagnostic {
            Diagnostic::EmptyName => warn!("Ignoring line without a name"),
            Diagnostic::NameTruncated => warn!("Name too long, truncated"),
            Diagnostic::LineOverflow => warn!("Serial line too long, dropped"),
            Diagnostic::InvalidUtf8 => warn!("Serial line is not UTF-8, dropped"),
            Diagnostic::SerialRead => error!("Serial read failed"),
            Diagnostic::TouchRead => error!("Touch controller read failed"),
            Diagnostic::Display(e) => error!("Display error: {}", e),
            Diagnostic::InvalidTransition(mode) => error!("Invalid transition from {}", mode),
        }
    }

    if report.dropped > 0 {
        warn!("{} events/diagnostics not reported", report.dropped);
    }
}
