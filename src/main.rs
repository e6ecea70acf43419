#![no_std]
#![no_main]

mod buttons;
mod knob;
mod logging;
mod serial;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use controller_link::{
    AnalogSource, Bridge, BridgeConfig, ButtonId, ByteSink, DebounceConfig, DebouncedButton,
    EdgeHandler, EventQueue, LinkError,
};
use embassy_executor::Spawner;
use embassy_futures::join;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{with_timeout, Delay, Duration, Instant};
use microbit_bsp::{
    embassy_nrf::{bind_interrupts, peripherals, saadc, uarte},
    Button, Microbit,
};
use num_traits::float::FloatCore;

pub use buttons::*;
pub use knob::*;
pub use serial::*;

/// Link speed expected by the game on the PC side.
pub const BAUD: uarte::Baudrate = uarte::Baudrate::BAUD9600;
/// Presses buffered between the button handlers and the main loop.
pub const EVENT_QUEUE_DEPTH: usize = 4;
pub const ADC_TIMEOUT: Duration = Duration::from_millis(5);
pub const TX_TIMEOUT: Duration = Duration::from_millis(20);
/// Main loop iterations between two statistics reports.
pub const STATS_EVERY: u32 = 10_000;

pub type Events = EventQueue<CriticalSectionRawMutex, EVENT_QUEUE_DEPTH>;

static EVENTS: Events = EventQueue::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    logging::init(log::LevelFilter::Info);
    let board = Microbit::default();

    bind_interrupts!(struct Irqs {
        SAADC => saadc::InterruptHandler;
        UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
    });

    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_14BIT;
    let saadc = saadc::Saadc::new(
        board.saadc,
        Irqs,
        saadc_config,
        [saadc::ChannelConfig::single_ended(board.p2)],
    );
    let knob = Knob::new(saadc, ADC_TIMEOUT).await;

    let mut uart_config = uarte::Config::default();
    uart_config.baudrate = BAUD;
    let uart = uarte::UarteTx::new(board.uarte0, Irqs, board.uart_tx, uart_config);
    let serial = Serial::new(uart, TX_TIMEOUT);

    let mut button_a = edge_handler(ButtonId::A, board.btn_a);
    let mut button_b = edge_handler(ButtonId::B, board.btn_b);

    let config = BridgeConfig {
        report_every: STATS_EVERY,
        ..BridgeConfig::default()
    };
    let mut bridge = Bridge::new(knob, serial, &EVENTS, config);
    log::info!("game controller up");

    join::join3(
        bridge.run(),
        button_a.run(&EVENTS),
        button_b.run(&EVENTS),
    )
    .await;

    panic!("fell off end of main loop");
}
