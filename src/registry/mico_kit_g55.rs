//! MiCOKit-G55 (ATSAMG55) board tables.
//!
//! # Pin Assignments
//!
//! ## Internal
//! - **PA10/PA9**: STDIO_UART TX/RX (FLEXCOM0, mux A)
//! - **PA30**: FLASH_SPI_CS
//! - **PA29/PA28/PA27**: FLASH_SPI CLK/MOSI/MISO (FLEXCOM7, mux B)
//! - **PA16**: SYS_LED, push-pull, active-low
//! - **PA24**: RF_LED, open-drain, active-low
//! - **PA2**: EasyLink button, pull-up, active-low
//! - **PB14/PB15**: BOOT_SEL / MFG_SEL straps, pull-up, active-low
//!
//! ## Arduino header
//! - **PB1/PB0**: RXD/TXD (FLEXCOM6, mux B)
//! - **PA21, PA22, PA23, PA6, PA25, PB13, PA0, PA1**: D2..D9
//! - **PA31**: CS
//! - **PA28/PA27/PA29**: SI/SO/SCK, shared with the serial-flash bus
//! - **PA3/PA4**: SDA/SCL (FLEXCOM3, mux A)
//!
//! ## WiFi module
//! - **PA26**: RESET
//! - **PB10**: SPI IRQ
//! - **PA11/PA14/PA13/PA12**: SPI CS/CLK/MOSI/MISO (FLEXCOM5, mux A)

use super::{
    BitOrder, ClockEdge, FlashDescriptor, FlashId, FlashType, Flexcom, I2cDescriptor, I2cId,
    LogicalPin, MuxMode, PinDescriptor, PinLocation, PinMode, Polarity, Port, SignalRoute,
    SpiDescriptor, SpiDeviceDescriptor, SpiId, UartDescriptor, UartId,
};

const fn pin(id: LogicalPin, port: Port, line: u8, mode: PinMode, polarity: Polarity) -> PinDescriptor {
    PinDescriptor {
        id,
        location: PinLocation::new(port, line),
        mode,
        polarity,
    }
}

/// Pin handed to a bus driver or left for the application.
const fn bus(id: LogicalPin, port: Port, line: u8) -> PinDescriptor {
    pin(id, port, line, PinMode::Unconfigured, Polarity::ActiveHigh)
}

pub(super) const PINS: [PinDescriptor; LogicalPin::COUNT] = {
    use LogicalPin::*;
    use PinMode::*;
    use Polarity::*;
    use Port::*;

    [
        bus(StdioUartTx, A, 10),
        bus(StdioUartRx, A, 9),
        bus(FlashSpiCs, A, 30),
        bus(FlashSpiClk, A, 29),
        bus(FlashSpiMosi, A, 28),
        bus(FlashSpiMiso, A, 27),
        pin(SysLed, A, 16, OutputPushPull, ActiveLow),
        pin(RfLed, A, 24, OutputOpenDrainNoPull, ActiveLow),
        pin(EasyLinkButton, A, 2, InputPullUp, ActiveLow),
        pin(BootSel, B, 14, InputPullUp, ActiveLow),
        pin(MfgSel, B, 15, InputPullUp, ActiveLow),
        bus(ArduinoRxd, B, 1),
        bus(ArduinoTxd, B, 0),
        bus(ArduinoD2, A, 21),
        bus(ArduinoD3, A, 22),
        bus(ArduinoD4, A, 23),
        bus(ArduinoD5, A, 6),
        bus(ArduinoD6, A, 25),
        bus(ArduinoD7, B, 13),
        bus(ArduinoD8, A, 0),
        bus(ArduinoD9, A, 1),
        bus(ArduinoCs, A, 31),
        bus(ArduinoSi, A, 28),
        bus(ArduinoSo, A, 27),
        bus(ArduinoSck, A, 29),
        bus(ArduinoSda, A, 3),
        bus(ArduinoScl, A, 4),
        bus(WifiReset, A, 26),
        bus(WifiSpiIrq, B, 10),
        bus(WifiSpiCs, A, 11),
        bus(WifiSpiClk, A, 14),
        bus(WifiSpiMosi, A, 13),
        bus(WifiSpiMiso, A, 12),
    ]
};

pub(super) const SPI: [SpiDescriptor; SpiId::COUNT] = [
    SpiDescriptor {
        id: SpiId::Flash,
        channel: 7,
        base: Flexcom(7),
        mosi: SignalRoute::new(LogicalPin::FlashSpiMosi, MuxMode::B),
        miso: SignalRoute::new(LogicalPin::FlashSpiMiso, MuxMode::B),
        clock: SignalRoute::new(LogicalPin::FlashSpiClk, MuxMode::B),
    },
    SpiDescriptor {
        id: SpiId::Wifi,
        channel: 5,
        base: Flexcom(5),
        mosi: SignalRoute::new(LogicalPin::WifiSpiMosi, MuxMode::A),
        miso: SignalRoute::new(LogicalPin::WifiSpiMiso, MuxMode::A),
        clock: SignalRoute::new(LogicalPin::WifiSpiClk, MuxMode::A),
    },
];

// Flow control isn't wired on either UART.
pub(super) const UART: [UartDescriptor; UartId::COUNT] = [
    UartDescriptor {
        id: UartId::Stdio,
        channel: 0,
        base: Flexcom(0),
        tx: SignalRoute::new(LogicalPin::StdioUartTx, MuxMode::A),
        rx: SignalRoute::new(LogicalPin::StdioUartRx, MuxMode::A),
        cts: None,
        rts: None,
    },
    UartDescriptor {
        id: UartId::Arduino,
        channel: 6,
        base: Flexcom(6),
        tx: SignalRoute::new(LogicalPin::ArduinoTxd, MuxMode::B),
        rx: SignalRoute::new(LogicalPin::ArduinoRxd, MuxMode::B),
        cts: None,
        rts: None,
    },
];

pub(super) const I2C: [I2cDescriptor; I2cId::COUNT] = [I2cDescriptor {
    id: I2cId::Arduino,
    channel: 3,
    base: Flexcom(3),
    sda: SignalRoute::new(LogicalPin::ArduinoSda, MuxMode::A),
    scl: SignalRoute::new(LogicalPin::ArduinoScl, MuxMode::A),
}];

pub(super) const FLASH: [FlashDescriptor; FlashId::COUNT] = [
    FlashDescriptor {
        id: FlashId::Spi,
        flash_type: FlashType::Spi,
        bus: Some(SpiId::Flash),
        start_addr: 0x0000_0000,
        length: 0x0020_0000,
    },
    FlashDescriptor {
        id: FlashId::Internal,
        flash_type: FlashType::Internal,
        bus: None,
        start_addr: 0x0040_0000,
        length: 0x0008_0000,
    },
];

/// Serial flash on the FLEXCOM7 SPI bus.
pub const SPI_FLASH_DEVICE: SpiDeviceDescriptor = SpiDeviceDescriptor {
    bus: SpiId::Flash,
    chip_select: LogicalPin::FlashSpiCs,
    speed_hz: 40_000_000,
    sample_edge: ClockEdge::Rising,
    idle_high: true,
    dma: false,
    bit_order: BitOrder::MsbFirst,
    bits: 8,
};
