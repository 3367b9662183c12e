//! Peripheral registry: logical resource names to physical locations.
//!
//! The registry is a set of build-time tables. Each [`LogicalPin`] names a
//! signal role (a UART line, the serial-flash chip-select, an LED) and maps
//! to exactly one [`PinDescriptor`]. Each [`PeripheralId`] maps to one
//! [`BusPeripheralDescriptor`] describing the bus channel, its base
//! register selector and the pins it routes its signals through.
//!
//! # Lookup
//!
//! [`lookup_pin`] and [`lookup_peripheral`] are plain array indexations over
//! static tables keyed by closed enums, so there is no runtime "not found"
//! outcome. [`try_lookup_pin`] and [`try_lookup_peripheral`] accept raw
//! indices (e.g. from a console command or a persisted setting) and report
//! [`RegistryError::NotFound`] when the index is outside the table.
//!
//! # Shared pins
//!
//! One physical pin may back several logical pins. On the MiCOKit-G55 the
//! Arduino header SPI lines reuse the serial-flash bus. The registry records
//! this as-is; callers must keep transactions on the two roles mutually
//! exclusive. [`pins_at`] lists every role bound to a location.
//!
//! # Board selection
//!
//! The tables come from the board module selected by a cargo feature
//! (`board-mico-kit-g55`).

use core::fmt;

#[cfg(feature = "board-mico-kit-g55")]
mod mico_kit_g55;
#[cfg(feature = "board-mico-kit-g55")]
use mico_kit_g55 as board;

#[cfg(not(any(feature = "board-mico-kit-g55",)))]
compile_error!("No board selected! Please enable a board feature like 'board-mico-kit-g55'");

pub use board::SPI_FLASH_DEVICE;

/// Declares a dense `#[repr(u8)]` identifier enum with `COUNT`, `ALL` and
/// index conversions.
macro_rules! dense_id {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every identifier, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            /// Number of identifiers.
            pub const COUNT: usize = Self::ALL.len();

            /// Table index of this identifier.
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Identifier stored at `index`, if any.
            pub const fn from_index(index: usize) -> Option<Self> {
                if index < Self::COUNT {
                    Some(Self::ALL[index])
                } else {
                    None
                }
            }
        }
    };
}

dense_id! {
    /// Board-independent name of a hardware signal role.
    pub enum LogicalPin {
        /// Console UART transmit
        StdioUartTx,
        /// Console UART receive
        StdioUartRx,
        /// Serial-flash chip-select
        FlashSpiCs,
        /// Serial-flash clock
        FlashSpiClk,
        /// Serial-flash MOSI
        FlashSpiMosi,
        /// Serial-flash MISO
        FlashSpiMiso,
        /// System status LED (active-low)
        SysLed,
        /// Radio activity LED (active-low)
        RfLed,
        /// EasyLink push-button (active-low)
        EasyLinkButton,
        /// Boot-select strap (active-low)
        BootSel,
        /// Manufacturing-select strap (active-low)
        MfgSel,
        ArduinoRxd,
        ArduinoTxd,
        ArduinoD2,
        ArduinoD3,
        ArduinoD4,
        ArduinoD5,
        ArduinoD6,
        ArduinoD7,
        ArduinoD8,
        ArduinoD9,
        ArduinoCs,
        ArduinoSi,
        ArduinoSo,
        ArduinoSck,
        ArduinoSda,
        ArduinoScl,
        /// WiFi module reset
        WifiReset,
        /// WiFi SPI host interrupt
        WifiSpiIrq,
        WifiSpiCs,
        WifiSpiClk,
        WifiSpiMosi,
        WifiSpiMiso,
    }
}

dense_id! {
    /// SPI bus instances.
    pub enum SpiId {
        /// Serial-flash bus
        Flash,
        /// WiFi module transport
        Wifi,
    }
}

dense_id! {
    /// UART instances.
    pub enum UartId {
        /// Console
        Stdio,
        /// Arduino header RXD/TXD
        Arduino,
    }
}

dense_id! {
    /// I2C instances.
    pub enum I2cId {
        /// Arduino header SDA/SCL
        Arduino,
    }
}

dense_id! {
    /// Flash regions.
    pub enum FlashId {
        /// External serial flash
        Spi,
        /// On-chip flash
        Internal,
    }
}

/// GPIO controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// PIOA
    A,
    /// PIOB
    B,
}

/// Physical pin: controller plus line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinLocation {
    pub port: Port,
    pub pin: u8,
}

impl PinLocation {
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }
}

/// Electrical mode applied to a pin at board init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Left at reset state; configured by the bus driver that claims it.
    Unconfigured,
    InputPullUp,
    InputPullDown,
    InputHighImpedance,
    OutputPushPull,
    OutputOpenDrainPullUp,
    OutputOpenDrainNoPull,
}

/// Which electrical level means "asserted".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Electrical level (`true` = high) that represents `asserted`.
    pub const fn level(self, asserted: bool) -> bool {
        match self {
            Polarity::ActiveHigh => asserted,
            Polarity::ActiveLow => !asserted,
        }
    }

    /// Logical state represented by the electrical level `high`.
    pub const fn is_asserted(self, high: bool) -> bool {
        self.level(high)
    }
}

/// Immutable description of one logical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinDescriptor {
    pub id: LogicalPin,
    pub location: PinLocation,
    pub mode: PinMode,
    pub polarity: Polarity,
}

/// Peripheral multiplexer function selected on a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MuxMode {
    A,
    B,
    C,
    D,
}

/// A bus signal routed through a logical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalRoute {
    pub pin: LogicalPin,
    pub mux: MuxMode,
}

impl SignalRoute {
    pub const fn new(pin: LogicalPin, mux: MuxMode) -> Self {
        Self { pin, mux }
    }
}

/// FLEXCOM block backing a serial peripheral (base-register selector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flexcom(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiDescriptor {
    pub id: SpiId,
    /// Hardware channel number
    pub channel: u8,
    pub base: Flexcom,
    pub mosi: SignalRoute,
    pub miso: SignalRoute,
    pub clock: SignalRoute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartDescriptor {
    pub id: UartId,
    /// Hardware channel number
    pub channel: u8,
    pub base: Flexcom,
    pub tx: SignalRoute,
    pub rx: SignalRoute,
    /// `None` when hardware flow control is not wired.
    pub cts: Option<SignalRoute>,
    pub rts: Option<SignalRoute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cDescriptor {
    pub id: I2cId,
    /// Hardware channel number
    pub channel: u8,
    pub base: Flexcom,
    pub sda: SignalRoute,
    pub scl: SignalRoute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashType {
    Spi,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashDescriptor {
    pub id: FlashId,
    pub flash_type: FlashType,
    /// SPI bus the device sits on; `None` for on-chip flash.
    pub bus: Option<SpiId>,
    pub start_addr: u32,
    pub length: u32,
}

impl FlashDescriptor {
    /// One past the last address of the region.
    pub const fn end_addr(&self) -> u32 {
        self.start_addr + self.length
    }
}

/// Kind tag of a bus peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralKind {
    Spi,
    Uart,
    I2c,
    Flash,
}

/// Closed identifier of any bus peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralId {
    Spi(SpiId),
    Uart(UartId),
    I2c(I2cId),
    Flash(FlashId),
}

impl PeripheralId {
    /// Every peripheral on the board.
    pub const ALL: [PeripheralId; 7] = [
        PeripheralId::Spi(SpiId::Flash),
        PeripheralId::Spi(SpiId::Wifi),
        PeripheralId::Uart(UartId::Stdio),
        PeripheralId::Uart(UartId::Arduino),
        PeripheralId::I2c(I2cId::Arduino),
        PeripheralId::Flash(FlashId::Spi),
        PeripheralId::Flash(FlashId::Internal),
    ];

    pub const fn kind(self) -> PeripheralKind {
        match self {
            PeripheralId::Spi(_) => PeripheralKind::Spi,
            PeripheralId::Uart(_) => PeripheralKind::Uart,
            PeripheralId::I2c(_) => PeripheralKind::I2c,
            PeripheralId::Flash(_) => PeripheralKind::Flash,
        }
    }

    /// Index within the table of its kind.
    pub const fn index(self) -> usize {
        match self {
            PeripheralId::Spi(id) => id.index(),
            PeripheralId::Uart(id) => id.index(),
            PeripheralId::I2c(id) => id.index(),
            PeripheralId::Flash(id) => id.index(),
        }
    }

    /// Builds an identifier from a kind tag and a raw table index.
    pub const fn from_parts(kind: PeripheralKind, index: usize) -> Option<Self> {
        match kind {
            PeripheralKind::Spi => match SpiId::from_index(index) {
                Some(id) => Some(PeripheralId::Spi(id)),
                None => None,
            },
            PeripheralKind::Uart => match UartId::from_index(index) {
                Some(id) => Some(PeripheralId::Uart(id)),
                None => None,
            },
            PeripheralKind::I2c => match I2cId::from_index(index) {
                Some(id) => Some(PeripheralId::I2c(id)),
                None => None,
            },
            PeripheralKind::Flash => match FlashId::from_index(index) {
                Some(id) => Some(PeripheralId::Flash(id)),
                None => None,
            },
        }
    }
}

/// Description of one bus peripheral instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusPeripheralDescriptor {
    Spi(&'static SpiDescriptor),
    Uart(&'static UartDescriptor),
    I2c(&'static I2cDescriptor),
    Flash(&'static FlashDescriptor),
}

impl BusPeripheralDescriptor {
    pub const fn kind(&self) -> PeripheralKind {
        match self {
            BusPeripheralDescriptor::Spi(_) => PeripheralKind::Spi,
            BusPeripheralDescriptor::Uart(_) => PeripheralKind::Uart,
            BusPeripheralDescriptor::I2c(_) => PeripheralKind::I2c,
            BusPeripheralDescriptor::Flash(_) => PeripheralKind::Flash,
        }
    }

    /// Hardware channel number. Serial flash reports the channel of the SPI
    /// bus it sits on; on-chip flash has none.
    pub fn channel(&self) -> Option<u8> {
        match self {
            BusPeripheralDescriptor::Spi(d) => Some(d.channel),
            BusPeripheralDescriptor::Uart(d) => Some(d.channel),
            BusPeripheralDescriptor::I2c(d) => Some(d.channel),
            BusPeripheralDescriptor::Flash(d) => match d.bus {
                Some(bus) => Some(lookup_spi(bus).channel),
                None => None,
            },
        }
    }

    /// Signal routes claimed by this peripheral, in role order.
    pub fn routes(&self) -> impl Iterator<Item = SignalRoute> {
        let routes: [Option<SignalRoute>; 4] = match self {
            BusPeripheralDescriptor::Spi(d) => [Some(d.mosi), Some(d.miso), Some(d.clock), None],
            BusPeripheralDescriptor::Uart(d) => [Some(d.tx), Some(d.rx), d.cts, d.rts],
            BusPeripheralDescriptor::I2c(d) => [Some(d.sda), Some(d.scl), None, None],
            BusPeripheralDescriptor::Flash(_) => [None; 4],
        };
        routes.into_iter().flatten()
    }
}

/// SPI clock edge on which data is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEdge {
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Bus-level settings of an SPI slave device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiDeviceDescriptor {
    pub bus: SpiId,
    pub chip_select: LogicalPin,
    pub speed_hz: u32,
    pub sample_edge: ClockEdge,
    pub idle_high: bool,
    pub dma: bool,
    pub bit_order: BitOrder,
    pub bits: u8,
}

impl SpiDeviceDescriptor {
    /// Equivalent `embedded-hal` SPI mode (CPOL/CPHA).
    pub const fn hal_mode(&self) -> embedded_hal::spi::Mode {
        use embedded_hal::spi::{Phase, Polarity as ClockPolarity};

        let polarity = if self.idle_high {
            ClockPolarity::IdleHigh
        } else {
            ClockPolarity::IdleLow
        };
        // The leading edge is falling when the clock idles high.
        let leading_edge_samples = match self.sample_edge {
            ClockEdge::Rising => !self.idle_high,
            ClockEdge::Falling => self.idle_high,
        };
        let phase = if leading_edge_samples {
            Phase::CaptureOnFirstTransition
        } else {
            Phase::CaptureOnSecondTransition
        };
        embedded_hal::spi::Mode { polarity, phase }
    }
}

/// Table a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Table {
    Pins,
    Peripherals(PeripheralKind),
}

/// Error returned by the checked lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// `index` is outside the compiled identifier space of `table`.
    NotFound { table: Table, index: usize },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound { table: Table::Pins, index } => {
                write!(f, "no logical pin at index {index}")
            }
            RegistryError::NotFound {
                table: Table::Peripherals(kind),
                index,
            } => write!(f, "no {kind:?} peripheral at index {index}"),
        }
    }
}

impl core::error::Error for RegistryError {}

static PINS: [PinDescriptor; LogicalPin::COUNT] = board::PINS;
static SPI: [SpiDescriptor; SpiId::COUNT] = board::SPI;
static UART: [UartDescriptor; UartId::COUNT] = board::UART;
static I2C: [I2cDescriptor; I2cId::COUNT] = board::I2C;
static FLASH: [FlashDescriptor; FlashId::COUNT] = board::FLASH;

// Every table row must sit at the index of its own identifier.
const _: () = {
    let mut i = 0;
    while i < board::PINS.len() {
        assert!(board::PINS[i].id as usize == i, "pin table out of order");
        i += 1;
    }
    let mut i = 0;
    while i < board::SPI.len() {
        assert!(board::SPI[i].id as usize == i, "SPI table out of order");
        i += 1;
    }
    let mut i = 0;
    while i < board::UART.len() {
        assert!(board::UART[i].id as usize == i, "UART table out of order");
        i += 1;
    }
    let mut i = 0;
    while i < board::I2C.len() {
        assert!(board::I2C[i].id as usize == i, "I2C table out of order");
        i += 1;
    }
    let mut i = 0;
    while i < board::FLASH.len() {
        assert!(board::FLASH[i].id as usize == i, "flash table out of order");
        i += 1;
    }
};

/// Returns the descriptor of a logical pin.
pub fn lookup_pin(id: LogicalPin) -> &'static PinDescriptor {
    &PINS[id.index()]
}

/// Returns the descriptor of a bus peripheral.
pub fn lookup_peripheral(id: PeripheralId) -> BusPeripheralDescriptor {
    match id {
        PeripheralId::Spi(id) => BusPeripheralDescriptor::Spi(lookup_spi(id)),
        PeripheralId::Uart(id) => BusPeripheralDescriptor::Uart(lookup_uart(id)),
        PeripheralId::I2c(id) => BusPeripheralDescriptor::I2c(lookup_i2c(id)),
        PeripheralId::Flash(id) => BusPeripheralDescriptor::Flash(lookup_flash(id)),
    }
}

pub fn lookup_spi(id: SpiId) -> &'static SpiDescriptor {
    &SPI[id.index()]
}

pub fn lookup_uart(id: UartId) -> &'static UartDescriptor {
    &UART[id.index()]
}

pub fn lookup_i2c(id: I2cId) -> &'static I2cDescriptor {
    &I2C[id.index()]
}

pub fn lookup_flash(id: FlashId) -> &'static FlashDescriptor {
    &FLASH[id.index()]
}

/// Checked variant of [`lookup_pin`] for raw indices.
pub fn try_lookup_pin(index: usize) -> Result<&'static PinDescriptor, RegistryError> {
    LogicalPin::from_index(index)
        .map(lookup_pin)
        .ok_or(RegistryError::NotFound {
            table: Table::Pins,
            index,
        })
}

/// Checked variant of [`lookup_peripheral`] for a kind tag and raw index.
pub fn try_lookup_peripheral(
    kind: PeripheralKind,
    index: usize,
) -> Result<BusPeripheralDescriptor, RegistryError> {
    PeripheralId::from_parts(kind, index)
        .map(lookup_peripheral)
        .ok_or(RegistryError::NotFound {
            table: Table::Peripherals(kind),
            index,
        })
}

/// Logical pins bound to the physical pin at `location`.
pub fn pins_at(location: PinLocation) -> impl Iterator<Item = LogicalPin> {
    PINS.iter()
        .filter(move |d| d.location == location)
        .map(|d| d.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_pin_lookups_are_identical() {
        let first = lookup_pin(LogicalPin::FlashSpiCs);
        let second = lookup_pin(LogicalPin::FlashSpiCs);
        assert_eq!(first, second);
        assert!(core::ptr::eq(first, second));
    }

    #[test]
    fn repeated_peripheral_lookups_are_identical() {
        for id in PeripheralId::ALL {
            assert_eq!(lookup_peripheral(id), lookup_peripheral(id));
            assert_eq!(lookup_peripheral(id).kind(), id.kind());
        }
    }

    #[test]
    fn every_pin_resolves_to_its_own_row() {
        for &id in LogicalPin::ALL {
            assert_eq!(lookup_pin(id).id, id);
            assert_eq!(LogicalPin::from_index(id.index()), Some(id));
        }
    }

    #[test]
    fn button_and_leds_are_active_low() {
        let button = lookup_pin(LogicalPin::EasyLinkButton);
        assert_eq!(button.location, PinLocation::new(Port::A, 2));
        assert_eq!(button.mode, PinMode::InputPullUp);
        assert_eq!(button.polarity, Polarity::ActiveLow);

        assert_eq!(lookup_pin(LogicalPin::SysLed).mode, PinMode::OutputPushPull);
        assert_eq!(
            lookup_pin(LogicalPin::RfLed).mode,
            PinMode::OutputOpenDrainNoPull
        );
        assert_eq!(lookup_pin(LogicalPin::RfLed).polarity, Polarity::ActiveLow);
    }

    #[test]
    fn flash_bus_shares_pins_with_arduino_header() {
        let clock = lookup_pin(LogicalPin::FlashSpiClk).location;
        let mut shared = pins_at(clock);
        assert_eq!(shared.next(), Some(LogicalPin::FlashSpiClk));
        assert_eq!(shared.next(), Some(LogicalPin::ArduinoSck));
        assert_eq!(shared.next(), None);

        assert_eq!(
            lookup_pin(LogicalPin::FlashSpiMosi).location,
            lookup_pin(LogicalPin::ArduinoSi).location
        );
        assert_eq!(
            lookup_pin(LogicalPin::FlashSpiMiso).location,
            lookup_pin(LogicalPin::ArduinoSo).location
        );
    }

    #[test]
    fn bus_channels_match_flexcom_blocks() {
        let flash = lookup_spi(SpiId::Flash);
        assert_eq!(flash.channel, 7);
        assert_eq!(flash.base, Flexcom(7));
        assert_eq!(flash.clock, SignalRoute::new(LogicalPin::FlashSpiClk, MuxMode::B));

        let wifi = lookup_spi(SpiId::Wifi);
        assert_eq!(wifi.channel, 5);
        assert_eq!(wifi.mosi.mux, MuxMode::A);

        assert_eq!(lookup_uart(UartId::Stdio).channel, 0);
        assert_eq!(lookup_uart(UartId::Arduino).channel, 6);
        assert_eq!(lookup_i2c(I2cId::Arduino).channel, 3);
    }

    #[test]
    fn uart_has_no_flow_control_routes() {
        let uart = lookup_peripheral(PeripheralId::Uart(UartId::Arduino));
        let mut routes = uart.routes();
        assert_eq!(routes.next(), Some(SignalRoute::new(LogicalPin::ArduinoTxd, MuxMode::B)));
        assert_eq!(routes.next(), Some(SignalRoute::new(LogicalPin::ArduinoRxd, MuxMode::B)));
        assert_eq!(routes.next(), None);
    }

    #[test]
    fn flash_regions() {
        let spi = lookup_flash(FlashId::Spi);
        assert_eq!(spi.flash_type, FlashType::Spi);
        assert_eq!(spi.end_addr(), 0x20_0000);
        assert_eq!(
            lookup_peripheral(PeripheralId::Flash(FlashId::Spi)).channel(),
            Some(7)
        );

        let internal = lookup_flash(FlashId::Internal);
        assert_eq!(internal.start_addr, 0x0040_0000);
        assert_eq!(internal.length, 0x8_0000);
        assert_eq!(
            lookup_peripheral(PeripheralId::Flash(FlashId::Internal)).channel(),
            None
        );
    }

    #[test]
    fn checked_lookups_reject_out_of_range() {
        assert_eq!(
            try_lookup_pin(LogicalPin::COUNT),
            Err(RegistryError::NotFound {
                table: Table::Pins,
                index: LogicalPin::COUNT
            })
        );
        assert_eq!(
            try_lookup_pin(LogicalPin::BootSel.index()),
            Ok(lookup_pin(LogicalPin::BootSel))
        );

        assert_eq!(
            try_lookup_peripheral(PeripheralKind::I2c, 1),
            Err(RegistryError::NotFound {
                table: Table::Peripherals(PeripheralKind::I2c),
                index: 1
            })
        );
        assert_eq!(
            try_lookup_peripheral(PeripheralKind::Uart, 1),
            Ok(lookup_peripheral(PeripheralId::Uart(UartId::Arduino)))
        );
    }

    #[test]
    fn peripheral_ids_round_trip_through_parts() {
        for id in PeripheralId::ALL {
            assert_eq!(PeripheralId::from_parts(id.kind(), id.index()), Some(id));
        }
    }

    #[test]
    fn serial_flash_runs_in_spi_mode_3() {
        let device = SPI_FLASH_DEVICE;
        assert_eq!(device.bus, SpiId::Flash);
        assert_eq!(device.chip_select, LogicalPin::FlashSpiCs);
        assert_eq!(device.speed_hz, 40_000_000);
        assert_eq!(device.hal_mode(), embedded_hal::spi::MODE_3);
    }
}
