//! SSD13xx command/data framing over the byte-transfer adapter.
//!
//! On I2C the controller tells commands from pixel data by a control
//! byte at the start of each transfer: `0x00` for a command stream,
//! `0x40` for a data stream. The driver hands us arbitrarily long
//! streams; we slice them so every transaction is one control byte plus
//! at most 31 payload bytes, which keeps the adapter's 32-byte buffer
//! invariant intact.

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::i2c::I2c;
use heapless::Vec;

use super::delay::{DelayMsg, Sleep, ThreadSleep, Timing};
use super::transfer::{ByteMsg, ByteTransfer, DataMode};
use crate::config::TRANSFER_CAPACITY;

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// Payload bytes that fit next to the control byte.
pub const PAYLOAD_PER_TRANSFER: usize = TRANSFER_CAPACITY - 1;

/// Display interface for the `ssd1306` driver.
pub struct I2cLink<B, S = ThreadSleep> {
    transfer: ByteTransfer<B, Timing<S>>,
}

impl<B: I2c> I2cLink<B, ThreadSleep> {
    pub fn new(bus: B, address: u8) -> Self {
        Self::with_timing(bus, address, Timing::new())
    }
}

impl<B: I2c, S: Sleep> I2cLink<B, S> {
    /// Build the link and send the one-time init messages.
    pub fn with_timing(bus: B, address: u8, mut timing: Timing<S>) -> Self {
        timing.handle(DelayMsg::Init);
        let mut transfer = ByteTransfer::new(bus, address, timing);
        transfer.handle(ByteMsg::Init);
        Self { transfer }
    }

    fn frame(&mut self, mode: DataMode, payload: &[u8]) {
        let control = match mode {
            DataMode::Command => CONTROL_COMMAND,
            DataMode::Data => CONTROL_DATA,
        };

        self.transfer.handle(ByteMsg::SetDc(mode));
        for chunk in payload.chunks(PAYLOAD_PER_TRANSFER) {
            self.transfer.handle(ByteMsg::StartTransfer);
            self.transfer.handle(ByteMsg::Send(&[control]));
            self.transfer.handle(ByteMsg::Send(chunk));
            self.transfer.handle(ByteMsg::EndTransfer);
        }
    }

    fn send(&mut self, mode: DataMode, format: DataFormat<'_>) -> Result<(), DisplayError> {
        match format {
            DataFormat::U8(bytes) => {
                self.frame(mode, bytes);
                Ok(())
            }
            DataFormat::U8Iter(iter) => {
                let mut chunk: Vec<u8, PAYLOAD_PER_TRANSFER> = Vec::new();
                for byte in iter {
                    if chunk.is_full() {
                        self.frame(mode, &chunk);
                        chunk.clear();
                    }
                    let _ = chunk.push(byte);
                }
                if !chunk.is_empty() {
                    self.frame(mode, &chunk);
                }
                Ok(())
            }
            // The SSD13xx family only takes 8-bit streams.
            _ => Err(DisplayError::DataFormatNotImplemented),
        }
    }

    /// Transactions lost to bus errors so far.
    pub fn dropped(&self) -> u32 {
        self.transfer.dropped()
    }

    /// Hand back the bus handle.
    pub fn release(self) -> B {
        self.transfer.release().0
    }
}

impl<B: I2c, S: Sleep> WriteOnlyDataCommand for I2cLink<B, S> {
    fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        self.send(DataMode::Command, cmd)
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        self.send(DataMode::Data, buf)
    }
}
