//! Byte-transfer adapter - protocol byte-writes to bus transactions.
//!
//! The display-command layer never writes to the bus directly. It
//! brackets each burst with `StartTransfer`/`EndTransfer` and streams
//! the bytes in between with `Send`. We collect them in a fixed
//! 32-byte buffer and commit the lot as one I2C write when the burst
//! ends.
//!
//! A failed write is logged and dropped. The panel redraws completely
//! every frame, so a lost transaction is gone by the next refresh.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use heapless::Vec;
use log::error;

use crate::config::{I2C_SETTLE_DELAY_US, TRANSFER_CAPACITY};

/// What the bytes of the next `Send` mean to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataMode {
    Command,
    Data,
}

/// Messages accepted by [`ByteTransfer::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteMsg<'a> {
    Init,
    /// Data/command select. I2C carries it in the control byte instead.
    SetDc(DataMode),
    StartTransfer,
    Send(&'a [u8]),
    EndTransfer,
}

/// Fixed-capacity accumulation buffer for one transaction.
#[derive(Debug, Default)]
pub struct TransferBuffer {
    bytes: Vec<u8, TRANSFER_CAPACITY>,
}

impl TransferBuffer {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Rewind the cursor to 0.
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    /// Append at the cursor.
    ///
    /// # Panics
    ///
    /// If the transaction would exceed [`TRANSFER_CAPACITY`]. The
    /// display-command layer guarantees it never does; getting here is
    /// a logic error, not a bus condition.
    pub fn append(&mut self, bytes: &[u8]) {
        assert!(
            self.bytes.extend_from_slice(bytes).is_ok(),
            "transaction overflow: {} + {} bytes exceeds {}",
            self.bytes.len(),
            bytes.len(),
            TRANSFER_CAPACITY
        );
    }

    pub fn cursor(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// Adapter between the display-command layer and an I2C handle.
///
/// `B` may be an owned handle or `&mut` to one; either way the adapter
/// never closes it. [`ByteTransfer::release`] hands it back.
pub struct ByteTransfer<B, D> {
    bus: B,
    address: u8,
    delay: D,
    buffer: TransferBuffer,
    dropped: u32,
}

impl<B, D> ByteTransfer<B, D>
where
    B: I2c,
    D: DelayNs,
{
    pub fn new(bus: B, address: u8, delay: D) -> Self {
        Self {
            bus,
            address,
            delay,
            buffer: TransferBuffer::new(),
            dropped: 0,
        }
    }

    /// Handle one protocol message.
    ///
    /// Issues exactly one bus write per `EndTransfer` and none
    /// otherwise.
    pub fn handle(&mut self, msg: ByteMsg<'_>) {
        match msg {
            ByteMsg::Init | ByteMsg::SetDc(_) => {}
            ByteMsg::StartTransfer => self.buffer.reset(),
            ByteMsg::Send(bytes) => self.buffer.append(bytes),
            ByteMsg::EndTransfer => self.commit(),
        }
    }

    fn commit(&mut self) {
        self.delay.delay_us(I2C_SETTLE_DELAY_US);

        if let Err(e) = self.bus.write(self.address, self.buffer.as_slice()) {
            self.dropped = self.dropped.wrapping_add(1);
            error!(
                "I2C: write of {} bytes to {:#04x} failed: {:?} (dropped)",
                self.buffer.cursor(),
                self.address,
                e
            );
        }
    }

    /// Transactions lost to bus errors since creation.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Hand back the bus and delay provider.
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::bus::delay::tests::RecordingSleep;
    use crate::bus::delay::Timing;
    use core::time::Duration;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
    use proptest::prelude::*;

    /// I2C handle that records every write.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingBus {
        pub(crate) writes: std::vec::Vec<(u8, std::vec::Vec<u8>)>,
        pub(crate) fail: bool,
    }

    impl ErrorType for RecordingBus {
        type Error = ErrorKind;
    }

    impl I2c for RecordingBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    fn adapter() -> ByteTransfer<RecordingBus, Timing<RecordingSleep>> {
        ByteTransfer::new(
            RecordingBus::default(),
            0x3C,
            Timing::with_sleeper(RecordingSleep::default()),
        )
    }

    #[test]
    fn end_transfer_writes_accumulated_bytes() {
        let mut t = adapter();
        t.handle(ByteMsg::StartTransfer);
        t.handle(ByteMsg::Send(&[0x00, 0xAE]));
        t.handle(ByteMsg::Send(&[0xD5, 0x80]));
        t.handle(ByteMsg::EndTransfer);

        let (bus, _) = t.release();
        assert_eq!(bus.writes, [(0x3C, vec![0x00, 0xAE, 0xD5, 0x80])]);
    }

    #[test]
    fn start_transfer_discards_stale_bytes() {
        let mut t = adapter();
        t.handle(ByteMsg::Send(&[0xFF, 0xFF, 0xFF]));
        t.handle(ByteMsg::StartTransfer);
        t.handle(ByteMsg::Send(&[0x40, 0x01]));
        t.handle(ByteMsg::EndTransfer);

        let (bus, _) = t.release();
        assert_eq!(bus.writes, [(0x3C, vec![0x40, 0x01])]);
    }

    #[test]
    fn no_write_without_end_transfer() {
        let mut t = adapter();
        t.handle(ByteMsg::Init);
        t.handle(ByteMsg::SetDc(DataMode::Command));
        t.handle(ByteMsg::StartTransfer);
        t.handle(ByteMsg::Send(&[0x00]));

        let (bus, timing) = t.release();
        assert!(bus.writes.is_empty());
        assert!(timing.sleeper().pauses.is_empty());
    }

    #[test]
    fn settle_delay_precedes_each_write() {
        let mut t = adapter();
        for _ in 0..3 {
            t.handle(ByteMsg::StartTransfer);
            t.handle(ByteMsg::Send(&[0x00]));
            t.handle(ByteMsg::EndTransfer);
        }

        let (bus, timing) = t.release();
        assert_eq!(bus.writes.len(), 3);
        assert_eq!(
            timing.sleeper().pauses,
            [Duration::from_micros(u64::from(I2C_SETTLE_DELAY_US)); 3]
        );
    }

    #[test]
    fn failed_write_is_counted_not_retried() {
        let mut t = ByteTransfer::new(
            RecordingBus {
                fail: true,
                ..Default::default()
            },
            0x3C,
            Timing::with_sleeper(RecordingSleep::default()),
        );
        t.handle(ByteMsg::StartTransfer);
        t.handle(ByteMsg::Send(&[0x00, 0xAF]));
        t.handle(ByteMsg::EndTransfer);
        assert_eq!(t.dropped(), 1);

        // The adapter keeps working after a drop.
        t.handle(ByteMsg::StartTransfer);
        t.handle(ByteMsg::EndTransfer);
        assert_eq!(t.dropped(), 2);
    }

    #[test]
    fn full_capacity_fits() {
        let mut buf = TransferBuffer::new();
        buf.append(&[0xAA; TRANSFER_CAPACITY]);
        assert_eq!(buf.cursor(), TRANSFER_CAPACITY);
    }

    #[test]
    #[should_panic(expected = "transaction overflow")]
    fn overflow_is_fatal() {
        let mut buf = TransferBuffer::new();
        buf.append(&[0xAA; TRANSFER_CAPACITY]);
        buf.append(&[0xBB]);
    }

    proptest! {
        #[test]
        fn any_bounded_burst_becomes_one_write(
            chunks in proptest::collection::vec(
                proptest::collection::vec(any::<u8>(), 0..8),
                0..8,
            ).prop_filter("fits in one transaction", |c| {
                c.iter().map(|v| v.len()).sum::<usize>() <= TRANSFER_CAPACITY
            }),
            stale in proptest::collection::vec(any::<u8>(), 0..TRANSFER_CAPACITY),
        ) {
            let mut t = adapter();
            t.handle(ByteMsg::Send(&stale));
            t.handle(ByteMsg::StartTransfer);
            for chunk in &chunks {
                t.handle(ByteMsg::Send(chunk));
            }
            t.handle(ByteMsg::EndTransfer);

            let expected: std::vec::Vec<u8> = chunks.concat();
            let (bus, _) = t.release();
            prop_assert_eq!(bus.writes, vec![(0x3C, expected)]);
        }
    }
}
