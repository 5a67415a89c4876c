//! Recording transports for tests

use core::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

use super::RegisterTransport;

/// Transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Write { data: Vec<u8> },
    WriteRead { write_data: Vec<u8>, read_len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug, Default)]
struct State {
    transactions: Vec<Transaction>,
    read_data: VecDeque<u8>,
    fail_writes: bool,
    fail_reads: bool,
}

/// Records every transaction and serves pre-programmed read data.
///
/// Clones share the same log, so a test can keep a handle after moving
/// the transport into a driver.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.borrow().transactions.clone()
    }

    /// Queue bytes for subsequent reads
    pub fn push_read_data(&self, data: &[u8]) {
        self.state.borrow_mut().read_data.extend(data.iter().copied());
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }
}

impl RegisterTransport for MockTransport {
    type Error = MockError;

    fn write(&mut self, data: &[u8]) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        state.transactions.push(Transaction::Write { data: data.to_vec() });
        if state.fail_writes {
            return Err(MockError);
        }
        Ok(())
    }

    fn write_read(&mut self, data: &[u8], buffer: &mut [u8]) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        state.transactions.push(Transaction::WriteRead {
            write_data: data.to_vec(),
            read_len: buffer.len(),
        });
        if state.fail_reads {
            return Err(MockError);
        }
        for byte in buffer.iter_mut() {
            *byte = state.read_data.pop_front().unwrap_or(0);
        }
        Ok(())
    }
}

/// Bus operation seen by [`MockI2c`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusOp {
    Write { address: u8, data: Vec<u8> },
    Read { address: u8, len: usize },
    WriteRead { address: u8, data: Vec<u8>, read_len: usize },
}

impl i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Minimal `embedded-hal` I2C bus.
#[derive(Debug, Default)]
pub struct MockI2c {
    pub ops: Vec<BusOp>,
    pub read_data: Vec<u8>,
    pub fail: bool,
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c<SevenBitAddress> for MockI2c {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        for op in operations.iter_mut() {
            match op {
                Operation::Write(data) => self.ops.push(BusOp::Write { address, data: data.to_vec() }),
                Operation::Read(buffer) => {
                    let len = buffer.len();
                    buffer.copy_from_slice(&self.read_data[..len]);
                    self.ops.push(BusOp::Read { address, len });
                }
            }
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        address: SevenBitAddress,
        write: &[u8],
        read: &mut [u8],
    ) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        let len = read.len();
        read.copy_from_slice(&self.read_data[..len]);
        self.ops.push(BusOp::WriteRead { address, data: write.to_vec(), read_len: len });
        Ok(())
    }
}
