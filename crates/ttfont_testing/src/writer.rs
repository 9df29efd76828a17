use byteorder::ByteOrder;
use std::marker::PhantomData;

/// Appends fixed width values in byte order `B`
pub(crate) struct Writer<B: ByteOrder> {
    bytes: Vec<u8>,
    _order: PhantomData<B>,
}

impl<B: ByteOrder> Writer<B> {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            _order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn u16(&mut self, value: u16) {
        let mut buf = [0u8; 2];
        B::write_u16(&mut buf, value);
        self.bytes.extend_from_slice(&buf);
    }

    pub fn u32(&mut self, value: u32) {
        let mut buf = [0u8; 4];
        B::write_u32(&mut buf, value);
        self.bytes.extend_from_slice(&buf);
    }

    pub fn f32(&mut self, value: f32) {
        let mut buf = [0u8; 4];
        B::write_f32(&mut buf, value);
        self.bytes.extend_from_slice(&buf);
    }

    pub fn bytes(&mut self, value: &[u8]) {
        self.bytes.extend_from_slice(value);
    }

    pub fn fill(&mut self, byte: u8, count: usize) {
        self.bytes.resize(self.bytes.len() + count, byte);
    }

    /// Pads with `byte` until the buffer is `len` bytes long
    pub fn pad_to(&mut self, byte: u8, len: usize) {
        if self.bytes.len() < len {
            self.bytes.resize(len, byte);
        }
    }

    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
