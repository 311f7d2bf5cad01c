/// Bytes received but not yet decoded into records.
///
/// Only ever appended to, or shortened by dropping a prefix.
#[derive(Debug, Default, Clone)]
pub struct AccumulationBuffer {
    inner: Vec<u8>,
    consumed_total: u64,
}

impl AccumulationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, data: &[u8]) {
        self.inner.extend_from_slice(data);
    }

    /// Drops the first `n` bytes. `n` is clamped to the buffered length.
    pub fn consume(&mut self, n: usize) {
        let n = n.min(self.inner.len());
        if n == 0 {
            return;
        }
        if n == self.inner.len() {
            self.inner.clear();
        } else {
            self.inner.drain(..n);
        }
        self.consumed_total += n as u64;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total bytes dropped via [`consume`](Self::consume) over the buffer's lifetime.
    pub fn consumed_total(&self) -> u64 {
        self.consumed_total
    }

    pub fn take(self) -> Vec<u8> {
        self.inner
    }
}
