/// Receives raw bytes as they are decoded.
///
/// All methods default to doing nothing, so `()` serves as the silent
/// observer used by [`Keytab::parse`](crate::Keytab::parse).
pub trait ParseObserver {
    /// An entry record of `body.len()` bytes starting at file offset `offset`.
    fn record(&mut self, offset: usize, body: &[u8]) {
        let _ = (offset, body);
    }

    /// A hole of `size` bytes starting at file offset `offset`.
    fn hole(&mut self, offset: usize, size: usize) {
        let _ = (offset, size);
    }

    /// Principal component `index` of the current record (the realm is 0).
    fn component(&mut self, index: usize, data: &[u8]) {
        let _ = (index, data);
    }
}

impl ParseObserver for () {}
