use std::ops::AddAssign;

/// Byte buffer for assembling the content a solve script feeds the target.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    data: Vec<u8>,
}

impl AddAssign<&[u8]> for Payload {
    fn add_assign(&mut self, rhs: &[u8]) {
        self.data.extend_from_slice(rhs)
    }
}

impl AddAssign<Vec<u8>> for Payload {
    fn add_assign(&mut self, rhs: Vec<u8>) {
        self.data.extend_from_slice(&rhs)
    }
}

impl Payload {
    pub fn ljust(&mut self, size: usize, value: u8) {
        self.data.resize(size, value)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_slices_and_vecs() {
        let mut payload = Payload::default();
        payload += &b"LETME"[..];
        payload += b"WIN\n".to_vec();
        assert_eq!(payload.as_bytes(), b"LETMEWIN\n");
    }

    #[test]
    fn ljust_pads_to_length() {
        let mut payload = Payload::default();
        payload += &b"ab"[..];
        payload.ljust(4, b'\0');
        assert_eq!(payload.as_bytes(), b"ab\0\0");
    }
}
