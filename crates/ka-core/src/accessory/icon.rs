use bytes::Bytes;

/// Encoded icon bytes (PNG) delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    data: Bytes,
}

impl Icon {
    pub fn from_png_bytes(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.data
    }
}
