/// Opaque player identity.
///
/// The engine only needs equality: it never interprets the value. Display
/// attributes (name, color) belong to the presentation layer, which owns the
/// mapping from id to however the player is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    pub const fn new(raw: u32) -> Self {
        PlayerId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_by_value() {
        assert_eq!(PlayerId::new(0), PlayerId::new(0));
        assert_ne!(PlayerId::new(0), PlayerId::new(1));
    }

    #[test]
    fn test_raw_roundtrip() {
        assert_eq!(PlayerId::new(7).raw(), 7);
    }
}
