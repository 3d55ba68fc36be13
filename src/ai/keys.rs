use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("credential ring requires at least one API key")]
pub struct EmptyKeyRing;

/// Ordered pool of API credentials with a rotating cursor. Handlers run
/// concurrently, so the cursor lives behind a mutex.
pub struct KeyRing {
    keys: Vec<String>,
    cursor: Mutex<usize>,
}

impl KeyRing {
    pub fn new(keys: Vec<String>) -> Result<Self, EmptyKeyRing> {
        if keys.is_empty() {
            return Err(EmptyKeyRing);
        }
        Ok(Self {
            keys,
            cursor: Mutex::new(0),
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn current(&self) -> String {
        self.keys[*self.cursor.lock()].clone()
    }

    pub fn active_index(&self) -> usize {
        *self.cursor.lock()
    }

    /// Advances the cursor to the next key, wrapping around. Returns the new
    /// index for logging.
    pub fn rotate(&self) -> usize {
        let mut cursor = self.cursor.lock();
        *cursor = (*cursor + 1) % self.keys.len();
        *cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: usize) -> KeyRing {
        KeyRing::new((0..n).map(|i| format!("key-{i}")).collect()).unwrap()
    }

    #[test]
    fn empty_key_list_is_rejected() {
        assert!(KeyRing::new(Vec::new()).is_err());
    }

    #[test]
    fn rotation_wraps_back_to_start() {
        for len in 1..=5 {
            let keys = ring(len);
            let start = keys.active_index();
            for _ in 0..len {
                keys.rotate();
            }
            assert_eq!(keys.active_index(), start);
        }
    }

    #[test]
    fn rotate_advances_through_every_key() {
        let keys = ring(3);
        assert_eq!(keys.current(), "key-0");
        assert_eq!(keys.rotate(), 1);
        assert_eq!(keys.current(), "key-1");
        assert_eq!(keys.rotate(), 2);
        assert_eq!(keys.current(), "key-2");
        assert_eq!(keys.rotate(), 0);
        assert_eq!(keys.current(), "key-0");
    }
}
