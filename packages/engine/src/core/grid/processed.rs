/// Per-tick "already handled" flags, one byte per cell.
///
/// A cell marked here is skipped by the scan and refused as a move
/// target for the rest of the tick.
pub struct ProcessedMask {
    flags: Vec<u8>,
}

impl ProcessedMask {
    pub fn new(size: usize) -> Self {
        Self { flags: vec![0; size] }
    }

    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        self.flags[idx] == 1
    }

    #[inline]
    pub fn mark(&mut self, idx: usize) {
        self.flags[idx] = 1;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.flags.fill(0);
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f == 1).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_every_mark() {
        let mut mask = ProcessedMask::new(8);
        mask.mark(1);
        mask.mark(6);
        mask.mark(6);
        assert!(mask.is_set(6));
        assert_eq!(mask.count(), 2);

        mask.clear();
        assert_eq!(mask.count(), 0);
        assert!(!mask.is_set(1));
    }
}
