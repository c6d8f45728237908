/// Floor for both levels; a patch tessellated below 1 would be discarded.
pub const MIN_LEVEL: f32 = 1.0;

/// Inner and outer subdivision levels fed to the tessellation stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TessLevels {
    pub inner: f32,
    pub outer: f32,
}

impl Default for TessLevels {
    fn default() -> Self {
        Self {
            inner: 3.0,
            outer: 3.0,
        }
    }
}

impl TessLevels {
    /// No upper bound: the hardware clamps to its own maximum.
    pub fn increase(&mut self) {
        self.inner += 1.0;
        self.outer += 1.0;
    }

    pub fn decrease(&mut self) {
        self.inner = (self.inner - 1.0).max(MIN_LEVEL);
        self.outer = (self.outer - 1.0).max(MIN_LEVEL);
    }
}

#[cfg(test)]
mod tests {
    use super::TessLevels;

    #[test]
    fn starts_at_three() {
        let levels = TessLevels::default();
        assert_eq!(levels.inner, 3.0);
        assert_eq!(levels.outer, 3.0);
    }

    #[test]
    fn increase_is_unbounded() {
        let mut levels = TessLevels::default();
        for _ in 0..3 {
            levels.increase();
        }
        assert_eq!(levels, TessLevels { inner: 6.0, outer: 6.0 });
        for _ in 0..100 {
            levels.increase();
        }
        assert_eq!(levels.inner, 106.0);
        assert_eq!(levels.outer, 106.0);
    }

    #[test]
    fn decrease_clamps_at_one() {
        let mut levels = TessLevels::default();
        for _ in 0..5 {
            levels.decrease();
        }
        assert_eq!(levels, TessLevels { inner: 1.0, outer: 1.0 });
    }

    #[test]
    fn decrease_from_one_is_idempotent() {
        let mut levels = TessLevels { inner: 1.0, outer: 1.0 };
        levels.decrease();
        levels.decrease();
        assert_eq!(levels, TessLevels { inner: 1.0, outer: 1.0 });
    }

    #[test]
    fn counter_algebra() {
        let mut levels = TessLevels::default();
        for _ in 0..4 {
            levels.increase();
        }
        for _ in 0..2 {
            levels.decrease();
        }
        // 3 + 4 - 2
        assert_eq!(levels, TessLevels { inner: 5.0, outer: 5.0 });
    }
}
