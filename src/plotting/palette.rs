/// Cycles through a fixed set of colors, one per series
#[derive(Debug, Clone)]
pub struct ColorSource<C> {
    colors: Vec<C>,
    index: usize,
}
impl<C: Clone> ColorSource<C> {
    /// Create a new color source from a list of colors
    #[must_use]
    pub fn new(colors: Vec<C>) -> Self {
        Self { colors, index: 0 }
    }

    /// Returns the next color, wrapping around at the end of the list
    ///
    /// Returns `None` only if the source was created without colors.
    pub fn next_color(&mut self) -> Option<C> {
        let color = self.colors.get(self.index)?.clone();
        self.index = (self.index + 1) % self.colors.len();
        Some(color)
    }
}
