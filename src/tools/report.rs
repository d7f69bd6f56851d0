use log::info;

/// Size statistics for one compression run. The compressed size counts the
/// whole container, header and code table included.
pub struct Stats {
    pub original: usize,
    pub compressed: usize,
}

impl Stats {
    pub fn new(original: usize, compressed: usize) -> Self {
        Self {
            original,
            compressed,
        }
    }

    /// Compressed bytes per original byte. Callers never pass a zero
    /// original size; compression refuses empty input before this point.
    pub fn ratio(&self) -> f64 {
        self.compressed as f64 / self.original.max(1) as f64
    }

    pub fn space_saved_percent(&self) -> f64 {
        (1.0 - self.ratio()) * 100.0
    }

    /// Report the run to the user.
    pub fn report(&self) {
        info!("Original size: {} bytes.", self.original);
        info!("Compressed size: {} bytes.", self.compressed);
        info!(
            "Compression ratio: {:.4} ({:.2}% space saved).",
            self.ratio(),
            self.space_saved_percent()
        );
    }
}
