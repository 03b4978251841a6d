//! Tests for per-rectangle progress tracking

#[cfg(test)]
mod tests {
    use pentotile::board::RectangleSize;
    use pentotile::io::progress::ProgressManager;
    use std::time::Duration;

    // Tests a full lifecycle across every rectangle
    // Verified by panicking when a bar length is exceeded
    #[test]
    fn test_progress_lifecycle() {
        let mut pm = ProgressManager::new();
        let sizes = RectangleSize::all();
        for (index, size) in sizes.iter().enumerate() {
            pm.add_rectangle(*size, index + 5);
        }

        for size in &sizes {
            pm.seed_finished(*size, 0);
            pm.seed_finished(*size, 3);
            pm.complete_rectangle(*size, 3, Duration::from_millis(120));
        }
        pm.finish();
    }

    // Tests default construction
    // Verified by deriving Default without a MultiProgress
    #[test]
    fn test_progress_manager_default() {
        let mut pm = ProgressManager::default();
        let size = RectangleSize::from_rows(5).expect("valid");
        pm.add_rectangle(size, 9);
        pm.seed_finished(size, 1);
        pm.finish();
    }

    // Tests updates for a rectangle without a bar
    // Verified by indexing bars without checking the rectangle
    #[test]
    fn test_unknown_rectangle_is_ignored() {
        let mut pm = ProgressManager::new();
        let known = RectangleSize::from_rows(3).expect("valid");
        let unknown = RectangleSize::from_rows(6).expect("valid");
        pm.add_rectangle(known, 8);

        pm.seed_finished(unknown, 10);
        pm.complete_rectangle(unknown, 10, Duration::from_secs(1));
        pm.finish();
    }

    // Tests a rectangle with no seeds
    // Verified by dividing the rate by the seed count
    #[test]
    fn test_zero_seed_rectangle() {
        let mut pm = ProgressManager::new();
        let size = RectangleSize::from_rows(4).expect("valid");
        pm.add_rectangle(size, 0);
        pm.complete_rectangle(size, 0, Duration::ZERO);
        pm.finish();
    }
}
