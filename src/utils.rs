use std::time::Instant;

///
/// measure time in milli-seconds (ms) of closure.
///
pub fn timer<F, T>(f: F) -> (T, u128)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let ret = f();
    let duration = start.elapsed();
    (ret, duration.as_millis())
}

///
/// get resources directory (fixture models)
///
pub fn resource_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_returns_value() {
        let (x, t) = timer(|| (0..100).sum::<usize>());
        assert_eq!(x, 4950);
        assert!(t < 10_000);
    }

    #[test]
    fn resource_dir_has_cat_model() {
        assert!(resource_dir().join("cat.trans").exists());
        assert!(resource_dir().join("cat.emit").exists());
    }
}
