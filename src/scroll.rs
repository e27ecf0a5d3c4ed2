// src/scroll.rs
//! Shared scroll-progress observable. The site used to recompute viewport
//! geometry independently in every section; here one publisher owns the
//! 0–1 value and named consumers subscribe to it.

use tokio::sync::watch;

/// Fraction of the viewport height a heading travels before reaching full size.
const HEADING_SPAN: f64 = 0.5;
/// Fraction of the viewport height over which a section fades in and out.
const SECTION_SPAN: f64 = 0.75;

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// 1.0 when the section top enters the bottom of the viewport, falling to
/// 0.0 once it reaches the upper half.
pub fn heading_progress(section_top: f64, viewport_height: f64) -> f64 {
    if section_top <= 0.0 {
        return 0.0;
    }
    clamp01(section_top / (viewport_height * HEADING_SPAN))
}

/// 0 → 1 → 0 as the section center crosses the viewport center.
pub fn section_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let viewport_center = viewport_height / 2.0;
    let section_center = section_top + section_height / 2.0;
    let distance = (section_center - viewport_center).abs();
    1.0 - clamp01(distance / (viewport_height * SECTION_SPAN))
}

/// Publisher half of the shared observable.
pub struct ScrollProgress {
    tx: watch::Sender<f64>,
}

impl ScrollProgress {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0.0);
        Self { tx }
    }

    /// Publish a new progress value, clamped to 0..=1.
    pub fn publish(&self, value: f64) {
        let _ = self.tx.send(clamp01(value));
    }

    pub fn subscribe(&self, name: &'static str) -> ScrollConsumer {
        ScrollConsumer {
            name,
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Named subscription handle for one presentation component.
pub struct ScrollConsumer {
    pub name: &'static str,
    rx: watch::Receiver<f64>,
}

impl ScrollConsumer {
    pub fn current(&self) -> f64 {
        *self.rx.borrow()
    }

    /// Wait for the next published value. Yields the latest value even if
    /// the publisher is gone.
    pub async fn changed(&mut self) -> f64 {
        let _ = self.rx.changed().await;
        *self.rx.borrow_and_update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_progress_is_zero_past_the_top() {
        assert_eq!(heading_progress(0.0, 800.0), 0.0);
        assert_eq!(heading_progress(-120.0, 800.0), 0.0);
    }

    #[test]
    fn heading_progress_saturates_at_half_viewport() {
        assert_eq!(heading_progress(400.0, 800.0), 1.0);
        assert_eq!(heading_progress(900.0, 800.0), 1.0);
        assert_eq!(heading_progress(200.0, 800.0), 0.5);
    }

    #[test]
    fn section_progress_peaks_when_centered() {
        // Section center at viewport center.
        assert_eq!(section_progress(200.0, 400.0, 800.0), 1.0);
        // Fully off by more than 0.75 * viewport.
        assert_eq!(section_progress(1200.0, 400.0, 800.0), 0.0);
    }

    #[test]
    fn section_progress_is_symmetric_around_center() {
        // Section centers at 700 and 100: both 300px from the viewport center.
        let entering = section_progress(550.0, 300.0, 800.0);
        let leaving = section_progress(-50.0, 300.0, 800.0);
        assert!((entering - leaving).abs() < 1e-9);
    }

    #[tokio::test]
    async fn consumers_observe_published_clamped_values() {
        let progress = ScrollProgress::new();
        let mut blog = progress.subscribe("blog");
        let about = progress.subscribe("about");
        assert_eq!(blog.current(), 0.0);

        progress.publish(1.7);
        assert_eq!(blog.changed().await, 1.0);
        assert_eq!(about.current(), 1.0);
        assert_eq!(blog.name, "blog");
    }
}
