use std::time::{Duration, Instant};

/// Wall-clock time spent with the simulation playing.
///
/// Pausing freezes the accumulated total; clearing the board resets it.
#[derive(Default)]
pub struct PlayTimer {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl PlayTimer {
    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(started) = self.running_since.take() {
            self.accumulated += started.elapsed();
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.running_since = None;
    }

    pub fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlayTimer;
    use std::time::Duration;

    #[test]
    fn pause_freezes_elapsed() {
        let mut timer = PlayTimer::default();
        timer.start();
        timer.pause();
        let frozen = timer.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(timer.elapsed(), frozen);
    }

    #[test]
    fn reset_zeroes_elapsed() {
        let mut timer = PlayTimer::default();
        timer.start();
        timer.reset();
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn double_start_is_harmless() {
        let mut timer = PlayTimer::default();
        timer.start();
        timer.start();
        timer.pause();
        assert!(timer.elapsed() < Duration::from_secs(1));
    }
}
