use log::{debug, info};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

const FRAME_TIME_CAP: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameConfig {
    pub frame_time_cap: Duration,
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig {
            frame_time_cap: Duration::from_millis(FRAME_TIME_CAP),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Runs one callback per display frame until its token is cancelled.
pub struct FrameLoop {
    config: FrameConfig,
    token: CancelToken,
    frames: u64,
}

impl FrameLoop {
    pub fn new(config: FrameConfig, token: CancelToken) -> FrameLoop {
        FrameLoop {
            config,
            token,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The token is checked before every frame, so a cancellation made
    /// inside a frame prevents the next one from starting.
    pub fn run_until_cancelled<F>(&mut self, mut frame: F) -> u64
    where
        F: FnMut(u64),
    {
        let mut last_frame = Instant::now();
        loop {
            if self.token.is_cancelled() {
                info!("Frame loop cancelled after {} frames", self.frames);
                break;
            }
            frame(self.frames);
            self.frames += 1;

            let elapsed = last_frame.elapsed();
            debug!("Frame time: {:?}", elapsed);
            if let Some(remaining) = self.config.frame_time_cap.checked_sub(elapsed) {
                std::thread::sleep(remaining);
            }
            last_frame = Instant::now();
        }
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> FrameConfig {
        FrameConfig {
            frame_time_cap: Duration::from_millis(0),
        }
    }

    #[test]
    fn runs_until_the_frame_cancels() {
        let token = CancelToken::default();
        let mut frame_loop = FrameLoop::new(fast_config(), token.clone());
        let mut seen = vec![];
        let frames = frame_loop.run_until_cancelled(|frame| {
            seen.push(frame);
            if frame == 2 {
                token.cancel();
            }
        });
        assert_eq!(frames, 3);
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(frame_loop.frames(), 3);
    }

    #[test]
    fn cancelled_token_runs_no_frame() {
        let token = CancelToken::default();
        token.cancel();
        let mut frame_loop = FrameLoop::new(fast_config(), token);
        let mut ran = false;
        assert_eq!(frame_loop.run_until_cancelled(|_| ran = true), 0);
        assert!(!ran);
    }

    #[test]
    fn clones_share_cancellation() {
        let token = CancelToken::default();
        let other = token.clone();
        assert!(!token.is_cancelled());
        other.cancel();
        other.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn paces_frames_to_the_cap() {
        let token = CancelToken::default();
        let config = FrameConfig {
            frame_time_cap: Duration::from_millis(5),
        };
        let mut frame_loop = FrameLoop::new(config, token.clone());
        let start = Instant::now();
        frame_loop.run_until_cancelled(|frame| {
            if frame == 1 {
                token.cancel();
            }
        });
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
