// Frame scheduling. The network never reschedules itself; `run` does it through
// a `FrameClock` until the returned `StopHandle` is stopped.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::network::ParticleNetwork;
use crate::surface::Surface;

pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Something that calls back once on the next display refresh with a
/// timestamp in milliseconds.
pub trait FrameClock {
    fn request_frame(&self, callback: FrameCallback);
}

#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Clock driven by hand, one frame per `step`.
#[derive(Default)]
pub struct ManualClock {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the oldest pending callback. Returns false if none was waiting.
    pub fn step(&self, timestamp: f64) -> bool {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(callback) => {
                callback(timestamp);
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl FrameClock for ManualClock {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}

/// Renders `network` once per frame of `clock` until stopped.
pub fn run<S, C>(network: Rc<RefCell<ParticleNetwork<S>>>, clock: Rc<C>) -> StopHandle
where
    S: Surface + 'static,
    C: FrameClock + 'static,
{
    let stop = StopHandle::new();
    schedule(network, clock, stop.clone());
    stop
}

fn schedule<S, C>(network: Rc<RefCell<ParticleNetwork<S>>>, clock: Rc<C>, stop: StopHandle)
where
    S: Surface + 'static,
    C: FrameClock + 'static,
{
    let next_clock = clock.clone();
    clock.request_frame(Box::new(move |_timestamp| {
        if stop.is_stopped() {
            return;
        }
        {
            #[cfg(feature = "frame-timing")]
            let _timer = crate::utils::Timer::new("ParticleNetwork::render_frame");
            network.borrow_mut().render_frame();
        }
        schedule(network, next_clock, stop);
    }));
}
