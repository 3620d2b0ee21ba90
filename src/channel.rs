//! Bounded event channel for interrupt-to-main-loop hand-off.
//!
//! Built on `critical-section` and `heapless::Deque`, so it needs no
//! allocator and is safe to use from interrupt handlers. Producers never
//! block: a full queue rejects the value and counts the overflow.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

struct Queue<T, const SIZE: usize> {
    items: Deque<T, SIZE>,
    overflows: u32,
}

/// A bounded channel shared between interrupt and thread context.
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Queue<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Queue {
                items: Deque::new(),
                overflows: 0,
            })),
        }
    }

    /// Producer handle, for the interrupt side.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Consumer handle. There should be exactly one.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Try to enqueue a value.
    ///
    /// A full channel hands the value back and bumps the overflow counter.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow_ref_mut(cs);
            match queue.items.push_back(value) {
                Ok(()) => Ok(()),
                Err(value) => {
                    queue.overflows = queue.overflows.saturating_add(1);
                    Err(TrySendError(value))
                }
            }
        })
    }

    /// Take the oldest value.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            self.queue
                .borrow_ref_mut(cs)
                .items
                .pop_front()
                .ok_or(TryReceiveError)
        })
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow_ref(cs).items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of values rejected because the channel was full.
    pub fn overflows(&self) -> u32 {
        critical_section::with(|cs| self.queue.borrow_ref(cs).overflows)
    }

    /// Drop every queued value.
    pub fn clear(&self) {
        critical_section::with(|cs| self.queue.borrow_ref_mut(cs).items.clear());
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    /// Enqueue, discarding the value if the channel is full.
    ///
    /// Returns true when the value was queued.
    pub fn send_lossy(&self, value: T) -> bool {
        self.channel.try_send(value).is_ok()
    }
}

/// Consumer side of a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Iterate over queued values until the channel is empty.
    pub fn drain(&self) -> impl Iterator<Item = T> + '_ {
        core::iter::from_fn(move || self.channel.try_receive().ok())
    }

    pub fn overflows(&self) -> u32 {
        self.channel.overflows()
    }
}
