#![expect(clippy::inline_always)]

use alloc::vec::Vec;

use crate::ScanError;

/// Bounded LIFO store of characters that were read and then handed back.
///
/// The top of the stack is the next character to be replayed. Sequences are
/// stored reversed so that popping yields them in their original order.
#[derive(Debug, Clone)]
pub(crate) struct PushbackBuffer {
    data: Vec<char>,
    capacity: usize,
}

impl PushbackBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn pop(&mut self) -> Option<char> {
        self.data.pop()
    }

    /// Pushes one character; it becomes the next one popped.
    pub(crate) fn push(&mut self, ch: char) -> Result<(), ScanError> {
        self.ensure_room(1)?;
        self.data.push(ch);
        Ok(())
    }

    /// Pushes a sequence so that popping replays it front to back.
    ///
    /// Either the whole sequence fits or nothing is pushed.
    pub(crate) fn push_all<I>(&mut self, chars: I) -> Result<(), ScanError>
    where
        I: DoubleEndedIterator<Item = char> + ExactSizeIterator,
    {
        self.ensure_room(chars.len())?;
        self.data.extend(chars.rev());
        Ok(())
    }

    fn ensure_room(&mut self, additional: usize) -> Result<(), ScanError> {
        let requested = self.data.len() + additional;
        if requested > self.capacity {
            tracing::debug!(
                capacity = self.capacity,
                requested,
                "pushback buffer overflow"
            );
            return Err(ScanError::PushbackOverflow {
                capacity: self.capacity,
                requested,
            });
        }
        self.data.reserve(additional);
        Ok(())
    }
}
