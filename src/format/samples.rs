//! Per-channel sample storage

use crate::error::{Error, Result};

/// Signed samples split by channel, one sequence per channel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelSampleSet {
    channels: Vec<Vec<i32>>,
}

impl ChannelSampleSet {
    /// Create an empty set with `channels` sequences
    pub fn new(channels: usize) -> Self {
        ChannelSampleSet {
            channels: vec![Vec::new(); channels],
        }
    }

    /// Wrap existing per-channel sequences; all must have the same length
    pub fn from_channels(channels: Vec<Vec<i32>>) -> Result<Self> {
        if let Some(first) = channels.first() {
            if let Some(bad) = channels.iter().position(|c| c.len() != first.len()) {
                return Err(Error::invalid_input(format!(
                    "channel {} has {} samples, channel 0 has {}",
                    bad,
                    channels[bad].len(),
                    first.len()
                )));
            }
        }
        Ok(ChannelSampleSet { channels })
    }

    /// Split an interleaved stream into `channels` sequences. A trailing
    /// partial frame is dropped.
    pub fn deinterleave(samples: &[i32], channels: usize) -> Self {
        let mut set = Self::new(channels);
        if channels == 0 {
            return set;
        }
        for frame in samples.chunks_exact(channels) {
            set.channels
                .iter_mut()
                .zip(frame)
                .for_each(|(channel, &sample)| channel.push(sample));
        }
        set
    }

    /// Append one sample to each channel; the frame must hold exactly one
    /// sample per channel
    pub fn push_frame(&mut self, frame: &[i32]) -> Result<()> {
        if frame.len() != self.channels.len() {
            return Err(Error::invalid_input(format!(
                "frame has {} samples, set has {} channels",
                frame.len(),
                self.channels.len()
            )));
        }
        for (channel, &sample) in self.channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
        Ok(())
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    /// Samples of one channel
    pub fn channel(&self, index: usize) -> Option<&[i32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    pub fn channels(&self) -> &[Vec<i32>] {
        &self.channels
    }

    /// Flatten into channel-minor order: frame 0 of every channel, then
    /// frame 1, and so on
    pub fn interleave(&self) -> Vec<i32> {
        let frames = self.frames();
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for i in 0..frames {
            out.extend(self.channels.iter().map(|c| c[i]));
        }
        out
    }

    /// Drop leading frames in which every channel is exactly zero.
    ///
    /// Returns the number of frames removed. A fully silent set ends up
    /// empty.
    pub fn trim_leading_silence(&mut self) -> usize {
        let frames = self.frames();
        let silent = (0..frames)
            .take_while(|&i| self.channels.iter().all(|c| c[i] == 0))
            .count();
        if silent > 0 {
            for channel in &mut self.channels {
                channel.drain(..silent);
            }
        }
        silent
    }
}
