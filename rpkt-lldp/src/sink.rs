//! Delivery of decoded layers to a packet-decoding pipeline.

use alloc::vec::Vec;

use crate::error::LldpError;
use crate::frame::LldpFrame;
use crate::info::LldpInfo;

/// A consumer of the layers produced by [`decode_layers`].
pub trait LayerSink<'a> {
    /// Receive the decoded frame.
    fn add_frame(&mut self, frame: LldpFrame<'a>);

    /// Receive the decoded optional TLVs.
    fn add_info(&mut self, info: LldpInfo<'a>);
}

/// One decoded layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer<'a> {
    /// The frame layer.
    Frame(LldpFrame<'a>),
    /// The info layer.
    Info(LldpInfo<'a>),
}

impl<'a> LayerSink<'a> for Vec<Layer<'a>> {
    fn add_frame(&mut self, frame: LldpFrame<'a>) {
        self.push(Layer::Frame(frame));
    }

    fn add_info(&mut self, info: LldpInfo<'a>) {
        self.push(Layer::Info(info));
    }
}

/// Decode `buf` and deliver the frame layer followed by the info layer.
///
/// Nothing is delivered if the frame itself fails to decode. If the frame
/// decodes but an optional TLV is malformed, both layers are still delivered
/// and the first field error is returned.
pub fn decode_layers<'a, S>(buf: &'a [u8], sink: &mut S) -> Result<(), LldpError>
where
    S: LayerSink<'a> + ?Sized,
{
    let frame = LldpFrame::parse(buf)?;
    let (info, errors) = frame.info().into_parts();

    sink.add_frame(frame);
    sink.add_info(info);

    match errors.into_iter().next() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
